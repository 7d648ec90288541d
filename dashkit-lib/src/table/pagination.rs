//! Pagination stage: fixed-size windows over the sorted rows.

use std::ops::Range;

/// Page window state.
///
/// Invariant: `page_index < page_count(len)` whenever `len > 0`, and
/// `page_index == 0` when `len == 0`. Callers keep it by passing the
/// current filtered length to every mutating method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub page_index: usize,
    pub page_size: usize,
}

impl PaginationState {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
        }
    }

    /// Number of pages for `len` rows: `ceil(len / page_size)`.
    pub fn page_count(&self, len: usize) -> usize {
        len.div_ceil(self.page_size)
    }

    /// Row range shown on the current page.
    pub fn window(&self, len: usize) -> Range<usize> {
        let start = (self.page_index * self.page_size).min(len);
        let end = (start + self.page_size).min(len);
        start..end
    }

    /// Highest valid page index for `len` rows.
    fn last_index(&self, len: usize) -> usize {
        self.page_count(len).saturating_sub(1)
    }

    /// Pulls the page index back into range. Returns `true` if it moved.
    pub fn clamp(&mut self, len: usize) -> bool {
        let clamped = self.page_index.min(self.last_index(len));
        let moved = clamped != self.page_index;
        self.page_index = clamped;
        moved
    }

    /// Jumps to a page, clamped to the valid range.
    pub fn set_page_index(&mut self, index: usize, len: usize) {
        self.page_index = index.min(self.last_index(len));
    }

    /// Changes the page size, keeping the first visible row in view.
    pub fn set_page_size(&mut self, size: usize, len: usize) {
        let size = size.max(1);
        let first_row = self.page_index * self.page_size;
        self.page_size = size;
        self.page_index = first_row / size;
        self.clamp(len);
    }

    pub fn reset(&mut self) {
        self.page_index = 0;
    }

    pub fn can_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_next(&self, len: usize) -> bool {
        self.page_index + 1 < self.page_count(len)
    }

    pub fn previous(&mut self) {
        self.page_index = self.page_index.saturating_sub(1);
    }

    pub fn next(&mut self, len: usize) {
        if self.can_next(len) {
            self.page_index += 1;
        }
    }

    pub fn first(&mut self) {
        self.page_index = 0;
    }

    pub fn last(&mut self, len: usize) {
        self.page_index = self.last_index(len);
    }
}
