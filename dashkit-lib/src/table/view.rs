//! The table view: row store plus filter → sort → paginate pipeline.

use log::debug;

use super::events::TableHandlers;
use super::filter::{ColumnFilter, FilterState, filter_rows};
use super::pagination::PaginationState;
use super::selection::Selection;
use super::sort::{SortDirection, SortState, sort_indices};
use super::visibility::{ColumnVisibility, display_name};
use super::{BulkAction, ColumnSpec, StatusOption};
use crate::config::TableConfig;
use crate::error::TableError;
use crate::model::Record;

/// Headless data table over an in-memory record set.
///
/// The view owns UI state only (query, column filter, sort, page, selection,
/// column visibility). Records are replaced wholesale with
/// [`set_rows`](Self::set_rows) and never mutated by the view.
///
/// # Example
///
/// ```
/// use dashkit_lib::config::TableConfig;
/// use dashkit_lib::model::Record;
/// use dashkit_lib::table::{ColumnSpec, TabularView};
///
/// let rows = (1..=12).map(|i| Record::new(i.to_string()).set("name", format!("user {i}"))).collect();
/// let mut view = TabularView::new(
///     vec![ColumnSpec::field("name", "Name").sortable()],
///     rows,
///     TableConfig::default().with_page_size(10),
/// );
/// view.next_page();
/// assert_eq!(view.page_rows().len(), 2);
/// ```
#[derive(Debug)]
pub struct TabularView {
    columns: Vec<ColumnSpec>,
    rows: Vec<Record>,
    config: TableConfig,
    filter: FilterState,
    sort: SortState,
    pagination: PaginationState,
    selection: Selection,
    visibility: ColumnVisibility,
    loading: bool,
    handlers: TableHandlers,
}

impl TabularView {
    /// Create a view over `rows`.
    pub fn new(columns: Vec<ColumnSpec>, rows: Vec<Record>, config: TableConfig) -> Self {
        let pagination = PaginationState::new(config.initial_page_size());
        Self {
            columns,
            rows,
            config,
            filter: FilterState::default(),
            sort: SortState::none(),
            pagination,
            selection: Selection::new(),
            visibility: ColumnVisibility::new(),
            loading: false,
            handlers: TableHandlers::default(),
        }
    }

    /// Attach caller notifications.
    pub fn with_handlers(mut self, handlers: TableHandlers) -> Self {
        self.handlers = handlers;
        self
    }

    /// Start with a sort applied.
    pub fn with_sort(mut self, column_id: &str, direction: SortDirection) -> Result<Self, TableError> {
        self.set_sort(column_id, direction)?;
        Ok(self)
    }

    // -------------------------------------------------------------------------
    // Data
    // -------------------------------------------------------------------------

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// All source rows, unfiltered.
    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    /// Replace the source rows.
    ///
    /// Selection is kept; ids that disappeared simply stop matching. The page
    /// index is clamped to the new filtered length.
    pub fn set_rows(&mut self, rows: Vec<Record>) {
        self.rows = rows;
        self.clamp_page();
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    fn column(&self, column_id: &str) -> Result<&ColumnSpec, TableError> {
        self.columns
            .iter()
            .find(|c| c.id == column_id)
            .ok_or_else(|| TableError::UnknownColumn(column_id.to_string()))
    }

    // -------------------------------------------------------------------------
    // Pipeline
    // -------------------------------------------------------------------------

    /// Indices of rows passing the filter stage, in source order.
    fn filtered_indices(&self) -> Vec<usize> {
        filter_rows(
            &self.rows,
            &self.columns,
            &self.filter,
            &self.config.search_fields,
            self.config.search_mode,
        )
    }

    /// Indices of filtered rows in display order.
    fn ordered_indices(&self) -> Vec<usize> {
        let mut indices = self.filtered_indices();
        if let Some(column_id) = &self.sort.column_id
            && let Ok(column) = self.column(column_id)
        {
            sort_indices(&mut indices, &self.rows, column, self.sort.direction);
        }
        indices
    }

    /// Number of rows passing the filter.
    pub fn filtered_count(&self) -> usize {
        self.filtered_indices().len()
    }

    /// Filtered rows in display order, across all pages.
    pub fn filtered_rows(&self) -> Vec<&Record> {
        self.ordered_indices().into_iter().map(|i| &self.rows[i]).collect()
    }

    fn filtered_ids(&self) -> Vec<String> {
        self.filtered_rows().into_iter().map(|r| r.id().to_string()).collect()
    }

    /// Rows on the current page.
    pub fn page_rows(&self) -> Vec<&Record> {
        let ordered = self.ordered_indices();
        let window = self.pagination.window(ordered.len());
        ordered[window].iter().map(|&i| &self.rows[i]).collect()
    }

    fn clamp_page(&mut self) {
        let len = self.filtered_count();
        if self.pagination.clamp(len) {
            debug!("page index clamped to {} ({} rows)", self.pagination.page_index, len);
        }
    }

    // -------------------------------------------------------------------------
    // Filtering
    // -------------------------------------------------------------------------

    pub fn filter_state(&self) -> &FilterState {
        &self.filter
    }

    pub fn global_query(&self) -> &str {
        &self.filter.global_query
    }

    /// Set the free-text query. Always returns to the first page.
    pub fn set_global_query(&mut self, query: impl Into<String>) {
        self.filter.global_query = query.into();
        self.pagination.reset();
        debug!("global query set to {:?}", self.filter.global_query);
    }

    /// Constrain a column to equal `value`. An empty value removes the constraint.
    pub fn set_column_filter(&mut self, column_id: &str, value: impl Into<String>) -> Result<(), TableError> {
        self.column(column_id)?;
        self.filter.column_filter = Some(ColumnFilter::new(column_id, value));
        self.pagination.reset();
        debug!("column filter set to {:?}", self.filter.column_filter);
        Ok(())
    }

    pub fn clear_column_filter(&mut self) {
        self.filter.column_filter = None;
        self.pagination.reset();
    }

    /// Whether the configured status column exists; the status menu is only
    /// offered when it does.
    pub fn has_status_column(&self) -> bool {
        self.column(&self.config.status_column).is_ok()
    }

    /// Filter on the configured status column.
    pub fn set_status_filter(&mut self, value: impl Into<String>) -> Result<(), TableError> {
        let column_id = self.config.status_column.clone();
        self.set_column_filter(&column_id, value)
    }

    /// Status menu entries with their checked state, or `None` when the
    /// status column does not exist. The first entry is "All Statuses".
    pub fn status_menu(&self) -> Option<Vec<(StatusOption, bool)>> {
        if !self.has_status_column() {
            return None;
        }
        let current = self
            .filter
            .active_column_filter()
            .filter(|f| f.column_id == self.config.status_column)
            .map(|f| f.value.as_str());

        let mut menu = vec![(StatusOption::new("", "All Statuses"), current.is_none())];
        menu.extend(
            self.config
                .effective_status_options()
                .into_iter()
                .map(|option| {
                    let checked = current == Some(option.value.as_str());
                    (option, checked)
                }),
        );
        Some(menu)
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    /// Sort by a column, replacing any previous sort.
    pub fn set_sort(&mut self, column_id: &str, direction: SortDirection) -> Result<(), TableError> {
        let column = self.column(column_id)?;
        if !column.sortable {
            return Err(TableError::NotSortable(column_id.to_string()));
        }
        self.sort = SortState::new(column_id, direction);
        debug!("sort set to {} {:?}", column_id, direction);
        Ok(())
    }

    /// Header click: same column flips direction, new column starts ascending.
    pub fn toggle_sort(&mut self, column_id: &str) -> Result<&SortState, TableError> {
        let column = self.column(column_id)?;
        if !column.sortable {
            return Err(TableError::NotSortable(column_id.to_string()));
        }
        self.sort = self.sort.toggled(column_id);
        debug!("sort toggled to {:?}", self.sort);
        Ok(&self.sort)
    }

    pub fn clear_sort(&mut self) {
        self.sort = SortState::none();
    }

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    pub fn pagination(&self) -> PaginationState {
        self.pagination
    }

    pub fn page_index(&self) -> usize {
        self.pagination.page_index
    }

    pub fn page_size(&self) -> usize {
        self.pagination.page_size
    }

    pub fn page_count(&self) -> usize {
        self.pagination.page_count(self.filtered_count())
    }

    pub fn page_size_options(&self) -> &[usize] {
        &self.config.page_size_options
    }

    /// Change the page size, keeping the first visible row in view.
    pub fn set_page_size(&mut self, size: usize) -> Result<(), TableError> {
        if !self.config.page_size_options.contains(&size) {
            return Err(TableError::invalid_page_size(size, &self.config.page_size_options));
        }
        let len = self.filtered_count();
        self.pagination.set_page_size(size, len);
        debug!("page size set to {} (page {})", size, self.pagination.page_index);
        Ok(())
    }

    /// Jump to a page, clamped to the valid range.
    pub fn set_page_index(&mut self, index: usize) {
        let len = self.filtered_count();
        self.pagination.set_page_index(index, len);
    }

    pub fn can_previous_page(&self) -> bool {
        self.pagination.can_previous()
    }

    pub fn can_next_page(&self) -> bool {
        self.pagination.can_next(self.filtered_count())
    }

    pub fn next_page(&mut self) {
        let len = self.filtered_count();
        self.pagination.next(len);
    }

    pub fn previous_page(&mut self) {
        self.pagination.previous();
    }

    pub fn first_page(&mut self) {
        self.pagination.first();
    }

    pub fn last_page(&mut self) {
        let len = self.filtered_count();
        self.pagination.last(len);
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.is_selected(id)
    }

    /// Checkbox click on a row. Returns the new selected state.
    pub fn toggle_row(&mut self, id: &str) -> bool {
        let (added, _) = self.selection.toggle(id);
        !added.is_empty()
    }

    pub fn select_row(&mut self, id: &str) {
        self.selection.insert(id);
    }

    pub fn deselect_row(&mut self, id: &str) {
        self.selection.remove(id);
    }

    /// Shift-click: select from the last clicked row to `id` in display order.
    pub fn select_range_to(&mut self, id: &str) -> Vec<String> {
        let ordered = self.filtered_ids();
        let ordered: Vec<&str> = ordered.iter().map(String::as_str).collect();
        self.selection.range_select(id, &ordered)
    }

    /// Select every row matching the current filter, on every page.
    /// Returns the ids that were newly selected.
    pub fn select_all_filtered(&mut self) -> Vec<String> {
        let ids = self.filtered_ids();
        let ids: Vec<&str> = ids.iter().map(String::as_str).collect();
        let added = self.selection.select_all(&ids);
        debug!("selected all {} filtered rows ({} new)", ids.len(), added.len());
        added
    }

    /// Header checkbox: select all filtered rows, or deselect them when
    /// they are all selected already.
    pub fn toggle_all_filtered(&mut self) {
        let ids = self.filtered_ids();
        let ids: Vec<&str> = ids.iter().map(String::as_str).collect();
        if !ids.is_empty() && self.selection.count_in(ids.iter().copied()) == ids.len() {
            self.selection.deselect_all(&ids);
        } else {
            self.selection.select_all(&ids);
        }
    }

    /// Select every row on the current page.
    pub fn select_page(&mut self) -> Vec<String> {
        let ids: Vec<String> = self.page_rows().into_iter().map(|r| r.id().to_string()).collect();
        let ids: Vec<&str> = ids.iter().map(String::as_str).collect();
        self.selection.select_all(&ids)
    }

    pub fn clear_selection(&mut self) {
        let removed = self.selection.clear();
        debug!("selection cleared ({} ids)", removed.len());
    }

    /// Selected rows that match the current filter, in display order.
    ///
    /// This is the set bulk actions operate on.
    pub fn selected_records(&self) -> Vec<&Record> {
        self.filtered_rows()
            .into_iter()
            .filter(|r| self.selection.is_selected(r.id()))
            .collect()
    }

    /// Number of selected rows that match the current filter.
    pub fn selected_count(&self) -> usize {
        self.selected_records().len()
    }

    /// Footer text, e.g. `"3 of 40 row(s) selected."`.
    pub fn selection_summary(&self) -> String {
        format!(
            "{} of {} row(s) selected.",
            self.selected_count(),
            self.filtered_count()
        )
    }

    // -------------------------------------------------------------------------
    // Bulk actions and notifications
    // -------------------------------------------------------------------------

    pub fn bulk_actions(&self) -> Vec<BulkAction> {
        self.config.effective_bulk_actions()
    }

    /// Warning shown before a bulk action runs.
    pub fn bulk_warning(&self, action: &str) -> Option<String> {
        let count = self.selected_count();
        (count > 0).then(|| format!("'{action}' will affect {count} record(s) matching the current filter"))
    }

    /// Hand the selected records to the bulk action handler.
    ///
    /// The view changes nothing; the caller applies the effect. Returns the
    /// number of records passed, zero when nothing is selected.
    pub fn dispatch_bulk_action(&mut self, action: &str) -> Result<usize, TableError> {
        if !self.bulk_actions().iter().any(|a| a.action == action) {
            return Err(TableError::UnknownAction(action.to_string()));
        }
        let records: Vec<Record> = self.selected_records().into_iter().cloned().collect();
        if records.is_empty() {
            return Ok(0);
        }
        debug!("dispatching bulk action '{}' on {} record(s)", action, records.len());
        if let Some(handler) = self.handlers.on_bulk_action.as_mut() {
            handler(action, &records);
        }
        Ok(records.len())
    }

    /// Row click. Fires the handler when the id is in the filtered set.
    pub fn click_row(&mut self, id: &str) -> bool {
        let record = self.filtered_rows().into_iter().find(|r| r.id() == id).cloned();
        match (record, self.handlers.on_row_click.as_mut()) {
            (Some(record), Some(handler)) => {
                handler(&record);
                true
            }
            _ => false,
        }
    }

    /// Export button. Fires the export handler when export is enabled.
    pub fn request_export(&mut self) -> bool {
        if !self.config.enable_export {
            return false;
        }
        match self.handlers.on_export.as_mut() {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }

    // -------------------------------------------------------------------------
    // Column visibility
    // -------------------------------------------------------------------------

    pub fn visibility(&self) -> &ColumnVisibility {
        &self.visibility
    }

    /// Show or hide a column. Only hideable columns can be hidden.
    pub fn set_column_visible(&mut self, column_id: &str, visible: bool) -> Result<(), TableError> {
        let column = self.column(column_id)?;
        if !visible && !column.hideable {
            return Err(TableError::NotHideable(column_id.to_string()));
        }
        self.visibility.set_visible(column_id, visible);
        Ok(())
    }

    /// Columns to draw, in declaration order.
    pub fn visible_columns(&self) -> Vec<&ColumnSpec> {
        self.visibility.visible(&self.columns).collect()
    }

    /// Label for a column in menus and export headers.
    pub fn column_display_name(&self, column_id: &str) -> String {
        display_name(column_id, &self.config.display_names)
    }

    /// "View" menu: hideable columns with display name and visibility.
    pub fn column_menu(&self) -> Vec<(String, String, bool)> {
        self.columns
            .iter()
            .filter(|c| c.hideable)
            .map(|c| {
                (
                    c.id.clone(),
                    self.column_display_name(&c.id),
                    self.visibility.is_visible(&c.id),
                )
            })
            .collect()
    }
}
