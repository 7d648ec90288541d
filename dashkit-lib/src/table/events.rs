//! Caller notifications fired by the table view.

use std::fmt;

use crate::model::Record;

type BulkActionHandler = Box<dyn FnMut(&str, &[Record]) + Send>;
type ExportHandler = Box<dyn FnMut() + Send>;
type RowClickHandler = Box<dyn FnMut(&Record) + Send>;

/// Fire-and-forget callbacks.
///
/// The view never waits on these or assumes what they do. A bulk action
/// handler that changes data is expected to push the new rows back through
/// [`TabularView::set_rows`](super::TabularView::set_rows) and adjust the
/// selection itself.
#[derive(Default)]
pub struct TableHandlers {
    pub(super) on_bulk_action: Option<BulkActionHandler>,
    pub(super) on_export: Option<ExportHandler>,
    pub(super) on_row_click: Option<RowClickHandler>,
}

impl TableHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called with `(action, selected_records)`.
    pub fn on_bulk_action<F>(mut self, handler: F) -> Self
    where
        F: FnMut(&str, &[Record]) + Send + 'static,
    {
        self.on_bulk_action = Some(Box::new(handler));
        self
    }

    pub fn on_export<F>(mut self, handler: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.on_export = Some(Box::new(handler));
        self
    }

    pub fn on_row_click<F>(mut self, handler: F) -> Self
    where
        F: FnMut(&Record) + Send + 'static,
    {
        self.on_row_click = Some(Box::new(handler));
        self
    }
}

impl fmt::Debug for TableHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableHandlers")
            .field("on_bulk_action", &self.on_bulk_action.is_some())
            .field("on_export", &self.on_export.is_some())
            .field("on_row_click", &self.on_row_click.is_some())
            .finish()
    }
}
