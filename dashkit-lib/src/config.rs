//! Table view configuration

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::table::BulkAction;
use crate::table::SearchMode;
use crate::table::StatusOption;

/// Page sizes offered by the "rows per page" selector.
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 5] = [10, 20, 30, 40, 50];

/// Configuration for a [`TabularView`](crate::table::TabularView).
///
/// Display names, status menu entries and bulk actions are supplied here at
/// construction; empty lists fall back to the built-in sets.
///
/// # Example
///
/// ```
/// use dashkit_lib::config::TableConfig;
///
/// let config = TableConfig::default()
///     .with_page_size(20)
///     .with_search_fields(["name", "email", "department"])
///     .with_display_name("phone_number", "Phone");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Initial page size.
    ///
    /// Default: 10
    pub page_size: usize,

    /// Allowed page sizes, in menu order.
    ///
    /// Default: 10, 20, 30, 40, 50
    pub page_size_options: Vec<usize>,

    /// Fields (dot paths allowed) searched by the global filter.
    ///
    /// Empty means every string-valued top-level field.
    pub search_fields: Vec<String>,

    /// How the global query matches text.
    pub search_mode: SearchMode,

    /// Placeholder shown in the search box.
    pub search_placeholder: String,

    /// Column driving the single-column equality filter.
    ///
    /// Default: `"status"`
    pub status_column: String,

    /// Entries for the status filter menu. Empty uses the built-in set.
    pub status_options: Vec<StatusOption>,

    /// Column id to display name overrides.
    pub display_names: BTreeMap<String, String>,

    /// Bulk actions offered when rows are selected. Empty uses the built-in set.
    pub bulk_actions: Vec<BulkAction>,

    /// Whether the export control is offered.
    pub enable_export: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE_OPTIONS[0],
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            search_fields: Vec::new(),
            search_mode: SearchMode::default(),
            search_placeholder: "Search...".to_string(),
            status_column: "status".to_string(),
            status_options: Vec::new(),
            display_names: BTreeMap::new(),
            bulk_actions: Vec::new(),
            enable_export: true,
        }
    }
}

impl TableConfig {
    /// Creates a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial page size.
    pub fn with_page_size(mut self, size: usize) -> Self {
        self.page_size = size;
        self
    }

    /// Sets the allowed page sizes.
    pub fn with_page_size_options(mut self, options: impl Into<Vec<usize>>) -> Self {
        self.page_size_options = options.into();
        self
    }

    /// Sets the fields searched by the global filter.
    pub fn with_search_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the search mode.
    pub fn with_search_mode(mut self, mode: SearchMode) -> Self {
        self.search_mode = mode;
        self
    }

    /// Sets the search placeholder.
    pub fn with_search_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.search_placeholder = placeholder.into();
        self
    }

    /// Sets the column used by the status filter.
    pub fn with_status_column(mut self, column: impl Into<String>) -> Self {
        self.status_column = column.into();
        self
    }

    /// Sets the status filter menu entries.
    pub fn with_status_options(mut self, options: impl Into<Vec<StatusOption>>) -> Self {
        self.status_options = options.into();
        self
    }

    /// Adds a display name override for a column.
    pub fn with_display_name(mut self, column: impl Into<String>, name: impl Into<String>) -> Self {
        self.display_names.insert(column.into(), name.into());
        self
    }

    /// Sets the bulk actions.
    pub fn with_bulk_actions(mut self, actions: impl Into<Vec<BulkAction>>) -> Self {
        self.bulk_actions = actions.into();
        self
    }

    /// Enables or disables the export control.
    pub fn with_export(mut self, enabled: bool) -> Self {
        self.enable_export = enabled;
        self
    }

    /// Returns the status menu entries, falling back to the built-in set.
    pub fn effective_status_options(&self) -> Vec<StatusOption> {
        if self.status_options.is_empty() {
            StatusOption::defaults()
        } else {
            self.status_options.clone()
        }
    }

    /// Returns the bulk actions, falling back to activate/suspend/delete.
    pub fn effective_bulk_actions(&self) -> Vec<BulkAction> {
        if self.bulk_actions.is_empty() {
            BulkAction::defaults()
        } else {
            self.bulk_actions.clone()
        }
    }

    /// Initial page size, snapped to the first option when not allowed.
    pub(crate) fn initial_page_size(&self) -> usize {
        if self.page_size_options.contains(&self.page_size) {
            self.page_size
        } else {
            self.page_size_options
                .first()
                .copied()
                .unwrap_or(DEFAULT_PAGE_SIZE_OPTIONS[0])
        }
    }
}
