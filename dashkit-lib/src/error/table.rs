//! Table view error types

/// Errors returned by [`TabularView`](crate::table::TabularView) operations.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// No column with the given id exists.
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    /// The column exists but cannot be sorted.
    #[error("Column '{0}' is not sortable")]
    NotSortable(String),

    /// The column exists but cannot be hidden.
    #[error("Column '{0}' cannot be hidden")]
    NotHideable(String),

    /// No bulk action with the given identifier is configured.
    #[error("Unknown bulk action: {0}")]
    UnknownAction(String),

    /// Page size is not one of the configured options.
    #[error("Invalid page size {size}; expected one of {options:?}")]
    InvalidPageSize { size: usize, options: Vec<usize> },

    /// Export failed while writing CSV.
    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    /// Export failed while flushing the writer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TableError {
    /// Creates a new invalid page size error.
    pub fn invalid_page_size(size: usize, options: &[usize]) -> Self {
        Self::InvalidPageSize {
            size,
            options: options.to_vec(),
        }
    }
}
