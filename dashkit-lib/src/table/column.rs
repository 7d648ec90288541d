//! Column specifications.

use std::fmt;
use std::sync::Arc;

use crate::model::Record;
use crate::model::Value;

/// Reads a column's value out of a record.
pub type Accessor = Arc<dyn Fn(&Record) -> Value + Send + Sync>;

/// Formats a column's value for display.
pub type CellFormatter = Arc<dyn Fn(&Record, &Value) -> String + Send + Sync>;

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Column configuration.
///
/// A column declares how to read its value from a record, the header text,
/// an optional cell formatter, and whether it can be sorted or hidden.
/// Specs are immutable once the view is built; visibility lives in
/// [`ColumnVisibility`](super::ColumnVisibility).
///
/// # Examples
///
/// ```
/// use dashkit_lib::model::Value;
/// use dashkit_lib::table::ColumnSpec;
///
/// let columns = vec![
///     ColumnSpec::field("name", "Name").sortable(),
///     ColumnSpec::field("vehicle.plate", "Plate"),
///     ColumnSpec::new("rides", "Rides", |r| r.get("total_rides").cloned().unwrap_or(Value::Null))
///         .sortable()
///         .hideable(),
/// ];
/// ```
#[derive(Clone)]
pub struct ColumnSpec {
    /// Column id, used for sort/filter/visibility state.
    pub id: String,
    /// Column header text.
    pub header: String,
    /// Horizontal alignment.
    pub align: Alignment,
    /// Whether this column is sortable.
    pub sortable: bool,
    /// Whether this column can be hidden.
    pub hideable: bool,
    accessor: Accessor,
    formatter: Option<CellFormatter>,
}

impl ColumnSpec {
    /// Create a column with an explicit accessor.
    pub fn new<F>(id: impl Into<String>, header: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&Record) -> Value + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            header: header.into(),
            align: Alignment::Left,
            sortable: false,
            hideable: false,
            accessor: Arc::new(accessor),
            formatter: None,
        }
    }

    /// Create a column that reads the field named by `path`.
    ///
    /// Dot-separated paths descend into nested records. The column id is the
    /// path itself.
    pub fn field(path: impl Into<String>, header: impl Into<String>) -> Self {
        let path = path.into();
        let lookup = path.clone();
        Self::new(path, header, move |record: &Record| {
            record.get_path(&lookup).cloned().unwrap_or(Value::Null)
        })
    }

    /// Set the column alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Make the column sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Allow the column to be hidden.
    pub fn hideable(mut self) -> Self {
        self.hideable = true;
        self
    }

    /// Set a custom cell formatter.
    pub fn format<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&Record, &Value) -> String + Send + Sync + 'static,
    {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    /// Read this column's value from a record.
    pub fn value(&self, record: &Record) -> Value {
        (self.accessor)(record)
    }

    /// Render this column's cell text for a record.
    pub fn cell(&self, record: &Record) -> String {
        let value = self.value(record);
        match &self.formatter {
            Some(formatter) => formatter(record, &value),
            None => value.display(),
        }
    }
}

impl fmt::Debug for ColumnSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnSpec")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("align", &self.align)
            .field("sortable", &self.sortable)
            .field("hideable", &self.hideable)
            .field("formatter", &self.formatter.is_some())
            .finish()
    }
}
