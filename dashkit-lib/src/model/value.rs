//! Value enum for dynamic cell values

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::Record;

/// A dynamic value held by a [`Record`] field.
///
/// # Type Mapping
///
/// | Source shape | Rust Variant |
/// |--------------|--------------|
/// | null / missing | `Null` |
/// | boolean | `Bool` |
/// | integer | `Int` |
/// | number | `Float` |
/// | text | `String` |
/// | calendar date | `Date` |
/// | timestamp | `DateTime` |
/// | nested object | `Record` |
///
/// # Example
///
/// ```
/// use dashkit_lib::model::Value;
///
/// let name = Value::from("Contoso");
/// let rides = Value::from(42i64);
/// let active = Value::from(true);
/// let empty = Value::Null;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum Value {
    /// Null/empty value.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// Calendar date without time of day.
    Date(NaiveDate),
    /// Date and time in UTC.
    DateTime(DateTime<Utc>),
    /// String value.
    String(String),
    /// Nested object.
    Record(Box<Record>),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the string slice if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns the nested record if this is a record value.
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(r) => Some(r.as_ref()),
            _ => None,
        }
    }

    /// Returns the numeric value for ints and floats.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Date(_) => "date",
            Value::DateTime(_) => "datetime",
            Value::String(_) => "string",
            Value::Record(_) => "record",
        }
    }

    /// String form used by search, column filters and export.
    ///
    /// Null renders as the empty string. Dates use ISO 8601.
    pub fn display(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Int(n) => n.to_string(),
            Value::Float(n) => n.to_string(),
            Value::Date(d) => d.format("%Y-%m-%d").to_string(),
            Value::DateTime(dt) => dt.to_rfc3339(),
            Value::String(s) => s.clone(),
            Value::Record(r) => format!("[record {}]", r.id()),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display())
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::DateTime(v)
    }
}

impl From<Record> for Value {
    fn from(v: Record) -> Self {
        Value::Record(Box::new(v))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_forms() {
        assert_eq!(Value::Null.display(), "");
        assert_eq!(Value::from(3i64).display(), "3");
        assert_eq!(Value::from(4.5).display(), "4.5");
        assert_eq!(Value::from(true).display(), "true");
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(Value::from(date).display(), "2024-03-09");
    }

    #[test]
    fn test_option_conversion() {
        assert!(Value::from(None::<String>).is_null());
        assert_eq!(Value::from(Some("x")), Value::String("x".into()));
    }

    #[test]
    fn test_as_f64_widens_ints() {
        assert_eq!(Value::Int(7).as_f64(), Some(7.0));
        assert_eq!(Value::String("7".into()).as_f64(), None);
    }
}
