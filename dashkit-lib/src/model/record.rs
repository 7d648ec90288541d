//! Dynamic table record

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Deserialize;
use serde::Serialize;

use super::Value;
use crate::error::FieldError;

/// One row of tabular data.
///
/// Records carry a stable `id` used for selection tracking and hold field
/// values as a `BTreeMap<String, Value>` so iteration order is deterministic.
/// Typed getter methods provide safe access with proper error handling.
///
/// # Example
///
/// ```
/// use dashkit_lib::model::Record;
///
/// let record = Record::new("u-1")
///     .set("name", "John Doe")
///     .set("total_rides", 42i64);
///
/// assert_eq!(record.get_string("name").unwrap(), Some("John Doe"));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Record {
    /// Stable identifier of the record.
    pub(crate) id: String,

    /// The field values.
    #[serde(default)]
    pub(crate) fields: BTreeMap<String, Value>,
}

impl Record {
    /// Creates a new empty record with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Returns the record id.
    pub fn id(&self) -> &str {
        &self.id
    }

    // =========================================================================
    // Raw field access
    // =========================================================================

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Resolves a dot-separated path through nested records.
    ///
    /// `"vehicle.plate"` looks up `vehicle`, then `plate` inside it. Any
    /// missing or non-record intermediate segment yields `None`.
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let first = segments.next()?;
        let mut current = self.fields.get(first)?;
        for segment in segments {
            current = current.as_record()?.fields.get(segment)?;
        }
        Some(current)
    }

    /// Returns `true` if the record contains the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns a reference to all fields.
    pub fn fields(&self) -> &BTreeMap<String, Value> {
        &self.fields
    }

    /// Iterates the string-valued top-level fields.
    pub fn string_values(&self) -> impl Iterator<Item = &str> {
        self.fields.values().filter_map(Value::as_str)
    }

    // =========================================================================
    // Setters
    // =========================================================================

    /// Sets a field value (builder pattern).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Inserts a field value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Removes a field and returns its value.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field)
    }

    // Typed getters: a missing field or another variant is an error, an
    // explicit `Null` reads as `Ok(None)`.

    fn typed<'a, T>(
        &'a self,
        field: &str,
        expected: &'static str,
        pick: impl FnOnce(&'a Value) -> Option<T>,
    ) -> Result<Option<T>, FieldError> {
        let value = self.fields.get(field).ok_or_else(|| FieldError::missing(field))?;
        if value.is_null() {
            return Ok(None);
        }
        pick(value)
            .map(Some)
            .ok_or_else(|| FieldError::type_mismatch(field, expected, value.type_name()))
    }

    pub fn get_string(&self, field: &str) -> Result<Option<&str>, FieldError> {
        self.typed(field, "string", Value::as_str)
    }

    pub fn get_int(&self, field: &str) -> Result<Option<i64>, FieldError> {
        self.typed(field, "int", |v| match v {
            Value::Int(n) => Some(*n),
            _ => None,
        })
    }

    /// Integers widen to `f64`.
    pub fn get_float(&self, field: &str) -> Result<Option<f64>, FieldError> {
        self.typed(field, "float", Value::as_f64)
    }

    pub fn get_date(&self, field: &str) -> Result<Option<NaiveDate>, FieldError> {
        self.typed(field, "date", |v| match v {
            Value::Date(d) => Some(*d),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver() -> Record {
        Record::new("d-1")
            .set("name", "Ada")
            .set("rating", 4.8)
            .set("rides", 120i64)
            .set(
                "vehicle",
                Record::new("v-1")
                    .set("plate", "KX-22")
                    .set("owner", Record::new("o-1").set("name", "Fleet Co")),
            )
    }

    #[test]
    fn test_get_path_nested() {
        let record = driver();
        assert_eq!(
            record.get_path("vehicle.plate"),
            Some(&Value::String("KX-22".into()))
        );
        assert_eq!(
            record.get_path("vehicle.owner.name"),
            Some(&Value::String("Fleet Co".into()))
        );
    }

    #[test]
    fn test_get_path_missing_segment_short_circuits() {
        let record = driver();
        assert_eq!(record.get_path("vehicle.model"), None);
        assert_eq!(record.get_path("cargo.plate"), None);
        // "name" is a string, not a record, so descending further fails
        assert_eq!(record.get_path("name.first"), None);
    }

    #[test]
    fn test_typed_getters() {
        let record = driver().set("note", Value::Null);
        assert_eq!(record.get_string("name").unwrap(), Some("Ada"));
        assert_eq!(record.get_int("rides").unwrap(), Some(120));
        assert_eq!(record.get_float("rides").unwrap(), Some(120.0));
        assert_eq!(record.get_string("note").unwrap(), None);
        assert!(matches!(
            record.get_string("missing"),
            Err(FieldError::Missing { .. })
        ));
        assert!(matches!(
            record.get_int("name"),
            Err(FieldError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_string_values_skip_other_types() {
        let record = driver().set("email", "ada@example.com");
        let strings: Vec<&str> = record.string_values().collect();
        assert_eq!(strings, vec!["ada@example.com", "Ada"]);
    }
}
