//! Sort stage: one active column, stable ordering.

use std::cmp::Ordering;

use log::trace;
use serde::Deserialize;
use serde::Serialize;

use super::ColumnSpec;
use crate::model::Record;
use crate::model::Value;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

impl std::str::FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Asc),
            "desc" | "descending" => Ok(Self::Desc),
            other => Err(format!("unknown sort direction '{other}'")),
        }
    }
}

/// Current sort: at most one column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    pub column_id: Option<String>,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(column_id: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            column_id: Some(column_id.into()),
            direction,
        }
    }

    /// No active sort.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.column_id.is_some()
    }

    /// Sorting the same column flips direction; a new column starts ascending.
    pub fn toggled(&self, column_id: &str) -> Self {
        match &self.column_id {
            Some(current) if current == column_id => Self::new(column_id, self.direction.flipped()),
            _ => Self::new(column_id, SortDirection::Asc),
        }
    }
}

/// Rank used to order values of different types against each other.
fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Int(_) | Value::Float(_) => 2,
        Value::Date(_) | Value::DateTime(_) => 3,
        Value::String(_) => 4,
        Value::Record(_) => 5,
    }
}

/// 2^63, the first float above every `i64`.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

fn compare_floats(x: f64, y: f64) -> Ordering {
    x.partial_cmp(&y).unwrap_or_else(|| x.total_cmp(&y))
}

/// Exact comparison of an integer against a float, no rounding through `f64`.
fn compare_int_float(i: i64, f: f64) -> Ordering {
    if !f.is_finite() {
        return compare_floats(i as f64, f);
    }
    if f >= I64_BOUND {
        return Ordering::Less;
    }
    if f < -I64_BOUND {
        return Ordering::Greater;
    }
    let whole = f.trunc();
    let fraction = if f > whole {
        Ordering::Less
    } else if f < whole {
        Ordering::Greater
    } else {
        Ordering::Equal
    };
    i128::from(i).cmp(&(whole as i128)).then(fraction)
}

/// Total order over cell values.
///
/// Numbers compare exactly across ints and floats (`0.0` equals `-0.0`, NaN
/// sorts to the end matching its sign), strings case-insensitively with a
/// case-sensitive tiebreak, dates chronologically (a bare date counts as its
/// midnight). Mixed types fall back to a fixed type rank, so nulls sort
/// first ascending.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Int(x), Value::Int(y)) => x.cmp(y),
        (Value::Float(x), Value::Float(y)) => compare_floats(*x, *y),
        (Value::Int(x), Value::Float(y)) => compare_int_float(*x, *y),
        (Value::Float(x), Value::Int(y)) => compare_int_float(*y, *x).reverse(),
        (Value::String(x), Value::String(y)) => x
            .to_lowercase()
            .cmp(&y.to_lowercase())
            .then_with(|| x.cmp(y)),
        (Value::Date(x), Value::Date(y)) => x.cmp(y),
        (Value::DateTime(x), Value::DateTime(y)) => x.cmp(y),
        (Value::Date(x), Value::DateTime(y)) => x.and_time(Default::default()).cmp(&y.naive_utc()),
        (Value::DateTime(x), Value::Date(y)) => x.naive_utc().cmp(&y.and_time(Default::default())),
        (Value::Record(x), Value::Record(y)) => x.id().cmp(y.id()),
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

/// Sorts `indices` (into `rows`) in place by the given column.
///
/// The sort is stable in both directions: descending reverses the
/// comparator, not the output, so equal keys keep their relative order.
pub fn sort_indices(indices: &mut [usize], rows: &[Record], column: &ColumnSpec, direction: SortDirection) {
    let mut keyed: Vec<(Value, usize)> = indices.iter().map(|&i| (column.value(&rows[i]), i)).collect();
    keyed.sort_by(|(a, _), (b, _)| {
        let ord = compare_values(a, b);
        match direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
    for (slot, (_, index)) in indices.iter_mut().zip(keyed) {
        *slot = index;
    }
    trace!("sort: {} rows by '{}' {:?}", indices.len(), column.id, direction);
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn rows() -> Vec<Record> {
        vec![
            Record::new("a").set("name", "bob").set("rides", 3i64),
            Record::new("b").set("name", "Alice").set("rides", 10i64),
            Record::new("c").set("name", "carol").set("rides", 3i64),
            Record::new("d").set("name", "alice").set("rides", 2.5),
        ]
    }

    fn ids(rows: &[Record], indices: &[usize]) -> Vec<String> {
        indices.iter().map(|&i| rows[i].id().to_string()).collect()
    }

    #[test]
    fn test_numeric_sort_mixes_ints_and_floats() {
        let rows = rows();
        let column = ColumnSpec::field("rides", "Rides");
        let mut indices: Vec<usize> = (0..rows.len()).collect();
        sort_indices(&mut indices, &rows, &column, SortDirection::Asc);
        assert_eq!(ids(&rows, &indices), vec!["d", "a", "c", "b"]);
    }

    #[test]
    fn test_descending_keeps_ties_in_source_order() {
        let rows = rows();
        let column = ColumnSpec::field("rides", "Rides");
        let mut indices: Vec<usize> = (0..rows.len()).collect();
        sort_indices(&mut indices, &rows, &column, SortDirection::Desc);
        // a and c tie on 3 rides; a came first in the source.
        assert_eq!(ids(&rows, &indices), vec!["b", "a", "c", "d"]);
    }

    #[test]
    fn test_string_sort_is_case_insensitive() {
        let rows = rows();
        let column = ColumnSpec::field("name", "Name");
        let mut indices: Vec<usize> = (0..rows.len()).collect();
        sort_indices(&mut indices, &rows, &column, SortDirection::Asc);
        assert_eq!(ids(&rows, &indices), vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_dates_sort_chronologically_and_nulls_first() {
        let d = |y, m, day| Value::from(NaiveDate::from_ymd_opt(y, m, day).unwrap());
        let mut values = vec![d(2024, 5, 1), Value::Null, d(2023, 12, 31), d(2024, 1, 15)];
        values.sort_by(compare_values);
        assert_eq!(values, vec![Value::Null, d(2023, 12, 31), d(2024, 1, 15), d(2024, 5, 1)]);
    }

    #[test]
    fn test_large_ints_against_floats_stay_ordered() {
        let big = 1i64 << 53;
        let float = Value::Float(big as f64);
        assert_eq!(compare_values(&Value::Int(big + 1), &float), Ordering::Greater);
        assert_eq!(compare_values(&float, &Value::Int(big)), Ordering::Equal);
        assert_eq!(compare_values(&float, &Value::Int(big + 1)), Ordering::Less);
        assert_eq!(compare_values(&Value::Int(i64::MAX), &Value::Float(9.3e18)), Ordering::Less);
        assert_eq!(compare_values(&Value::Int(-3), &Value::Float(-2.5)), Ordering::Less);
        assert_eq!(compare_values(&Value::Int(0), &Value::Float(-0.0)), Ordering::Equal);
        assert_eq!(compare_values(&Value::Float(0.0), &Value::Float(-0.0)), Ordering::Equal);
        assert_eq!(compare_values(&Value::Int(i64::MAX), &Value::Float(f64::NAN)), Ordering::Less);

        let mut values = vec![Value::Int(big + 1), Value::Float(big as f64), Value::Int(big), Value::Float(0.5)];
        values.sort_by(compare_values);
        assert_eq!(
            values,
            vec![Value::Float(0.5), Value::Float(big as f64), Value::Int(big), Value::Int(big + 1)]
        );
    }

    #[test]
    fn test_toggle_flips_same_column() {
        let state = SortState::none().toggled("name");
        assert_eq!(state, SortState::new("name", SortDirection::Asc));
        let state = state.toggled("name");
        assert_eq!(state.direction, SortDirection::Desc);
        let state = state.toggled("rides");
        assert_eq!(state, SortState::new("rides", SortDirection::Asc));
    }
}
