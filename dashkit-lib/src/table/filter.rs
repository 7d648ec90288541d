//! Filter stage: global search intersected with a column equality filter.

use log::trace;
use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};
use serde::Deserialize;
use serde::Serialize;

use super::ColumnSpec;
use crate::model::Record;
use crate::model::Value;

/// How the global query is matched against field text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Case-insensitive substring match.
    #[default]
    Substring,
    /// Fuzzy match scored by nucleo; any positive match keeps the row.
    Fuzzy,
}

/// A single-column equality constraint, e.g. `status == "active"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnFilter {
    pub column_id: String,
    pub value: String,
}

impl ColumnFilter {
    pub fn new(column_id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            column_id: column_id.into(),
            value: value.into(),
        }
    }

    /// An empty filter value places no constraint.
    pub fn is_active(&self) -> bool {
        !self.value.is_empty()
    }
}

/// Current filter inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub global_query: String,
    pub column_filter: Option<ColumnFilter>,
}

impl FilterState {
    /// Returns the active column filter, ignoring one with an empty value.
    pub fn active_column_filter(&self) -> Option<&ColumnFilter> {
        self.column_filter.as_ref().filter(|f| f.is_active())
    }
}

/// One entry in the status filter menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusOption {
    pub value: String,
    pub label: String,
}

impl StatusOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Menu entries used when none are configured.
    pub fn defaults() -> Vec<StatusOption> {
        [
            ("pending", "Pending"),
            ("approved", "Approved"),
            ("verified", "Verified"),
            ("suspended", "Suspended"),
            ("rejected", "Rejected"),
            ("inactive", "Inactive"),
        ]
        .into_iter()
        .map(|(value, label)| StatusOption::new(value, label))
        .collect()
    }
}

/// Compiled global query.
enum QueryMatcher {
    All,
    Substring(String),
    Fuzzy {
        pattern: Pattern,
        matcher: Matcher,
        buf: Vec<char>,
    },
}

impl QueryMatcher {
    fn new(query: &str, mode: SearchMode) -> Self {
        if query.is_empty() {
            return Self::All;
        }
        match mode {
            SearchMode::Substring => Self::Substring(query.to_lowercase()),
            SearchMode::Fuzzy => Self::Fuzzy {
                pattern: Pattern::new(
                    query,
                    CaseMatching::Ignore,
                    Normalization::Smart,
                    AtomKind::Fuzzy,
                ),
                matcher: Matcher::new(Config::DEFAULT),
                buf: Vec::new(),
            },
        }
    }

    fn is_match(&mut self, text: &str) -> bool {
        match self {
            Self::All => true,
            Self::Substring(needle) => text.to_lowercase().contains(needle.as_str()),
            Self::Fuzzy {
                pattern,
                matcher,
                buf,
            } => {
                let haystack = Utf32Str::new(text, buf);
                pattern.score(haystack, matcher).is_some()
            }
        }
    }

    fn matches_record(&mut self, record: &Record, search_fields: &[String]) -> bool {
        if matches!(self, Self::All) {
            return true;
        }
        if search_fields.is_empty() {
            return record.string_values().any(|text| self.is_match(text));
        }
        search_fields.iter().any(|field| {
            let text = record.get_path(field).map(Value::display).unwrap_or_default();
            self.is_match(&text)
        })
    }
}

/// Returns `true` if the record matches the global query.
///
/// With `search_fields` set, each named field (dot paths allowed) is
/// compared by its string form; otherwise every string-valued top-level
/// field is. An empty query matches everything.
pub fn matches_query(record: &Record, query: &str, search_fields: &[String], mode: SearchMode) -> bool {
    QueryMatcher::new(query, mode).matches_record(record, search_fields)
}

/// Returns `true` if the record satisfies the column equality filter.
///
/// The column's accessor is used when the column is declared; otherwise the
/// filter's column id is resolved as a field path.
pub fn matches_column_filter(record: &Record, filter: &ColumnFilter, columns: &[ColumnSpec]) -> bool {
    if !filter.is_active() {
        return true;
    }
    let value = match columns.iter().find(|c| c.id == filter.column_id) {
        Some(column) => column.value(record),
        None => record.get_path(&filter.column_id).cloned().unwrap_or(Value::Null),
    };
    !value.is_null() && value.display() == filter.value
}

/// Runs the filter stage and returns indices into `rows`, in source order.
pub fn filter_rows(
    rows: &[Record],
    columns: &[ColumnSpec],
    state: &FilterState,
    search_fields: &[String],
    mode: SearchMode,
) -> Vec<usize> {
    let mut query = QueryMatcher::new(&state.global_query, mode);
    let column_filter = state.active_column_filter();

    let matched: Vec<usize> = rows
        .iter()
        .enumerate()
        .filter(|(_, record)| query.matches_record(record, search_fields))
        .filter(|(_, record)| column_filter.is_none_or(|f| matches_column_filter(record, f, columns)))
        .map(|(index, _)| index)
        .collect();

    trace!(
        "filter: {} of {} rows match query {:?}",
        matched.len(),
        rows.len(),
        state.global_query
    );
    matched
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people() -> Vec<Record> {
        vec![
            Record::new("1").set("name", "John Doe").set("status", "active"),
            Record::new("2")
                .set("name", "Jane Smith")
                .set("email", "j.doe@x.com")
                .set("status", "pending"),
            Record::new("3").set("name", "Bob Ray").set("status", "active"),
        ]
    }

    fn fields(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_search_fields_match_either_field() {
        let rows = people();
        let state = FilterState {
            global_query: "doe".into(),
            column_filter: None,
        };
        let matched = filter_rows(&rows, &[], &state, &fields(&["name", "email"]), SearchMode::Substring);
        assert_eq!(matched, vec![0, 1]);
    }

    #[test]
    fn test_fallback_searches_string_fields() {
        let rows = vec![
            Record::new("1").set("name", "Ada").set("rides", 12i64),
            Record::new("2").set("name", "Grace").set("note", "12 rides"),
        ];
        let state = FilterState {
            global_query: "12".into(),
            column_filter: None,
        };
        // Numeric field is not a string, so only the note matches.
        assert_eq!(filter_rows(&rows, &[], &state, &[], SearchMode::Substring), vec![1]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let rows = people();
        assert!(matches_query(&rows[0], "JOHN", &[], SearchMode::Substring));
        assert!(!matches_query(&rows[0], "jane", &[], SearchMode::Substring));
    }

    #[test]
    fn test_empty_query_matches_all() {
        let rows = vec![Record::new("1").set("rides", 3i64)];
        assert!(matches_query(&rows[0], "", &fields(&["name"]), SearchMode::Substring));
    }

    #[test]
    fn test_missing_nested_segment_is_no_match() {
        let record = Record::new("1").set("vehicle", Record::new("v").set("plate", "XY"));
        assert!(matches_query(&record, "xy", &fields(&["vehicle.plate"]), SearchMode::Substring));
        assert!(!matches_query(&record, "xy", &fields(&["vehicle.model.name"]), SearchMode::Substring));
    }

    #[test]
    fn test_column_filter_intersects_query() {
        let rows = people();
        let state = FilterState {
            global_query: "o".into(),
            column_filter: Some(ColumnFilter::new("status", "active")),
        };
        let matched = filter_rows(&rows, &[], &state, &fields(&["name"]), SearchMode::Substring);
        assert_eq!(matched, vec![0, 2]);
    }

    #[test]
    fn test_empty_column_filter_value_is_no_constraint() {
        let rows = people();
        let state = FilterState {
            global_query: String::new(),
            column_filter: Some(ColumnFilter::new("status", "")),
        };
        assert_eq!(filter_rows(&rows, &[], &state, &[], SearchMode::Substring).len(), 3);
    }

    #[test]
    fn test_column_filter_uses_accessor() {
        let rows = people();
        let columns = vec![ColumnSpec::new("state", "State", |r: &Record| {
            r.get("status").cloned().unwrap_or_default()
        })];
        let filter = ColumnFilter::new("state", "pending");
        assert!(!matches_column_filter(&rows[0], &filter, &columns));
        assert!(matches_column_filter(&rows[1], &filter, &columns));
    }

    #[test]
    fn test_fuzzy_mode_matches_subsequence() {
        let rows = people();
        assert!(matches_query(&rows[0], "jdoe", &fields(&["name"]), SearchMode::Fuzzy));
        assert!(!matches_query(&rows[0], "jdoe", &fields(&["name"]), SearchMode::Substring));
        assert!(!matches_query(&rows[2], "zzz", &fields(&["name"]), SearchMode::Fuzzy));
    }
}
