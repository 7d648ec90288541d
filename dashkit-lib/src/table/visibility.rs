//! Column visibility and display names.

use std::collections::BTreeMap;
use std::collections::HashSet;

use super::ColumnSpec;

/// Hidden/visible state for hideable columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnVisibility {
    hidden: HashSet<String>,
}

impl ColumnVisibility {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self, column_id: &str) -> bool {
        !self.hidden.contains(column_id)
    }

    /// Sets a column's visibility. Returns `true` if the state changed.
    pub fn set_visible(&mut self, column_id: &str, visible: bool) -> bool {
        if visible {
            self.hidden.remove(column_id)
        } else {
            self.hidden.insert(column_id.to_string())
        }
    }

    /// Flips a column's visibility and returns the new state.
    pub fn toggle(&mut self, column_id: &str) -> bool {
        let visible = !self.is_visible(column_id);
        self.set_visible(column_id, visible);
        visible
    }

    /// Columns to draw, in declaration order.
    pub fn visible<'a>(&'a self, columns: &'a [ColumnSpec]) -> impl Iterator<Item = &'a ColumnSpec> + 'a {
        columns.iter().filter(move |c| self.is_visible(&c.id))
    }
}

/// Resolves the label shown for a column in menus and export headers.
///
/// Configured names win; otherwise underscores become spaces and each word
/// is capitalised (`phone_number` → `Phone Number`).
pub fn display_name(column_id: &str, names: &BTreeMap<String, String>) -> String {
    if let Some(name) = names.get(column_id) {
        return name.clone();
    }
    title_case(&column_id.replace('_', " "))
}

fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if at_word_start && ch.is_alphanumeric() {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        at_word_start = !(ch.is_alphanumeric() || ch == '_');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_fallback() {
        let names = BTreeMap::new();
        assert_eq!(display_name("phone_number", &names), "Phone Number");
        assert_eq!(display_name("status", &names), "Status");
        assert_eq!(display_name("joinDate", &names), "JoinDate");
    }

    #[test]
    fn test_display_name_configured() {
        let mut names = BTreeMap::new();
        names.insert("user".to_string(), "Driver".to_string());
        assert_eq!(display_name("user", &names), "Driver");
    }

    #[test]
    fn test_toggle_visibility() {
        let mut visibility = ColumnVisibility::new();
        assert!(visibility.is_visible("email"));
        assert!(!visibility.toggle("email"));
        assert!(!visibility.is_visible("email"));
        assert!(visibility.toggle("email"));
    }

    #[test]
    fn test_visible_keeps_declaration_order() {
        let columns = vec![
            ColumnSpec::field("a", "A"),
            ColumnSpec::field("b", "B").hideable(),
            ColumnSpec::field("c", "C"),
        ];
        let mut visibility = ColumnVisibility::new();
        visibility.set_visible("b", false);
        let ids: Vec<&str> = visibility.visible(&columns).map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }
}
