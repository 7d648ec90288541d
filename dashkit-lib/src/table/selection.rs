//! Row selection overlay.
//!
//! Selection is keyed by record id, so it survives filtering, sorting and
//! paging. Ids that no longer exist in the source data stay in the set but
//! never resolve to a record.

use std::collections::HashSet;

/// ID-based selection state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Currently selected IDs
    selected: HashSet<String>,
    /// Anchor for range selection (Shift+click starting point)
    anchor: Option<String>,
}

impl Selection {
    /// Create a new empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all selected IDs (sorted for deterministic ordering).
    pub fn selected(&self) -> Vec<String> {
        let mut ids: Vec<_> = self.selected.iter().cloned().collect();
        ids.sort();
        ids
    }

    /// Check if an ID is selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Get the number of selected IDs, including inert ones.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Count how many of `ids` are selected.
    pub fn count_in<'a>(&self, ids: impl IntoIterator<Item = &'a str>) -> usize {
        ids.into_iter().filter(|id| self.selected.contains(*id)).count()
    }

    /// Clear all selection.
    /// Returns the IDs that were deselected.
    pub fn clear(&mut self) -> Vec<String> {
        let removed: Vec<_> = self.selected.drain().collect();
        self.anchor = None;
        removed
    }

    /// Add an ID to the selection. Returns `true` if it was newly added.
    pub fn insert(&mut self, id: &str) -> bool {
        self.anchor = Some(id.to_string());
        self.selected.insert(id.to_string())
    }

    /// Remove an ID from the selection. Returns `true` if it was selected.
    pub fn remove(&mut self, id: &str) -> bool {
        self.selected.remove(id)
    }

    /// Toggle selection of an ID (checkbox behavior).
    /// Returns (added, removed) IDs.
    pub fn toggle(&mut self, id: &str) -> (Vec<String>, Vec<String>) {
        self.anchor = Some(id.to_string());
        if self.selected.remove(id) {
            (vec![], vec![id.to_string()])
        } else {
            self.selected.insert(id.to_string());
            (vec![id.to_string()], vec![])
        }
    }

    /// Range select from anchor to target ID (Shift+click behavior).
    ///
    /// `ordered_ids` is the current display order. If the anchor or target is
    /// not in it, only the target is added. The range is added to the
    /// existing selection.
    ///
    /// Returns the IDs that were newly selected.
    pub fn range_select(&mut self, target_id: &str, ordered_ids: &[&str]) -> Vec<String> {
        let anchor_id = self.anchor.clone().unwrap_or_else(|| target_id.to_string());

        let anchor_pos = ordered_ids.iter().position(|id| *id == anchor_id);
        let target_pos = ordered_ids.iter().position(|id| *id == target_id);

        let (start, end) = match (anchor_pos, target_pos) {
            (Some(a), Some(t)) => (a.min(t), a.max(t)),
            _ => {
                return if self.insert(target_id) {
                    vec![target_id.to_string()]
                } else {
                    vec![]
                };
            }
        };

        let added = self.select_all(&ordered_ids[start..=end]);
        self.anchor = Some(target_id.to_string());
        added
    }

    /// Select every ID in the list.
    /// Returns the IDs that were newly selected.
    pub fn select_all(&mut self, ids: &[&str]) -> Vec<String> {
        ids.iter()
            .filter(|id| self.selected.insert(id.to_string()))
            .map(|id| id.to_string())
            .collect()
    }

    /// Deselect every ID in the list.
    /// Returns the IDs that were removed.
    pub fn deselect_all(&mut self, ids: &[&str]) -> Vec<String> {
        ids.iter()
            .filter(|id| self.selected.remove(**id))
            .map(|id| id.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_reports_changes() {
        let mut selection = Selection::new();
        assert_eq!(selection.toggle("a"), (vec!["a".to_string()], vec![]));
        assert!(selection.is_selected("a"));
        assert_eq!(selection.toggle("a"), (vec![], vec!["a".to_string()]));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_select_all_only_reports_new() {
        let mut selection = Selection::new();
        selection.insert("b");
        let added = selection.select_all(&["a", "b", "c"]);
        assert_eq!(added, vec!["a".to_string(), "c".to_string()]);
        assert_eq!(selection.selected(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_range_select_from_anchor() {
        let mut selection = Selection::new();
        let order = ["a", "b", "c", "d", "e"];
        selection.toggle("b");
        let added = selection.range_select("d", &order);
        assert_eq!(added, vec!["c".to_string(), "d".to_string()]);
        assert_eq!(selection.selected(), vec!["b", "c", "d"]);
    }

    #[test]
    fn test_range_select_without_anchor_in_view() {
        let mut selection = Selection::new();
        selection.toggle("zz");
        let added = selection.range_select("c", &["a", "b", "c"]);
        assert_eq!(added, vec!["c".to_string()]);
    }

    #[test]
    fn test_count_in_ignores_inert_ids() {
        let mut selection = Selection::new();
        selection.select_all(&["a", "gone"]);
        assert_eq!(selection.len(), 2);
        assert_eq!(selection.count_in(["a", "b"]), 1);
    }

    #[test]
    fn test_deselect_all() {
        let mut selection = Selection::new();
        selection.select_all(&["a", "b", "c"]);
        let removed = selection.deselect_all(&["a", "x"]);
        assert_eq!(removed, vec!["a".to_string()]);
        assert_eq!(selection.selected(), vec!["b", "c"]);
    }
}
