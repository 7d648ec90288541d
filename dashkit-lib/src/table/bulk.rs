//! Bulk action descriptors.

use serde::Deserialize;
use serde::Serialize;

/// Visual weight of a bulk action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionVariant {
    Default,
    Destructive,
    #[default]
    Outline,
    Secondary,
    Ghost,
    Link,
}

/// An operation the caller offers over the selected rows.
///
/// The view only reports which action was invoked and on which records; the
/// caller owns the effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkAction {
    /// Button label.
    pub label: String,
    /// Identifier passed back to the caller.
    pub action: String,
    #[serde(default)]
    pub variant: ActionVariant,
}

impl BulkAction {
    pub fn new(label: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: action.into(),
            variant: ActionVariant::default(),
        }
    }

    pub fn variant(mut self, variant: ActionVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Actions offered when the caller configures none.
    pub fn defaults() -> Vec<BulkAction> {
        vec![
            BulkAction::new("Activate", "activate"),
            BulkAction::new("Suspend", "suspend"),
            BulkAction::new("Delete", "delete"),
        ]
    }
}
