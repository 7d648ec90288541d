//! Tabular view
//!
//! A headless data table: rows are filtered, stably sorted on at most one
//! column, then cut into pages. Selection is keyed by record id and survives
//! every one of those stages; bulk actions see only selected rows that still
//! match the filter.

mod bulk;
mod column;
mod events;
mod export;
mod filter;
mod pagination;
mod render;
mod selection;
mod sort;
mod view;
mod visibility;

pub use bulk::*;
pub use column::*;
pub use events::*;
pub use filter::*;
pub use pagination::*;
pub use render::*;
pub use selection::*;
pub use sort::*;
pub use view::*;
pub use visibility::*;
