//! Dashboard building blocks
//!
//! A headless tabular view (filter, sort, paginate, select, bulk actions,
//! column visibility, CSV export) and date input state for admin dashboards.
//! Nothing here draws; renderers consume the snapshots these types produce.

pub mod config;
pub mod demo;
pub mod error;
pub mod model;
pub mod picker;
pub mod table;

pub use config::TableConfig;
pub use model::Record;
pub use model::Value;
pub use table::TabularView;
