//! Error types

mod field;
mod parse;
mod table;

pub use field::*;
pub use parse::*;
pub use table::*;
