//! The in-memory tabular dataset and its cell value types.

mod dataset;
mod value;

pub use dataset::{Column, Dataset};
pub use value::{CellValue, Domain};
