//! In-memory tabular data model.

mod cell;
mod dataset;

pub use cell::Cell;
pub use dataset::Dataset;
