//! Recast: column type repair for tabular datasets.
//!
//! Spreadsheet-derived tables often hold numbers stored as text, mixed cell
//! types, and several spellings of "no value". Visual-exploration tools expect
//! every column to have one consistent type and a single missing-value
//! representation. Recast profiles columns and coerces them to a target type.
//!
//! # Core Principles
//!
//! - **Non-destructive**: coercion returns a new dataset; the input is never modified
//! - **Local recovery**: a cell that fails to parse becomes missing and is counted, never an error
//! - **One missing marker**: [`Cell::Missing`] is the only representation of absence
//!
//! # Example
//!
//! ```
//! use recast::{Cell, CoercionEngine, CoercionRequest, Dataset};
//!
//! let dataset = Dataset::from_columns([(
//!     "dose",
//!     vec![Cell::text("10"), Cell::text("20"), Cell::text("abc"), Cell::Missing],
//! )])
//! .unwrap();
//!
//! let engine = CoercionEngine::new();
//! let out = engine
//!     .coerce(&dataset, &CoercionRequest::new().numeric("dose"))
//!     .unwrap();
//!
//! let report = out.report.column("dose").unwrap();
//! assert_eq!((report.converted, report.failed), (2, 1));
//! ```

pub mod error;
pub mod inference;
pub mod input;
pub mod output;
pub mod table;
pub mod transform;

mod recast;

pub use crate::recast::{Prepared, Recast, RecastConfig};
pub use error::{RecastError, Result};
pub use inference::{ColumnProfile, ColumnProfiler, NumericSummary, TypeTag, profile};
pub use input::{CellMode, ParserConfig, SourceMetadata};
pub use output::OutputFormat;
pub use table::{Cell, Dataset};
pub use transform::{
    CellFailure, CoercionEngine, CoercionReport, CoercionRequest, Coerced, ColumnReport,
    EngineConfig, RepairMode, TargetType,
};
