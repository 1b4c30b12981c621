//! Column type coercion: requests, the engine, and its reports.

mod engine;
mod report;
mod request;

pub use engine::{CoercionEngine, Coerced, EngineConfig};
pub use report::{CellFailure, CoercionReport, ColumnReport};
pub use request::{CoercionRequest, RepairMode, TargetType};
