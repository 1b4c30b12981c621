//! Diagnostics produced by a coercion pass.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::inference::TypeTag;

use super::request::TargetType;

/// A cell that failed numeric conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellFailure {
    /// Row index (0-based).
    pub row: usize,
    /// Rendering of the value before conversion.
    pub original: String,
}

/// Outcome of coercing a single column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnReport {
    /// Target type applied.
    pub target: TargetType,
    /// Non-missing cells converted successfully.
    pub converted: usize,
    /// Cells that became missing because conversion failed.
    pub failed: usize,
    /// Type of the column after coercion.
    pub final_type: TypeTag,
    /// Sample of failed cells, capped by the engine configuration.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<CellFailure>,
}

impl ColumnReport {
    /// Human-readable one-line description.
    pub fn description(&self, column: &str) -> String {
        if self.failed == 0 {
            format!(
                "Coerced '{}' to {}: {} converted",
                column, self.target, self.converted
            )
        } else {
            format!(
                "Coerced '{}' to {}: {} converted, {} set to missing",
                column, self.target, self.converted, self.failed
            )
        }
    }
}

/// Per-column results of a coercion pass, in request order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoercionReport {
    pub columns: IndexMap<String, ColumnReport>,
}

impl CoercionReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome for a column.
    pub fn add_column(&mut self, column: impl Into<String>, report: ColumnReport) {
        self.columns.insert(column.into(), report);
    }

    /// Get the report for a column.
    pub fn column(&self, name: &str) -> Option<&ColumnReport> {
        self.columns.get(name)
    }

    /// Total converted cells across columns.
    pub fn total_converted(&self) -> usize {
        self.columns.values().map(|c| c.converted).sum()
    }

    /// Total failed cells across columns.
    pub fn total_failed(&self) -> usize {
        self.columns.values().map(|c| c.failed).sum()
    }

    /// True when no cell failed conversion.
    pub fn is_clean(&self) -> bool {
        self.total_failed() == 0
    }

    /// Number of columns coerced.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check whether no columns were coerced.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
