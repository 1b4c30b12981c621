//! Per-column type profiling.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::table::{Cell, Dataset};

use super::summary::NumericSummary;

/// The type currently held by a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeTag {
    /// Every cell is missing.
    Empty,
    /// Every non-missing cell is text.
    Text,
    /// Every non-missing cell is an integer or float.
    Numeric,
    /// Every non-missing cell is a boolean.
    Boolean,
    /// Non-missing cells of more than one kind.
    Mixed,
}

impl TypeTag {
    /// Derive the tag of a column from its cells.
    pub fn of(cells: &[Cell]) -> Self {
        let mut tag = TypeTag::Empty;
        for cell in cells.iter().filter(|c| !c.is_missing()) {
            let kind = match cell {
                Cell::Text(_) => TypeTag::Text,
                Cell::Integer(_) | Cell::Float(_) => TypeTag::Numeric,
                Cell::Boolean(_) => TypeTag::Boolean,
                Cell::Missing => continue,
            };
            tag = match tag {
                TypeTag::Empty => kind,
                current if current == kind => current,
                _ => return TypeTag::Mixed,
            };
        }
        tag
    }

    /// Whether columns with this tag are repaired by the text-all mode.
    pub fn is_textual(&self) -> bool {
        matches!(self, TypeTag::Text | TypeTag::Mixed)
    }
}

impl std::fmt::Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TypeTag::Empty => "empty",
            TypeTag::Text => "text",
            TypeTag::Numeric => "numeric",
            TypeTag::Boolean => "boolean",
            TypeTag::Mixed => "mixed",
        };
        f.write_str(name)
    }
}

/// Read-only profile of one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnProfile {
    /// Column name.
    pub name: String,
    /// Zero-based position in the dataset.
    pub position: usize,
    /// Current type of the column's cells.
    pub type_tag: TypeTag,
    /// True if every non-missing cell parses as a number.
    ///
    /// Vacuously true for a column with no non-missing cells.
    pub numeric_coercible: bool,
    /// Total number of cells.
    pub count: usize,
    /// Number of missing cells.
    pub missing_count: usize,
    /// Number of non-missing cells that parse as numbers.
    pub numeric_count: usize,
    /// Number of distinct non-missing renderings.
    pub unique_count: usize,
    /// Descriptive statistics over the parsable cells, when any exist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<NumericSummary>,
}

impl ColumnProfile {
    /// Number of non-missing cells.
    pub fn present_count(&self) -> usize {
        self.count - self.missing_count
    }

    /// Non-missing cells that would fail numeric coercion.
    pub fn non_numeric_count(&self) -> usize {
        self.present_count() - self.numeric_count
    }

    /// Get the missing percentage.
    pub fn missing_percentage(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            (self.missing_count as f64 / self.count as f64) * 100.0
        }
    }
}

/// Profiles dataset columns without modifying them.
#[derive(Debug, Clone, Default)]
pub struct ColumnProfiler;

impl ColumnProfiler {
    /// Create a new profiler.
    pub fn new() -> Self {
        Self
    }

    /// Profile every column of a dataset, in column order.
    pub fn profile(&self, dataset: &Dataset) -> Vec<ColumnProfile> {
        dataset
            .columns()
            .enumerate()
            .map(|(position, (name, cells))| self.profile_column(name, position, cells))
            .collect()
    }

    /// Profile a single column.
    pub fn profile_column(&self, name: &str, position: usize, cells: &[Cell]) -> ColumnProfile {
        let mut missing_count = 0;
        let mut numbers = Vec::new();
        let mut distinct = HashSet::new();

        for cell in cells {
            if cell.is_missing() {
                missing_count += 1;
                continue;
            }
            if let Some(number) = cell.to_number() {
                numbers.push(number.as_f64());
            }
            distinct.insert(cell.to_string());
        }

        let present = cells.len() - missing_count;

        ColumnProfile {
            name: name.to_string(),
            position,
            type_tag: TypeTag::of(cells),
            numeric_coercible: numbers.len() == present,
            count: cells.len(),
            missing_count,
            numeric_count: numbers.len(),
            unique_count: distinct.len(),
            summary: NumericSummary::from_values(&numbers),
        }
    }
}

/// Profile every column of a dataset with the default profiler.
pub fn profile(dataset: &Dataset) -> Vec<ColumnProfile> {
    ColumnProfiler::new().profile(dataset)
}
