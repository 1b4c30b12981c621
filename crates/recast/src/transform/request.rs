//! Coercion requests and repair modes.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{RecastError, Result};

/// The type a column is coerced to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetType {
    /// Parse cells as numbers; unparsable cells become missing.
    Numeric,
    /// Render cells as text; never fails.
    Text,
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetType::Numeric => f.write_str("numeric"),
            TargetType::Text => f.write_str("text"),
        }
    }
}

/// Column name to target type, in the order the columns were requested.
///
/// Serializes as a plain JSON object, e.g. `{"dose": "numeric", "label": "text"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoercionRequest {
    targets: IndexMap<String, TargetType>,
}

impl CoercionRequest {
    /// Create an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a column be coerced to numeric.
    pub fn numeric(self, column: impl Into<String>) -> Self {
        self.with_target(column, TargetType::Numeric)
    }

    /// Request a column be coerced to text.
    pub fn text(self, column: impl Into<String>) -> Self {
        self.with_target(column, TargetType::Text)
    }

    /// Request a column be coerced to the given target.
    ///
    /// A later target for the same column replaces the earlier one.
    pub fn with_target(mut self, column: impl Into<String>, target: TargetType) -> Self {
        self.insert(column, target);
        self
    }

    /// Add or replace a column target.
    pub fn insert(&mut self, column: impl Into<String>, target: TargetType) {
        self.targets.insert(column.into(), target);
    }

    /// Target for a column, if requested.
    pub fn target(&self, column: &str) -> Option<TargetType> {
        self.targets.get(column).copied()
    }

    /// Requested columns and targets in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, TargetType)> {
        self.targets.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of requested columns.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Check whether no columns are requested.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Load a request from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| RecastError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }
}

impl FromIterator<(String, TargetType)> for CoercionRequest {
    fn from_iter<I: IntoIterator<Item = (String, TargetType)>>(iter: I) -> Self {
        Self {
            targets: iter.into_iter().collect(),
        }
    }
}

/// Zero-configuration repair strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepairMode {
    /// Render every text or mixed column as text.
    TextAll,
    /// Coerce every numeric-coercible column to numeric.
    NumericDetect,
}

impl RepairMode {
    /// The kebab-case name of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            RepairMode::TextAll => "text-all",
            RepairMode::NumericDetect => "numeric-detect",
        }
    }
}

impl fmt::Display for RepairMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RepairMode {
    type Err = RecastError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "text-all" => Ok(RepairMode::TextAll),
            "numeric-detect" => Ok(RepairMode::NumericDetect),
            _ => Err(RecastError::InvalidRepairMode(s.to_string())),
        }
    }
}
