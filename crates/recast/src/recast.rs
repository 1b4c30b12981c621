//! Main Recast struct and public API.

use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::inference::{ColumnProfile, ColumnProfiler};
use crate::input::{Parser, ParserConfig, SourceMetadata};
use crate::table::Dataset;
use crate::transform::{CoercionEngine, CoercionReport, CoercionRequest, Coerced, EngineConfig, RepairMode};

/// Configuration for Recast.
#[derive(Debug, Clone, Default)]
pub struct RecastConfig {
    /// Loader configuration.
    pub parser: ParserConfig,
    /// Coercion engine configuration.
    pub engine: EngineConfig,
}

/// A loaded dataset after an optional repair pass.
#[derive(Debug, Clone, Serialize)]
pub struct Prepared {
    /// Metadata about the source file.
    pub source: SourceMetadata,
    /// Column profiles of the data as loaded.
    pub profiles: Vec<ColumnProfile>,
    /// The dataset to hand to the renderer.
    #[serde(skip)]
    pub dataset: Dataset,
    /// What the repair pass changed (empty when no mode was given).
    pub report: CoercionReport,
}

/// Loads tabular files and repairs their column types.
pub struct Recast {
    parser: Parser,
    profiler: ColumnProfiler,
    engine: CoercionEngine,
}

impl Recast {
    /// Create a new Recast instance with default configuration.
    pub fn new() -> Self {
        Self::with_config(RecastConfig::default())
    }

    /// Create a Recast instance with custom configuration.
    pub fn with_config(config: RecastConfig) -> Self {
        Self {
            parser: Parser::with_config(config.parser),
            profiler: ColumnProfiler::new(),
            engine: CoercionEngine::with_config(config.engine),
        }
    }

    /// Load a delimited file.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<(Dataset, SourceMetadata)> {
        self.parser.parse_file(path)
    }

    /// Profile every column of a dataset.
    pub fn profile(&self, dataset: &Dataset) -> Vec<ColumnProfile> {
        self.profiler.profile(dataset)
    }

    /// Apply an explicit coercion request.
    pub fn coerce(&self, dataset: &Dataset, request: &CoercionRequest) -> Result<Coerced> {
        self.engine.coerce(dataset, request)
    }

    /// Repair a dataset with a zero-configuration strategy.
    pub fn auto_repair(&self, dataset: &Dataset, mode: RepairMode) -> Result<Coerced> {
        self.engine.auto_repair(dataset, mode)
    }

    /// Load a file, profile it, and apply a repair mode if one is given.
    pub fn prepare(&self, path: impl AsRef<Path>, mode: Option<RepairMode>) -> Result<Prepared> {
        let (dataset, source) = self.load(path)?;
        let profiles = self.profile(&dataset);

        let (dataset, report) = match mode {
            Some(mode) => {
                let coerced = self.auto_repair(&dataset, mode)?;
                (coerced.dataset, coerced.report)
            }
            None => (dataset, CoercionReport::new()),
        };

        Ok(Prepared {
            source,
            profiles,
            dataset,
            report,
        })
    }
}

impl Default for Recast {
    fn default() -> Self {
        Self::new()
    }
}
