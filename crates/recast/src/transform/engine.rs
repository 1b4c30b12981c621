//! Coercion engine that repairs column types.

use crate::error::Result;
use crate::inference::{ColumnProfiler, TypeTag};
use crate::table::{Cell, Dataset};

use super::report::{CellFailure, CoercionReport, ColumnReport};
use super::request::{CoercionRequest, RepairMode, TargetType};

/// Configuration for the coercion engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Maximum failed cells recorded per column in the report.
    pub max_failure_samples: usize,
    /// Whether numeric-detect repair selects columns with no values.
    ///
    /// All-missing columns are vacuously numeric-coercible, so they are
    /// selected unless this is switched off.
    pub select_empty_columns: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_failure_samples: 20,
            select_empty_columns: true,
        }
    }
}

/// A coerced dataset and the diagnostics describing what changed.
#[derive(Debug, Clone, PartialEq)]
pub struct Coerced {
    pub dataset: Dataset,
    pub report: CoercionReport,
}

/// Applies coercion requests to datasets.
///
/// The engine never modifies its input: every call returns a new dataset.
#[derive(Debug, Clone, Default)]
pub struct CoercionEngine {
    config: EngineConfig,
    profiler: ColumnProfiler,
}

impl CoercionEngine {
    /// Create a new engine with default configuration.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an engine with custom configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            profiler: ColumnProfiler::new(),
        }
    }

    /// Get the engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Apply a coercion request.
    ///
    /// Fails with [`RecastError::InvalidColumnReference`](crate::RecastError::InvalidColumnReference)
    /// if the request names a column the dataset does not have; the check runs
    /// before any column is touched.
    pub fn coerce(&self, dataset: &Dataset, request: &CoercionRequest) -> Result<Coerced> {
        if let Some((missing, _)) = request.iter().find(|(c, _)| !dataset.contains_column(c)) {
            return Err(dataset.invalid_reference(missing));
        }

        let mut output = dataset.clone();
        let mut report = CoercionReport::new();

        for (column, target) in request.iter() {
            let cells = dataset
                .column(column)
                .ok_or_else(|| dataset.invalid_reference(column))?;

            let (coerced, column_report) = match target {
                TargetType::Numeric => self.to_numeric(cells),
                TargetType::Text => self.to_text(cells),
            };

            log::debug!("{}", column_report.description(column));
            if column_report.failed > 0 {
                log::warn!(
                    "{} value(s) in '{}' could not be parsed as numbers and are now missing",
                    column_report.failed,
                    column
                );
            }

            output.replace_column(column, coerced)?;
            report.add_column(column, column_report);
        }

        Ok(Coerced {
            dataset: output,
            report,
        })
    }

    /// Build the request a repair mode would apply to a dataset.
    pub fn plan(&self, dataset: &Dataset, mode: RepairMode) -> CoercionRequest {
        self.profiler
            .profile(dataset)
            .into_iter()
            .filter_map(|profile| {
                let target = match mode {
                    RepairMode::TextAll if profile.type_tag.is_textual() => TargetType::Text,
                    RepairMode::NumericDetect
                        if profile.numeric_coercible
                            && (self.config.select_empty_columns
                                || profile.type_tag != TypeTag::Empty) =>
                    {
                        TargetType::Numeric
                    }
                    _ => return None,
                };
                Some((profile.name, target))
            })
            .collect()
    }

    /// Repair a dataset without a per-column request.
    pub fn auto_repair(&self, dataset: &Dataset, mode: RepairMode) -> Result<Coerced> {
        let request = self.plan(dataset, mode);
        log::debug!(
            "Auto repair ({}) selected {} of {} column(s)",
            mode,
            request.len(),
            dataset.column_count()
        );
        self.coerce(dataset, &request)
    }

    /// Parse every non-missing cell as a number; failures become missing.
    fn to_numeric(&self, cells: &[Cell]) -> (Vec<Cell>, ColumnReport) {
        let mut converted = 0;
        let mut failed = 0;
        let mut failures = Vec::new();

        let coerced: Vec<Cell> = cells
            .iter()
            .enumerate()
            .map(|(row, cell)| {
                if cell.is_missing() {
                    return Cell::Missing;
                }
                match cell.to_number() {
                    Some(number) => {
                        converted += 1;
                        Cell::from(number)
                    }
                    None => {
                        failed += 1;
                        if failures.len() < self.config.max_failure_samples {
                            failures.push(CellFailure {
                                row,
                                original: cell.to_string(),
                            });
                        }
                        Cell::Missing
                    }
                }
            })
            .collect();

        let report = ColumnReport {
            target: TargetType::Numeric,
            converted,
            failed,
            final_type: TypeTag::of(&coerced),
            failures,
        };
        (coerced, report)
    }

    /// Render every non-missing cell as text; missing stays missing.
    fn to_text(&self, cells: &[Cell]) -> (Vec<Cell>, ColumnReport) {
        let coerced: Vec<Cell> = cells
            .iter()
            .map(|cell| cell.render().map(Cell::Text).unwrap_or(Cell::Missing))
            .collect();
        let converted = coerced.iter().filter(|c| !c.is_missing()).count();

        let report = ColumnReport {
            target: TargetType::Text,
            converted,
            failed: 0,
            final_type: TypeTag::of(&coerced),
            failures: Vec::new(),
        };
        (coerced, report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecastError;

    fn dose_dataset() -> Dataset {
        Dataset::from_columns([
            (
                "dose",
                vec![Cell::text("10"), Cell::text("20"), Cell::text("abc"), Cell::Missing],
            ),
            (
                "label",
                vec![Cell::Integer(1), Cell::Float(2.5), Cell::text("x"), Cell::Missing],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_numeric_coercion_counts_failures() {
        let ds = dose_dataset();
        let out = CoercionEngine::new()
            .coerce(&ds, &CoercionRequest::new().numeric("dose"))
            .unwrap();

        assert_eq!(
            out.dataset.column("dose").unwrap(),
            &[Cell::Integer(10), Cell::Integer(20), Cell::Missing, Cell::Missing]
        );
        let report = out.report.column("dose").unwrap();
        assert_eq!(report.converted, 2);
        assert_eq!(report.failed, 1);
        assert_eq!(report.final_type, TypeTag::Numeric);
        assert_eq!(
            report.failures,
            vec![CellFailure {
                row: 2,
                original: "abc".to_string()
            }]
        );
    }

    #[test]
    fn test_text_coercion_renders_mixed_cells() {
        let ds = dose_dataset();
        let out = CoercionEngine::new()
            .coerce(&ds, &CoercionRequest::new().text("label"))
            .unwrap();

        assert_eq!(
            out.dataset.column("label").unwrap(),
            &[Cell::text("1"), Cell::text("2.5"), Cell::text("x"), Cell::Missing]
        );
        let report = out.report.column("label").unwrap();
        assert_eq!(report.converted, 3);
        assert_eq!(report.failed, 0);
        assert_eq!(report.final_type, TypeTag::Text);
    }

    #[test]
    fn test_unrequested_columns_untouched() {
        let ds = dose_dataset();
        let out = CoercionEngine::new()
            .coerce(&ds, &CoercionRequest::new().numeric("dose"))
            .unwrap();
        assert_eq!(out.dataset.column("label"), ds.column("label"));
        assert!(out.report.column("label").is_none());
    }

    #[test]
    fn test_invalid_column_reference() {
        let ds = dose_dataset();
        let before = ds.clone();
        let request = CoercionRequest::new().text("label").numeric("nonexistent");

        let err = CoercionEngine::new().coerce(&ds, &request).unwrap_err();
        match err {
            RecastError::InvalidColumnReference { column, available } => {
                assert_eq!(column, "nonexistent");
                assert_eq!(available, vec!["dose", "label"]);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(ds, before);
    }

    #[test]
    fn test_nan_floats_become_missing_without_failure() {
        let ds = Dataset::from_columns([(
            "v",
            vec![Cell::Float(1.5), Cell::Float(f64::NAN), Cell::text("2")],
        )])
        .unwrap();
        let out = CoercionEngine::new()
            .coerce(&ds, &CoercionRequest::new().numeric("v"))
            .unwrap();

        assert_eq!(
            out.dataset.column("v").unwrap(),
            &[Cell::Float(1.5), Cell::Missing, Cell::Integer(2)]
        );
        assert_eq!(out.report.column("v").unwrap().failed, 0);
    }

    #[test]
    fn test_failure_samples_are_capped() {
        let cells: Vec<Cell> = (0..10).map(|i| Cell::text(format!("bad{}", i))).collect();
        let ds = Dataset::from_columns([("c", cells)]).unwrap();
        let engine = CoercionEngine::with_config(EngineConfig {
            max_failure_samples: 3,
            ..EngineConfig::default()
        });

        let out = engine.coerce(&ds, &CoercionRequest::new().numeric("c")).unwrap();
        let report = out.report.column("c").unwrap();
        assert_eq!(report.failed, 10);
        assert_eq!(report.failures.len(), 3);
        assert_eq!(report.final_type, TypeTag::Empty);
    }

    #[test]
    fn test_numeric_detect_selects_coercible_columns() {
        let ds = Dataset::from_columns([
            ("num_text", vec![Cell::text("1"), Cell::text("2.5")]),
            ("words", vec![Cell::text("a"), Cell::text("1")]),
            ("empty", vec![Cell::Missing, Cell::Missing]),
            ("flag", vec![Cell::Boolean(true), Cell::Boolean(false)]),
        ])
        .unwrap();
        let engine = CoercionEngine::new();

        let plan = engine.plan(&ds, RepairMode::NumericDetect);
        let selected: Vec<_> = plan.iter().map(|(c, _)| c).collect();
        assert_eq!(selected, vec!["num_text", "empty"]);

        let out = engine.auto_repair(&ds, RepairMode::NumericDetect).unwrap();
        assert_eq!(
            out.dataset.column("num_text").unwrap(),
            &[Cell::Integer(1), Cell::Float(2.5)]
        );
        assert_eq!(out.dataset.column("words"), ds.column("words"));
        assert_eq!(out.report.column("empty").unwrap().converted, 0);
        assert_eq!(out.report.column("empty").unwrap().final_type, TypeTag::Empty);
    }

    #[test]
    fn test_numeric_detect_can_skip_empty_columns() {
        let ds = Dataset::from_columns([
            ("n", vec![Cell::text("1")]),
            ("empty", vec![Cell::Missing]),
        ])
        .unwrap();
        let engine = CoercionEngine::with_config(EngineConfig {
            select_empty_columns: false,
            ..EngineConfig::default()
        });

        let plan = engine.plan(&ds, RepairMode::NumericDetect);
        assert_eq!(plan.target("n"), Some(TargetType::Numeric));
        assert_eq!(plan.target("empty"), None);
    }

    #[test]
    fn test_text_all_selects_text_and_mixed() {
        let ds = Dataset::from_columns([
            ("t", vec![Cell::text("a"), Cell::text("b")]),
            ("m", vec![Cell::Integer(1), Cell::text("b")]),
            ("n", vec![Cell::Integer(1), Cell::Float(2.0)]),
            ("e", vec![Cell::Missing, Cell::Missing]),
        ])
        .unwrap();
        let engine = CoercionEngine::new();

        let plan = engine.plan(&ds, RepairMode::TextAll);
        let selected: Vec<_> = plan.iter().map(|(c, _)| c).collect();
        assert_eq!(selected, vec!["t", "m"]);

        let out = engine.auto_repair(&ds, RepairMode::TextAll).unwrap();
        assert_eq!(
            out.dataset.column("m").unwrap(),
            &[Cell::text("1"), Cell::text("b")]
        );
        assert_eq!(out.dataset.column("n"), ds.column("n"));
    }

    #[test]
    fn test_empty_dataset() {
        let out = CoercionEngine::new()
            .auto_repair(&Dataset::new(), RepairMode::NumericDetect)
            .unwrap();
        assert!(out.dataset.is_empty());
        assert!(out.report.is_empty());
    }

    #[test]
    fn test_engine_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CoercionEngine>();
        assert_send_sync::<Dataset>();
    }
}
