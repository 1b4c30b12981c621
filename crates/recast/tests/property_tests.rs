//! Property-based tests for the profiler and coercion engine.
//!
//! These tests use proptest to generate random datasets and requests and
//! verify that coercion keeps its invariants under all inputs.
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p recast --test property_tests
//!
//! # More cases (slower but more thorough)
//! PROPTEST_CASES=10000 cargo test -p recast --test property_tests
//! ```

use proptest::prelude::*;

use recast::{
    Cell, CoercionEngine, CoercionRequest, Dataset, RepairMode, TargetType, profile,
};
use recast::inference::parse_number;

// =============================================================================
// Test Strategies
// =============================================================================

/// Strings that sometimes look numeric and sometimes do not.
fn token() -> impl Strategy<Value = String> {
    prop_oneof![
        "[+-]?[0-9]{1,6}",
        "[+-]?[0-9]{0,4}\\.[0-9]{1,4}",
        "[0-9]{1,3}[eE][+-]?[0-9]{1,2}",
        " [0-9]{1,3} ",
        "[a-zA-Z]{1,8}",
        "[a-z0-9\\.,\\-]{0,6}",
        Just("nan".to_string()),
        Just("inf".to_string()),
    ]
}

fn cell() -> impl Strategy<Value = Cell> {
    prop_oneof![
        2 => Just(Cell::Missing),
        1 => any::<bool>().prop_map(Cell::Boolean),
        2 => any::<i64>().prop_map(Cell::Integer),
        2 => prop::num::f64::ANY.prop_map(Cell::Float),
        4 => token().prop_map(Cell::Text),
    ]
}

/// Datasets with 0-5 columns of 0-12 rows.
fn dataset() -> impl Strategy<Value = Dataset> {
    (0usize..=5, 0usize..=12).prop_flat_map(|(cols, rows)| {
        prop::collection::vec(prop::collection::vec(cell(), rows), cols).prop_map(|columns| {
            Dataset::from_columns(
                columns
                    .into_iter()
                    .enumerate()
                    .map(|(i, cells)| (format!("col_{}", i), cells)),
            )
            .expect("generated columns have equal length")
        })
    })
}

/// A dataset plus a request naming a subset of its columns.
fn dataset_and_request(target: Option<TargetType>) -> impl Strategy<Value = (Dataset, CoercionRequest)> {
    dataset().prop_flat_map(move |ds| {
        let n = ds.column_count();
        let picks = prop::collection::vec((any::<bool>(), any::<bool>()), n);
        (Just(ds), picks).prop_map(move |(ds, picks)| {
            let request = ds
                .column_names()
                .zip(picks)
                .filter(|(_, (selected, _))| *selected)
                .map(|(name, (_, numeric))| {
                    let t = target.unwrap_or(if numeric {
                        TargetType::Numeric
                    } else {
                        TargetType::Text
                    });
                    (name.to_string(), t)
                })
                .collect();
            (ds, request)
        })
    })
}

/// NaN floats compare unequal, so datasets are compared by their debug form.
fn debug(ds: &Dataset) -> String {
    format!("{:?}", ds)
}

fn non_numeric_present(cells: &[Cell]) -> usize {
    cells
        .iter()
        .filter(|c| !c.is_missing() && c.to_number().is_none())
        .count()
}

// =============================================================================
// Grammar Properties
// =============================================================================

proptest! {
    /// The numeric parser never panics and never yields a non-finite value.
    #[test]
    fn parse_number_is_finite(input in token()) {
        if let Some(n) = parse_number(&input) {
            prop_assert!(n.as_f64().is_finite());
        }
    }

    /// Integer literals round-trip.
    #[test]
    fn integers_round_trip(i in any::<i64>()) {
        prop_assert_eq!(Cell::Integer(i).to_number(), parse_number(&i.to_string()));
    }
}

// =============================================================================
// Coercion Properties
// =============================================================================

proptest! {
    /// Text-only requests keep shape and never fail.
    #[test]
    fn text_coercion_preserves_shape((ds, req) in dataset_and_request(Some(TargetType::Text))) {
        let out = CoercionEngine::new().coerce(&ds, &req).unwrap();

        prop_assert_eq!(out.dataset.row_count(), ds.row_count());
        prop_assert_eq!(
            out.dataset.column_names().collect::<Vec<_>>(),
            ds.column_names().collect::<Vec<_>>()
        );
        for (_, report) in &out.report.columns {
            prop_assert_eq!(report.failed, 0);
        }
    }

    /// Text coercion is stable under repetition.
    #[test]
    fn text_coercion_is_idempotent((ds, req) in dataset_and_request(Some(TargetType::Text))) {
        let engine = CoercionEngine::new();
        let once = engine.coerce(&ds, &req).unwrap();
        let twice = engine.coerce(&once.dataset, &req).unwrap();
        prop_assert_eq!(debug(&once.dataset), debug(&twice.dataset));
    }

    /// Numeric failures equal the non-numeric present cells, and become missing.
    #[test]
    fn numeric_failures_are_counted((ds, req) in dataset_and_request(Some(TargetType::Numeric))) {
        let out = CoercionEngine::new().coerce(&ds, &req).unwrap();

        for (name, report) in &out.report.columns {
            let before = ds.column(name).unwrap();
            let after = out.dataset.column(name).unwrap();

            prop_assert_eq!(report.failed, non_numeric_present(before));

            for (old, new) in before.iter().zip(after) {
                if old.is_missing() || old.to_number().is_none() {
                    prop_assert_eq!(new, &Cell::Missing);
                } else {
                    prop_assert!(matches!(new, Cell::Integer(_) | Cell::Float(_)));
                }
            }
        }
    }

    /// A numeric-coercible column gains no missing cells.
    #[test]
    fn coercible_columns_gain_no_missing(ds in dataset()) {
        let engine = CoercionEngine::new();
        for p in profile(&ds).into_iter().filter(|p| p.numeric_coercible) {
            let out = engine.coerce(&ds, &CoercionRequest::new().numeric(&p.name)).unwrap();
            let missing_after = out
                .dataset
                .column(&p.name)
                .unwrap()
                .iter()
                .filter(|c| c.is_missing())
                .count();
            prop_assert_eq!(missing_after, p.missing_count);
        }
    }

    /// Coercion output never contains a NaN float in a coerced column.
    #[test]
    fn coerced_columns_have_no_nan((ds, req) in dataset_and_request(None)) {
        let out = CoercionEngine::new().coerce(&ds, &req).unwrap();
        for (name, _) in req.iter() {
            for cell in out.dataset.column(name).unwrap() {
                prop_assert!(!matches!(cell, Cell::Float(f) if f.is_nan()));
            }
        }
    }

    /// Coercion is deterministic and does not touch its input.
    #[test]
    fn coercion_is_deterministic((ds, req) in dataset_and_request(None)) {
        let before = ds.clone();
        let engine = CoercionEngine::new();
        let a = engine.coerce(&ds, &req).unwrap();
        let b = engine.coerce(&ds, &req).unwrap();

        prop_assert_eq!(&a.report, &b.report);
        prop_assert_eq!(debug(&a.dataset), debug(&b.dataset));
        prop_assert_eq!(debug(&ds), debug(&before));
    }

    /// Numeric-detect selects exactly the numeric-coercible columns.
    #[test]
    fn numeric_detect_selects_coercible(ds in dataset()) {
        let out = CoercionEngine::new().auto_repair(&ds, RepairMode::NumericDetect).unwrap();
        let profiles = profile(&ds);

        for p in &profiles {
            prop_assert_eq!(out.report.column(&p.name).is_some(), p.numeric_coercible);
            if !p.numeric_coercible {
                prop_assert_eq!(
                    format!("{:?}", out.dataset.column(&p.name)),
                    format!("{:?}", ds.column(&p.name))
                );
            }
        }
    }
}
