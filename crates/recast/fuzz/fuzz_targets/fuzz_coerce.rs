//! Fuzz target for numeric coercion.
//!
//! Every value either parses to a finite number or is reported as a failure,
//! and the coerced column never contains NaN.

#![no_main]

use libfuzzer_sys::fuzz_target;
use recast::{Cell, CoercionEngine, CoercionRequest, Dataset};

fuzz_target!(|values: Vec<String>| {
    if values.len() > 1_000 {
        return;
    }

    let cells: Vec<Cell> = values.iter().map(|v| Cell::from(v.as_str())).collect();
    let present = cells.iter().filter(|c| !c.is_missing()).count();

    let Ok(dataset) = Dataset::from_columns([("x", cells)]) else {
        return;
    };
    let engine = CoercionEngine::new();
    let Ok(coerced) = engine.coerce(&dataset, &CoercionRequest::new().numeric("x")) else {
        return;
    };

    let report = &coerced.report.columns["x"];
    assert_eq!(report.converted + report.failed, present);

    if let Some(column) = coerced.dataset.column("x") {
        for cell in column {
            if let Cell::Float(f) = cell {
                assert!(f.is_finite());
            }
        }
    }
});
