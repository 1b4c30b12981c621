//! Fuzz target for the data parser.
//!
//! This fuzzer tests that the CSV/TSV parser:
//! 1. Never panics on malformed input
//! 2. Always yields a rectangular dataset when it succeeds

#![no_main]

use libfuzzer_sys::fuzz_target;
use recast::input::Parser;

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    let parser = Parser::new();
    if let Ok(dataset) = parser.parse_bytes(data) {
        for (_, cells) in dataset.columns() {
            assert_eq!(cells.len(), dataset.row_count());
        }
    }
});
