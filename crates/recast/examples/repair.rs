//! Example: Profile a tabular data file and repair its column types.
//!
//! Usage:
//!   cargo run --example repair -- <file_path> [text-all|numeric-detect]
//!
//! Example:
//!   cargo run --example repair -- measurements.csv numeric-detect

use std::env;
use std::path::Path;

use recast::{Recast, RepairMode};

fn main() -> recast::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example repair -- <file_path> [text-all|numeric-detect]");
        eprintln!("\nExample:");
        eprintln!("  cargo run --example repair -- measurements.csv numeric-detect");
        std::process::exit(1);
    }

    let file_path = &args[1];
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Error: File not found: {}", file_path);
        std::process::exit(1);
    }

    let mode: RepairMode = match args.get(2) {
        Some(mode) => mode.parse()?,
        None => RepairMode::NumericDetect,
    };

    let separator = "=".repeat(80);
    println!("{}", separator);
    println!("Recast: {} ({})", file_path, mode);
    println!("{}", separator);
    println!();

    let recast = Recast::new();
    let prepared = recast.prepare(path, Some(mode))?;

    println!("## Source Metadata");
    println!("  File: {}", prepared.source.file);
    println!("  Format: {}", prepared.source.format);
    println!("  Rows: {}", prepared.source.row_count);
    println!("  Columns: {}", prepared.source.column_count);
    println!();

    println!("## Profiles ({} columns)", prepared.profiles.len());
    println!();
    for p in &prepared.profiles {
        println!(
            "  {:20} {:8} missing={:<5} numeric={:<5} coercible={}",
            p.name, p.type_tag, p.missing_count, p.numeric_count, p.numeric_coercible
        );
        if let Some(summary) = &p.summary {
            println!(
                "                       min={} median={} max={}",
                summary.min, summary.median, summary.max
            );
        }
    }
    println!();

    println!("## Repairs ({} columns)", prepared.report.len());
    println!();
    for (column, col) in &prepared.report.columns {
        println!("  {}", col.description(column));
        for failure in &col.failures {
            println!("       row {}: {:?}", failure.row + 1, failure.original);
        }
    }
    println!();

    println!("## Summary");
    println!("  Converted: {}", prepared.report.total_converted());
    println!("  Dropped: {}", prepared.report.total_failed());
    println!();

    println!("{}", separator);

    Ok(())
}
