//! Helpers shared by the commands that load and write data.

use std::path::{Path, PathBuf};

use colored::Colorize;
use recast::{
    CellMode, CoercionReport, EngineConfig, OutputFormat, ParserConfig, Recast, RecastConfig,
};

/// Build a Recast instance for the given loader and engine settings.
pub fn build_recast(raw: bool, engine: EngineConfig) -> Recast {
    let parser = ParserConfig {
        cell_mode: if raw { CellMode::Raw } else { CellMode::Typed },
        ..ParserConfig::default()
    };
    Recast::with_config(RecastConfig { parser, engine })
}

/// Fail early with a readable message when the input file is absent.
pub fn ensure_exists(file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }
    Ok(())
}

/// Default output path: `<stem>_recast.<ext>` next to the input.
pub fn output_path(file: &Path, output: Option<PathBuf>, format: OutputFormat) -> PathBuf {
    output.unwrap_or_else(|| {
        let stem = file.file_stem().unwrap_or_default().to_string_lossy();
        file.with_file_name(format!("{}_recast.{}", stem, format.extension()))
    })
}

/// Print a coercion report, one line per column.
pub fn print_report(report: &CoercionReport, verbose: bool) {
    if report.is_empty() {
        println!("{}", "No columns selected - data left unchanged.".yellow());
        return;
    }

    println!("{}", "Coercion report:".yellow().bold());
    for (column, col) in &report.columns {
        let failed = if col.failed == 0 {
            col.failed.to_string().green()
        } else {
            col.failed.to_string().red()
        };
        println!(
            "  {:20} {:8} converted {:>6}  missing {:>6}  -> {}",
            column,
            col.target.to_string(),
            col.converted.to_string().white().bold(),
            failed,
            col.final_type
        );

        if verbose {
            for failure in &col.failures {
                println!(
                    "      row {:>5}: '{}'",
                    (failure.row + 1).to_string().dimmed(),
                    failure.original
                );
            }
            if col.failed > col.failures.len() {
                println!("      ... and {} more", col.failed - col.failures.len());
            }
        }
    }
    println!();

    if report.is_clean() {
        println!("{}", "All requested values converted.".green());
    } else {
        println!(
            "{} {} value(s) could not be converted and are now missing.",
            "Warning:".yellow().bold(),
            report.total_failed()
        );
    }
}
