//! Repair command - apply a zero-configuration repair strategy.

use std::path::PathBuf;

use colored::Colorize;
use recast::output::save_dataset;
use recast::{EngineConfig, RepairMode};

use super::common::{build_recast, ensure_exists, output_path, print_report};
use crate::cli::OutputArgs;

pub fn run(
    file: PathBuf,
    mode: RepairMode,
    skip_empty: bool,
    output: OutputArgs,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    ensure_exists(&file)?;

    let engine = EngineConfig {
        select_empty_columns: !skip_empty,
        ..EngineConfig::default()
    };
    let recast = build_recast(output.raw, engine);

    println!(
        "{} {} with {}",
        "Repairing".cyan().bold(),
        file.display().to_string().white(),
        mode.to_string().white().bold()
    );

    let prepared = recast.prepare(&file, Some(mode))?;

    if output.json {
        println!("{}", serde_json::to_string_pretty(&prepared.report)?);
    } else {
        println!();
        print_report(&prepared.report, verbose);
    }

    let path = output_path(&file, output.output, output.format);
    save_dataset(&prepared.dataset, &path, output.format)?;

    println!();
    println!(
        "{} {}",
        "Saved to".green().bold(),
        path.display().to_string().white()
    );

    if !prepared.report.is_clean() {
        println!(
            "Some values were dropped. Run {} to pick columns manually.",
            format!("recast coerce {} --numeric <COLUMN>", file.display())
                .cyan()
                .bold()
        );
    }

    Ok(())
}
