//! Coerce command - convert selected columns and export the result.

use std::path::PathBuf;

use colored::Colorize;
use recast::output::save_dataset;
use recast::{CoercionRequest, EngineConfig, TargetType};

use super::common::{build_recast, ensure_exists, output_path, print_report};
use crate::cli::OutputArgs;

pub fn run(
    file: PathBuf,
    numeric: Vec<String>,
    text: Vec<String>,
    request_file: Option<PathBuf>,
    output: OutputArgs,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    ensure_exists(&file)?;

    // Flags are applied after the request file, so they win on conflicts
    let mut request = match request_file {
        Some(ref path) => CoercionRequest::load(path)?,
        None => CoercionRequest::new(),
    };
    for column in numeric {
        request.insert(column, TargetType::Numeric);
    }
    for column in text {
        request.insert(column, TargetType::Text);
    }

    if request.is_empty() {
        return Err("No columns selected. Use --numeric, --text, or --request.".into());
    }

    let recast = build_recast(output.raw, EngineConfig::default());
    let (dataset, source) = recast.load(&file)?;

    println!(
        "{} {} column(s) in {}",
        "Coercing".cyan().bold(),
        request.len().to_string().white().bold(),
        source.file.white()
    );

    let coerced = recast.coerce(&dataset, &request)?;

    if output.json {
        println!("{}", serde_json::to_string_pretty(&coerced.report)?);
    } else {
        println!();
        print_report(&coerced.report, verbose);
    }

    let path = output_path(&file, output.output, output.format);
    save_dataset(&coerced.dataset, &path, output.format)?;

    println!();
    println!(
        "{} {}",
        "Saved to".green().bold(),
        path.display().to_string().white()
    );

    Ok(())
}
