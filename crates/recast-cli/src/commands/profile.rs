//! Profile command - show the type profile of every column.

use std::path::PathBuf;

use colored::Colorize;
use recast::{EngineConfig, NumericSummary, TypeTag};

use super::common::{build_recast, ensure_exists};

pub fn run(
    file: PathBuf,
    json_output: bool,
    raw: bool,
    _verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    ensure_exists(&file)?;

    let recast = build_recast(raw, EngineConfig::default());
    let (dataset, source) = recast.load(&file)?;
    let profiles = recast.profile(&dataset);

    if json_output {
        let status = serde_json::json!({
            "source": source,
            "columns": profiles,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!(
        "{} {} ({} rows, {} columns)",
        "Profile of".cyan().bold(),
        source.file.white(),
        source.row_count,
        source.column_count
    );
    println!();

    println!(
        "  {:20} {:8} {:>8} {:>8} {:>8}  {}",
        "column".bold(),
        "type".bold(),
        "missing".bold(),
        "numeric".bold(),
        "unique".bold(),
        "numeric-coercible".bold()
    );
    for p in &profiles {
        let tag = match p.type_tag {
            TypeTag::Numeric => p.type_tag.to_string().green(),
            TypeTag::Mixed => p.type_tag.to_string().red(),
            TypeTag::Empty => p.type_tag.to_string().dimmed(),
            _ => p.type_tag.to_string().normal(),
        };
        let coercible = if p.numeric_coercible {
            "yes".green()
        } else {
            format!("no ({} non-numeric)", p.non_numeric_count()).yellow()
        };
        println!(
            "  {:20} {:8} {:>8} {:>8} {:>8}  {}",
            p.name, tag, p.missing_count, p.numeric_count, p.unique_count, coercible
        );
    }

    let with_summary: Vec<_> = profiles
        .iter()
        .filter_map(|p| p.summary.as_ref().map(|s| (p, s)))
        .collect();
    if !with_summary.is_empty() {
        println!();
        println!("{}", "Numeric summary:".yellow().bold());
        println!(
            "  {:20} {:>8} {:>12} {:>12} {:>12} {:>12} {:>12} {:>12} {:>12}",
            "column", "count", "mean", "std", "min", "25%", "50%", "75%", "max"
        );
        for (p, s) in with_summary {
            println!("  {:20} {}", p.name, summary_row(s));
        }
    }

    Ok(())
}

/// The numeric columns of a summary line, in `describe()` order.
fn summary_row(s: &NumericSummary) -> String {
    format!(
        "{:>8} {:>12.4} {:>12.4} {:>12.4} {:>12.4} {:>12.4} {:>12.4} {:>12.4}",
        s.count, s.mean, s.std, s.min, s.q1, s.median, s.q3, s.max
    )
}
