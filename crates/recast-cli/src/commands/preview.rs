//! Preview command - show the first rows of a data file.

use std::path::PathBuf;

use colored::Colorize;
use recast::EngineConfig;
use recast::output::preview;

use super::common::{build_recast, ensure_exists};

/// Widest a preview cell is allowed to render.
const MAX_CELL_WIDTH: usize = 24;

pub fn run(
    file: PathBuf,
    rows: usize,
    raw: bool,
    _verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    ensure_exists(&file)?;

    let recast = build_recast(raw, EngineConfig::default());
    let (dataset, source) = recast.load(&file)?;

    let headers: Vec<&str> = dataset.column_names().collect();
    let body = preview(&dataset, rows);

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            body.iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(h.chars().count()))
                .max()
                .unwrap_or(0)
                .min(MAX_CELL_WIDTH)
        })
        .collect();

    let header_line: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| format!("{:w$}", truncate(h, *w), w = *w))
        .collect();
    println!("{}", header_line.join("  ").bold());

    for row in &body {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(v, w)| format!("{:w$}", truncate(v, *w), w = *w))
            .collect();
        println!("{}", line.join("  "));
    }

    println!();
    println!(
        "Showing {} of {} rows from {}",
        body.len().to_string().white().bold(),
        source.row_count,
        source.file.cyan()
    );

    Ok(())
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        value.to_string()
    } else {
        let mut s: String = value.chars().take(width.saturating_sub(1)).collect();
        s.push('…');
        s
    }
}
