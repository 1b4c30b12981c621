//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use recast::{OutputFormat, RepairMode};
use std::path::PathBuf;

/// Recast: repair column types before visual exploration
#[derive(Parser)]
#[command(name = "recast")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the type profile of every column
    Profile {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Keep every field as text instead of inferring numbers and booleans
        #[arg(long)]
        raw: bool,
    },

    /// Show the first rows of a data file
    Preview {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Number of rows to show
        #[arg(short = 'n', long, default_value = "10")]
        rows: usize,

        /// Keep every field as text instead of inferring numbers and booleans
        #[arg(long)]
        raw: bool,
    },

    /// Coerce selected columns to numeric or text
    Coerce {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Column to coerce to numeric (repeatable)
        #[arg(long = "numeric", value_name = "COLUMN")]
        numeric: Vec<String>,

        /// Column to coerce to text (repeatable)
        #[arg(long = "text", value_name = "COLUMN")]
        text: Vec<String>,

        /// JSON request file mapping column names to "numeric" or "text"
        #[arg(long, value_name = "REQUEST")]
        request: Option<PathBuf>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Repair column types automatically
    Repair {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Repair strategy (text-all, numeric-detect)
        #[arg(short, long, default_value = "numeric-detect")]
        mode: RepairMode,

        /// Do not select columns that have no values
        #[arg(long)]
        skip_empty: bool,

        #[command(flatten)]
        output: OutputArgs,
    },
}

/// Arguments shared by commands that write repaired data.
#[derive(clap::Args)]
pub struct OutputArgs {
    /// Output path for repaired data (default: <file>_recast.<format>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format (tsv, csv, json)
    #[arg(short, long, default_value = "tsv")]
    pub format: OutputFormat,

    /// Keep every field as text instead of inferring numbers and booleans
    #[arg(long)]
    pub raw: bool,

    /// Print the coercion report as JSON
    #[arg(long)]
    pub json: bool,
}
