//! Recast CLI - column type repair for tabular data.

mod cli;
mod commands;
mod logger;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    let result = match cli.command {
        Commands::Profile { file, json, raw } => commands::profile::run(file, json, raw, cli.verbose),

        Commands::Preview { file, rows, raw } => commands::preview::run(file, rows, raw, cli.verbose),

        Commands::Coerce {
            file,
            numeric,
            text,
            request,
            output,
        } => commands::coerce::run(file, numeric, text, request, output, cli.verbose),

        Commands::Repair {
            file,
            mode,
            skip_empty,
            output,
        } => commands::repair::run(file, mode, skip_empty, output, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
