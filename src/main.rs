//! imgtally — counts images per subtype folder in a dataset.
//!
//! Thin binary entry point. All scanning and rendering lives in the
//! `imgtally-core` crate.

mod cli;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, RunConfig};
use imgtally_core::model::format_count;
use imgtally_core::report::{render_table, write_csv_file};
use imgtally_core::scanner::collect_subtypes;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialise structured logging. Logs go to stderr so stdout carries
    // only the report.
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    run(&RunConfig::from(&cli))
}

fn run(config: &RunConfig) -> anyhow::Result<()> {
    tracing::info!("imgtally starting");
    println!("Starting dataset analysis...");
    println!("Dataset base path: {}", config.base_path.display());

    let records = collect_subtypes(&config.base_path)
        .with_context(|| format!("failed to scan {}", config.base_path.display()))?;

    if records.is_empty() {
        println!("No subtypes found to analyse.");
        return Ok(());
    }

    print!("{}", render_table(&records));

    let total = write_csv_file(&records, &config.output_path)
        .with_context(|| format!("failed to write {}", config.output_path.display()))?;
    println!("Report written: {}", config.output_path.display());
    println!("Grand total of images: {}", format_count(total));

    println!(
        "\nAnalysis complete. Found {} subtypes.",
        format_count(records.len() as u64)
    );
    println!("Total images in dataset: {}", format_count(total));
    Ok(())
}
