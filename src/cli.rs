/// Command-line arguments.
///
/// With no arguments the run uses the stock layout: dataset under `train`,
/// report written to `conteo_dataset.csv`.
use clap::Parser;
use imgtally_core::{DEFAULT_BASE_PATH, DEFAULT_OUTPUT_PATH};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "imgtally", version, about)]
pub struct Cli {
    /// Dataset base directory laid out as <type>/<subtype>/<images>.
    #[arg(default_value = DEFAULT_BASE_PATH)]
    pub base: PathBuf,

    /// Path of the CSV report to write.
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Log per-folder detail.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub base_path: PathBuf,
    pub output_path: PathBuf,
}

impl From<&Cli> for RunConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            base_path: cli.base.clone(),
            output_path: cli.output.clone(),
        }
    }
}
