/// Error types for the scanner and the report writer.
///
/// A missing dataset base path is not an error: the walker logs it and
/// returns an empty result.
use std::path::PathBuf;
use thiserror::Error;

/// Failures while walking the dataset or counting a folder.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("cannot read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: jwalk::Error,
    },
}

/// Failures while writing the CSV report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("cannot create report file {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error while writing report: {0}")]
    Io(#[from] std::io::Error),
}
