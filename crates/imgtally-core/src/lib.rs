/// imgtally Core — dataset walking, image counting, and report rendering.
///
/// This crate contains all business logic with no console or process
/// concerns. The `imgtally` binary is a thin shell around it.
///
/// # Modules
///
/// - [`model`] — Subtype records, ordering, and count formatting.
/// - [`scanner`] — Two-level dataset walk and per-folder image counting.
/// - [`report`] — Console table and CSV report rendering.
/// - [`error`] — Error types for scanning and reporting.
pub mod error;
pub mod model;
pub mod report;
pub mod scanner;

pub use error::{ReportError, ScanError};
pub use model::SubtypeRecord;

/// Dataset base directory used when none is given.
pub const DEFAULT_BASE_PATH: &str = "train";

/// CSV report path used when none is given.
pub const DEFAULT_OUTPUT_PATH: &str = "conteo_dataset.csv";
