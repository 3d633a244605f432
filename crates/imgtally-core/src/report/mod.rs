/// Report rendering — the console table and the CSV file.
///
/// Both renderers take records in any order and sort them internally, so
/// the table and the CSV always agree on row order and grand total.
pub mod csv;
pub mod terminal;

pub use self::csv::{write_csv, write_csv_file, CSV_HEADER};
pub use self::terminal::render_table;

/// Label of the grand-total row in both outputs.
pub const TOTAL_LABEL: &str = "TOTAL GLOBAL";
