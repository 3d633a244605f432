/// CSV report writer.
///
/// Layout:
///
/// ```text
/// Subtype,Count
/// subtipo_1,4
/// subtipo_2,0
///
/// TOTAL GLOBAL,4
/// ```
///
/// Rows end in CRLF and fields are quoted only when they need to be.
use super::TOTAL_LABEL;
use crate::error::ReportError;
use crate::model::{grand_total, sort_descending, SubtypeRecord};
use ::csv::{Terminator, WriterBuilder};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Header row of the report.
pub const CSV_HEADER: [&str; 2] = ["Subtype", "Count"];

/// Write the report for `records` to `writer` and return the grand total.
///
/// Records are sorted by count descending before writing; ties keep the
/// order they were passed in.
pub fn write_csv<W: Write>(records: &[SubtypeRecord], writer: W) -> Result<u64, ReportError> {
    let mut sorted = records.to_vec();
    sort_descending(&mut sorted);
    let total = grand_total(&sorted);

    let mut wtr = writer_builder().from_writer(writer);
    wtr.write_record(CSV_HEADER)?;
    for record in &sorted {
        wtr.serialize(record)?;
    }

    // The separator row has no fields, so it goes straight to the sink.
    let mut sink = wtr.into_inner().map_err(|e| e.into_error())?;
    sink.write_all(b"\r\n")?;

    let mut wtr = writer_builder().from_writer(sink);
    let total_text = total.to_string();
    wtr.write_record([TOTAL_LABEL, total_text.as_str()])?;
    wtr.flush()?;

    Ok(total)
}

/// Create (or truncate) `path` and write the report into it.
pub fn write_csv_file(records: &[SubtypeRecord], path: &Path) -> Result<u64, ReportError> {
    let file = File::create(path).map_err(|source| ReportError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let total = write_csv(records, BufWriter::new(file))?;
    debug!(
        "Wrote {} rows (total {total}) to {}",
        records.len(),
        path.display()
    );
    Ok(total)
}

fn writer_builder() -> WriterBuilder {
    let mut builder = WriterBuilder::new();
    builder.has_headers(false).terminator(Terminator::CRLF);
    builder
}
