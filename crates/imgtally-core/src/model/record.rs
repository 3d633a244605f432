/// A single counted subtype folder, plus ordering and totals over a
/// list of them.
use compact_str::CompactString;
use serde::Serialize;

/// One row of the report: a subtype folder name and its image count.
///
/// Serialises as `Subtype,Count` so the CSV writer can emit rows directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubtypeRecord {
    /// Folder name only (NOT the full path).
    #[serde(rename = "Subtype")]
    pub name: CompactString,
    /// Number of image files directly inside the folder.
    #[serde(rename = "Count")]
    pub count: u64,
}

impl SubtypeRecord {
    pub fn new(name: impl Into<CompactString>, count: u64) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// Sort records by count, largest first.
///
/// `sort_by` is stable, so records with equal counts keep the order in
/// which the walker discovered them.
pub fn sort_descending(records: &mut [SubtypeRecord]) {
    records.sort_by(|a, b| b.count.cmp(&a.count));
}

/// Sum of all record counts.
pub fn grand_total(records: &[SubtypeRecord]) -> u64 {
    records.iter().map(|r| r.count).sum()
}
