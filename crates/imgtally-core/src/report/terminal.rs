/// Fixed-width console table.
use super::TOTAL_LABEL;
use crate::model::{grand_total, sort_descending, SubtypeRecord};

/// Total width of the `=` and `-` rules.
const RULE_WIDTH: usize = 60;
const NAME_WIDTH: usize = 40;
const COUNT_WIDTH: usize = 10;

const TITLE: &str = "IMAGE COUNT REPORT BY SUBTYPE";

/// Render records as a fixed-width table with a trailing total row.
///
/// Rows are sorted by count descending. Names longer than the name column
/// are not truncated; they push the count column to the right.
pub fn render_table(records: &[SubtypeRecord]) -> String {
    let mut sorted = records.to_vec();
    sort_descending(&mut sorted);

    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);

    let mut lines = Vec::with_capacity(sorted.len() + 9);
    lines.push(String::new());
    lines.push(heavy.clone());
    lines.push(TITLE.to_string());
    lines.push(heavy.clone());
    lines.push(row("Subtype", "Count"));
    lines.push(light.clone());
    lines.extend(
        sorted
            .iter()
            .map(|record| row(&record.name, &record.count.to_string())),
    );
    lines.push(light);
    lines.push(row(TOTAL_LABEL, &grand_total(&sorted).to_string()));
    lines.push(heavy);

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn row(name: &str, count: &str) -> String {
    format!("{name:<nw$} {count:<cw$}", nw = NAME_WIDTH, cw = COUNT_WIDTH)
}
