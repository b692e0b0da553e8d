//! CSV output formatting for subnet summaries.

use crate::processing::Evaluation;
use itertools::Itertools;

use super::terminal::format_field;

/// Column names, in row order.
pub const CSV_COLUMNS: [&str; 11] = [
    "input",
    "network_id",
    "first_ip",
    "last_ip",
    "broadcast_id",
    "total_ips",
    "usable_ips",
    "subnet_mask",
    "wildcard_mask",
    "class",
    "error",
];

/// Minimum width per column so rows line up in a terminal.
const CSV_WIDTHS: [usize; 11] = [20, 17, 17, 17, 17, 12, 12, 17, 17, 7, 0];

/// Escape a field the way spreadsheets expect: double any embedded quote.
fn escape(value: &str) -> String {
    value.replace('"', "\"\"")
}

pub fn csv_header() -> String {
    CSV_COLUMNS
        .iter()
        .zip(CSV_WIDTHS)
        .map(|(name, width)| format_field(name, width))
        .join(",")
}

/// One CSV row; failed inputs leave the summary columns empty.
pub fn csv_row(evaluation: &Evaluation) -> String {
    let fields: Vec<String> = match &evaluation.result {
        Ok(s) => vec![
            evaluation.input.clone(),
            s.network_id.to_string(),
            s.first_ip.to_string(),
            s.last_ip.to_string(),
            s.broadcast_id.to_string(),
            s.total_ips.to_string(),
            s.usable_ips.to_string(),
            s.subnet_mask.to_string(),
            s.wildcard_mask.to_string(),
            s.network_class.to_string(),
            String::new(),
        ],
        Err(e) => {
            let mut fields = vec![String::new(); CSV_COLUMNS.len()];
            fields[0] = evaluation.input.clone();
            fields[CSV_COLUMNS.len() - 1] = e.to_string();
            fields
        }
    };

    fields
        .iter()
        .zip(CSV_WIDTHS)
        .map(|(value, width)| format_field(escape(value), width))
        .join(",")
}

/// Header line followed by one row per evaluation.
pub fn render_csv(evaluations: &[Evaluation]) -> String {
    log::debug!("render_csv() rows={}", evaluations.len());
    let mut out = csv_header();
    out.push('\n');
    for evaluation in evaluations {
        out.push_str(&csv_row(evaluation));
        out.push('\n');
    }
    out
}
