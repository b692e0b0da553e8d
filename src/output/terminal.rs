//! Terminal output utilities.
//!
//! Provides formatting helpers and the labelled text rendering.

use crate::models::SubnetSummary;
use crate::processing::Evaluation;
use colored::Colorize;
use std::fmt::Write;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

const LABEL_WIDTH: usize = 16;

/// Label and value pairs in display order.
pub fn summary_lines(s: &SubnetSummary) -> Vec<(&'static str, String)> {
    vec![
        ("Network ID", s.network_id.to_string()),
        ("First IP", s.first_ip.to_string()),
        ("Last IP", s.last_ip.to_string()),
        ("Broadcast ID", s.broadcast_id.to_string()),
        ("Total IPs", s.total_ips.to_string()),
        ("Usable IPs", s.usable_ips.to_string()),
        ("Subnet Mask", s.subnet_mask.to_string()),
        ("Wildcard Mask", s.wildcard_mask.to_string()),
        ("Class", s.network_class.to_string()),
    ]
}

/// Render evaluations as labelled blocks separated by blank lines.
pub fn render_text(evaluations: &[Evaluation]) -> String {
    let mut out = String::new();
    for (i, evaluation) in evaluations.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        match &evaluation.result {
            Ok(summary) => {
                let _ = writeln!(out, "{}", summary.cidr.to_string().as_str().bold());
                for (label, value) in summary_lines(summary) {
                    let label = format!("{label:<LABEL_WIDTH$}");
                    let _ = writeln!(out, "  {}: {}", label.as_str().cyan(), value);
                }
            }
            Err(e) => {
                let _ = writeln!(out, "{}", evaluation.input.as_str().bold());
                let _ = writeln!(out, "  {} {}", "ERROR".on_red(), e.to_string().as_str().red());
            }
        }
    }
    out
}
