//! Output formatting for subnet summaries.
//!
//! This module renders evaluations for stdout:
//! - [`csv`] - CSV rows with quoted, aligned fields
//! - [`json`] - JSON array via serde_json
//! - [`terminal`] - labelled text with colors

mod csv;
mod json;
mod terminal;

pub use csv::{csv_header, csv_row, render_csv, CSV_COLUMNS};
pub use json::render_json;
pub use terminal::{format_field, render_text, summary_lines};

use crate::config::OutputFormat;
use crate::error::AddressResult;
use crate::processing::Evaluation;

/// Render evaluations in the requested format.
pub fn render(evaluations: &[Evaluation], format: OutputFormat) -> AddressResult<String> {
    match format {
        OutputFormat::Text => Ok(render_text(evaluations)),
        OutputFormat::Csv => Ok(render_csv(evaluations)),
        OutputFormat::Json => render_json(evaluations),
    }
}

/// Render and print evaluations to stdout.
pub fn print_evaluations(evaluations: &[Evaluation], format: OutputFormat) -> AddressResult<()> {
    log::info!(
        "#Start print_evaluations() format={format:?} count={}",
        evaluations.len()
    );
    print!("{}", render(evaluations, format)?);
    Ok(())
}
