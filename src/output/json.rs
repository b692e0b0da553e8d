//! JSON output of evaluations.

use crate::error::{AddressError, AddressResult};
use crate::models::SubnetSummary;
use crate::processing::Evaluation;
use serde::Serialize;

/// Serialized shape of one evaluation: `summary` on success, `error` otherwise.
#[derive(Serialize, Debug)]
struct JsonRecord<'a> {
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<&'a SubnetSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<'a> From<&'a Evaluation> for JsonRecord<'a> {
    fn from(evaluation: &'a Evaluation) -> Self {
        JsonRecord {
            input: &evaluation.input,
            summary: evaluation.result.as_ref().ok(),
            error: evaluation.result.as_ref().err().map(|e| e.to_string()),
        }
    }
}

/// Pretty printed JSON array, one record per evaluation.
pub fn render_json(evaluations: &[Evaluation]) -> AddressResult<String> {
    let records: Vec<JsonRecord> = evaluations.iter().map(JsonRecord::from).collect();
    let mut json = serde_json::to_string_pretty(&records)
        .map_err(|e| AddressError::Output(format!("Error serializing JSON: {e}")))?;
    json.push('\n');
    Ok(json)
}
