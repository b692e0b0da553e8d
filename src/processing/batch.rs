//! Evaluate many CIDR inputs in one pass.
//!
//! One bad entry never hides the others: every input gets its own result.

use crate::error::AddressResult;
use crate::models::{Ipv4, SubnetSummary};
use crate::processing::AddressCalculator;

/// One input and what came of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// The input exactly as given.
    pub input: String,
    pub result: AddressResult<SubnetSummary>,
}

/// Summarise a single `address/prefix` string.
pub fn summarise(input: &str) -> AddressResult<SubnetSummary> {
    let cidr = Ipv4::new(input)?;
    log::debug!("summarise({input}) parsed as {cidr}");
    Ok(AddressCalculator::from(cidr).summary())
}

/// Summarise every input, keeping input order.
///
/// # Arguments
/// * `inputs` - CIDR strings such as "10.0.0.1/24"
///
/// # Returns
/// One [`Evaluation`] per input.
pub fn summarise_all<S: AsRef<str>>(inputs: &[S]) -> Vec<Evaluation> {
    log::info!("#Start summarise_all() inputs={}", inputs.len());

    let evaluations: Vec<Evaluation> = inputs
        .iter()
        .map(|input| {
            let input = input.as_ref();
            let result = summarise(input);
            if let Err(e) = &result {
                log::warn!("Skipping '{input}': {e}");
            }
            Evaluation {
                input: input.to_string(),
                result,
            }
        })
        .collect();

    let failed = evaluations.iter().filter(|e| e.result.is_err()).count();
    log::info!(
        "# Done summarise_all() ok={} failed={}",
        evaluations.len() - failed,
        failed
    );
    evaluations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AddressError;

    #[test]
    fn test_summarise_all_keeps_order_and_errors() {
        let inputs = vec!["192.168.1.10/24", "300.1.1.1/24", "10.0.0.5/8", "10.0.0.5"];
        let evaluations = summarise_all(&inputs);

        assert_eq!(evaluations.len(), 4);
        let order: Vec<&str> = evaluations.iter().map(|e| e.input.as_str()).collect();
        assert_eq!(order, inputs);

        let first = evaluations[0].result.as_ref().unwrap();
        assert_eq!(first.network_id.to_string(), "192.168.1.0");
        assert_eq!(
            evaluations[1].result,
            Err(AddressError::InvalidAddress("300.1.1.1".to_string()))
        );
        assert_eq!(evaluations[2].result.as_ref().unwrap().total_ips, 16_777_216);
        assert_eq!(
            evaluations[3].result,
            Err(AddressError::InvalidCidr("10.0.0.5".to_string()))
        );
    }

    #[test]
    fn test_summarise_all_empty() {
        let inputs: Vec<String> = vec![];
        assert!(summarise_all(&inputs).is_empty());
    }
}
