//! IPv4 subnet calculator.
//!
//! Given a dotted-decimal address and a CIDR prefix length, derives the
//! network and broadcast addresses, the usable host range, host counts,
//! subnet and wildcard masks, and the classful network class.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{AddressError, AddressResult};
pub use models::{Ipv4, NetworkClass, SubnetSummary, SummaryTuple};
pub use processing::{summarise_all, AddressCalculator, Evaluation};

/// Calculate every subnet fact for `address`/`prefix_length`.
///
/// The address is validated before the prefix length; nothing is computed
/// unless both are valid.
///
/// # Examples
/// ```
/// use ipv4_addressing::{ipv4_address, AddressError};
///
/// let summary = ipv4_address("192.168.1.10", 24).unwrap();
/// assert_eq!(summary.network_id.to_string(), "192.168.1.0");
/// assert_eq!(summary.usable_ips, 254);
///
/// assert_eq!(
///     ipv4_address("192.168.1.10", 0),
///     Err(AddressError::InvalidPrefix(0))
/// );
/// ```
pub fn ipv4_address(address: &str, prefix_length: i64) -> AddressResult<SubnetSummary> {
    log::debug!("ipv4_address({address}, {prefix_length})");
    let calculator = AddressCalculator::new(address, prefix_length)?;
    Ok(calculator.summary())
}
