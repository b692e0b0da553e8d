//! Domain models for IPv4 addressing.
//!
//! This module contains the value types used throughout the crate:
//! - [`Ipv4`] - validated address with CIDR prefix length
//! - [`NetworkClass`] - classful category of an address
//! - [`SubnetSummary`] - every derived fact about a subnet

mod class;
mod ipv4;
mod summary;

// Re-export public types
pub use class::NetworkClass;
pub(crate) use ipv4::mask_bits;
pub use ipv4::{
    get_cidr_mask, parse_octets, prefix_to_mask, validate_ip, validate_prefix, Ipv4, MAX_LENGTH,
    MIN_LENGTH,
};
pub use summary::{SubnetSummary, SummaryTuple};
