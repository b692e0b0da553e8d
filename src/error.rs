//! Error types for address calculations.

use thiserror::Error;

/// Everything that can go wrong while turning caller input into a subnet summary.
///
/// The variants are distinct so callers can tell a bad address (re-prompt)
/// from a bad prefix length (reject) without parsing messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// Not four dot separated components, a non-numeric component, or an octet above 255.
    #[error("Invalid IPv4 address: '{0}'")]
    InvalidAddress(String),
    /// Prefix length outside 1-32.
    #[error("Invalid prefix length: {0} (expected 1-32)")]
    InvalidPrefix(i64),
    /// Input that is not in `address/prefix` form.
    #[error("Invalid CIDR notation: '{0}'")]
    InvalidCidr(String),
    #[error("Output error: {0}")]
    Output(String),
}

pub type AddressResult<T> = std::result::Result<T, AddressError>;
