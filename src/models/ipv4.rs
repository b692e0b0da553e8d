//! IPv4 address and CIDR notation utilities.
//!
//! Provides the [`Ipv4`] struct for a validated address plus prefix length,
//! the input validation predicates, and subnet mask conversion.

use crate::error::{AddressError, AddressResult};
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::sync::OnceLock;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Shortest prefix accepted for a calculation.
pub const MIN_LENGTH: u8 = 1;

/// Regex splitting `address/prefix`, whitespace allowed around the slash.
static CIDR_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_cidr_regex() -> &'static Regex {
    CIDR_REGEX.get_or_init(|| Regex::new(r"^([^/\s]+)\s*/\s*([^/\s]+)$").expect("Invalid Regex"))
}

/// Returns true iff `prefix_length` is in 1-32.
///
/// # Examples
/// ```
/// use ipv4_addressing::models::validate_prefix;
/// assert!(validate_prefix(24));
/// assert!(!validate_prefix(0));
/// assert!(!validate_prefix(33));
/// ```
pub fn validate_prefix(prefix_length: i64) -> bool {
    (i64::from(MIN_LENGTH)..=i64::from(MAX_LENGTH)).contains(&prefix_length)
}

/// Returns true iff `address` is four dot separated decimal octets in 0-255.
///
/// Non-numeric components make the address invalid, they never panic.
pub fn validate_ip(address: &str) -> bool {
    parse_octets(address).is_ok()
}

/// Parse a dotted-decimal address into its four octets.
///
/// Leading zeros are accepted ("010" is 10), signs and whitespace inside a
/// component are not.
pub fn parse_octets(address: &str) -> AddressResult<[u8; 4]> {
    let invalid = || AddressError::InvalidAddress(address.to_string());

    let parts: Vec<&str> = address.split('.').collect();
    if parts.len() != 4 {
        log::debug!("parse_octets({address}) got {} components", parts.len());
        return Err(invalid());
    }

    let mut octets = [0u8; 4];
    for (octet, part) in octets.iter_mut().zip(parts.iter()) {
        *octet = parse_octet(part).ok_or_else(invalid)?;
    }
    Ok(octets)
}

fn parse_octet(part: &str) -> Option<u8> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // u32 keeps long zero padded components ("0000010") parseable
    part.parse::<u32>().ok().and_then(|v| u8::try_from(v).ok())
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use ipv4_addressing::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> AddressResult<u32> {
    if len > MAX_LENGTH {
        Err(AddressError::InvalidPrefix(i64::from(len)))
    } else {
        Ok(mask_bits(len))
    }
}

/// Convert a CIDR prefix length (0-32) to a dotted subnet mask.
///
/// The leading `len` bits are set, packed big-endian into four octets.
pub fn prefix_to_mask(len: u8) -> AddressResult<Ipv4Addr> {
    get_cidr_mask(len).map(Ipv4Addr::from)
}

/// Mask bits for a prefix already known to be at most [`MAX_LENGTH`].
pub(crate) fn mask_bits(len: u8) -> u32 {
    // shifting by 32 overflows, which is exactly the /0 case
    u32::MAX
        .checked_shl(u32::from(MAX_LENGTH - len))
        .unwrap_or(0)
}

/// Validated IPv4 address with its prefix length.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The IPv4 address as given, host bits included.
    pub addr: Ipv4Addr,
    /// The prefix length (1-32).
    pub mask: u8,
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let cidr = format!("{}/{}", self.addr, self.mask);
        serializer.serialize_str(&cidr)
    }
}

impl<'de> Deserialize<'de> for Ipv4 {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4::new(&s).map_err(de::Error::custom)
    }
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.0.0.1/24").
    pub fn new(addr_cidr: &str) -> AddressResult<Ipv4> {
        let addr_cidr = addr_cidr.trim();
        let caps = get_cidr_regex()
            .captures(addr_cidr)
            .ok_or_else(|| AddressError::InvalidCidr(addr_cidr.to_string()))?;
        let prefix_length: i64 = caps[2]
            .parse()
            .map_err(|_| AddressError::InvalidCidr(addr_cidr.to_string()))?;
        Ipv4::from_parts(&caps[1], prefix_length)
    }

    /// Create a new [`Ipv4`] from a dotted address and a prefix length.
    ///
    /// The address is checked first, so input bad on both counts reports
    /// [`AddressError::InvalidAddress`].
    pub fn from_parts(address: &str, prefix_length: i64) -> AddressResult<Ipv4> {
        let octets = parse_octets(address)?;
        if !validate_prefix(prefix_length) {
            return Err(AddressError::InvalidPrefix(prefix_length));
        }
        let mask =
            u8::try_from(prefix_length).map_err(|_| AddressError::InvalidPrefix(prefix_length))?;
        Ok(Ipv4 {
            addr: Ipv4Addr::from(octets),
            mask,
        })
    }

    /// The subnet mask for this prefix length.
    pub fn netmask(&self) -> Ipv4Addr {
        Ipv4Addr::from(mask_bits(self.mask))
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
