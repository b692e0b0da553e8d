//! Subnet arithmetic over the four octets of an IPv4 address.
//!
//! [`AddressCalculator`] is built from already validated input, so none of
//! the derivations below can fail.

use crate::error::AddressResult;
use crate::models::{mask_bits, Ipv4, NetworkClass, SubnetSummary, MAX_LENGTH};
use std::net::Ipv4Addr;

/// Apply `op` to each pair of octets of `a` and `b`.
fn octet_wise(a: Ipv4Addr, b: Ipv4Addr, op: impl Fn(u8, u8) -> u8) -> Ipv4Addr {
    let (a, b) = (a.octets(), b.octets());
    Ipv4Addr::from(std::array::from_fn::<u8, 4, _>(|i| op(a[i], b[i])))
}

/// Look up the class of an address by its first octet.
pub fn identify_class(first_octet: u8) -> NetworkClass {
    NetworkClass::from_first_octet(first_octet)
}

/// Derives network, broadcast, host range and masks for one address/prefix pair.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AddressCalculator {
    cidr: Ipv4,
}

impl From<Ipv4> for AddressCalculator {
    fn from(cidr: Ipv4) -> Self {
        AddressCalculator { cidr }
    }
}

impl AddressCalculator {
    /// Validate `address` and `prefix_length`, then build the calculator.
    ///
    /// # Returns
    /// * `Err(InvalidAddress)` - address is not four octets in 0-255
    /// * `Err(InvalidPrefix)` - prefix length outside 1-32
    pub fn new(address: &str, prefix_length: i64) -> AddressResult<AddressCalculator> {
        Ipv4::from_parts(address, prefix_length).map(AddressCalculator::from)
    }

    pub fn address(&self) -> Ipv4Addr {
        self.cidr.addr
    }

    pub fn prefix_length(&self) -> u8 {
        self.cidr.mask
    }

    /// Subnet mask: the leading `prefix_length` bits set.
    pub fn prefix_to_mask(&self) -> Ipv4Addr {
        Ipv4Addr::from(mask_bits(self.cidr.mask))
    }

    /// Complement of the subnet mask, octet by octet.
    pub fn calculate_wildcard(&self) -> Ipv4Addr {
        let mask = self.prefix_to_mask().octets();
        Ipv4Addr::from(mask.map(|octet| !octet))
    }

    /// The address with all host bits cleared.
    pub fn calculate_network(&self) -> Ipv4Addr {
        octet_wise(self.cidr.addr, self.prefix_to_mask(), |addr, mask| addr & mask)
    }

    /// The network address with all host bits set.
    pub fn calculate_broadcast(&self) -> Ipv4Addr {
        octet_wise(self.calculate_network(), self.calculate_wildcard(), |net, wild| {
            net | wild
        })
    }

    /// Total and usable address counts.
    ///
    /// /31 (point-to-point) and /32 (host route) reserve nothing, so every
    /// address counts as usable.
    pub fn hosts_in_network(&self) -> (u64, u64) {
        let total = 1u64 << (MAX_LENGTH - self.cidr.mask);
        match self.cidr.mask {
            31 | 32 => (total, total),
            _ => (total, total - 2),
        }
    }

    /// First usable host.
    ///
    /// Only the last octet is ever incremented; octets 0-2 are copied from the
    /// network address. With the network's last octet always even for
    /// prefixes up to /30 this never needs a carry.
    pub fn first_ip(&self) -> Ipv4Addr {
        let network = self.calculate_network();
        if self.cidr.mask >= 31 {
            return network;
        }
        let broadcast = self.calculate_broadcast().octets();
        let mut first = network.octets();
        if first[3] != broadcast[3] {
            first[3] += 1;
        }
        Ipv4Addr::from(first)
    }

    /// Last usable host.
    pub fn last_ip(&self) -> Ipv4Addr {
        match self.cidr.mask {
            31 => self.calculate_broadcast(),
            32 => self.calculate_network(),
            _ => {
                let mut last = self.calculate_broadcast().octets();
                last[3] &= 0xFE;
                Ipv4Addr::from(last)
            }
        }
    }

    /// Class of the input address.
    pub fn network_class(&self) -> NetworkClass {
        identify_class(self.cidr.addr.octets()[0])
    }

    /// Every derived fact in one value.
    pub fn summary(&self) -> SubnetSummary {
        let (total_ips, usable_ips) = self.hosts_in_network();
        SubnetSummary {
            cidr: self.cidr,
            network_id: self.calculate_network(),
            first_ip: self.first_ip(),
            last_ip: self.last_ip(),
            broadcast_id: self.calculate_broadcast(),
            total_ips,
            usable_ips,
            subnet_mask: self.prefix_to_mask(),
            wildcard_mask: self.calculate_wildcard(),
            network_class: self.network_class(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AddressError;
    use rstest::rstest;

    fn calc(address: &str, prefix_length: i64) -> AddressCalculator {
        AddressCalculator::new(address, prefix_length).unwrap()
    }

    const SAMPLE_ADDRESSES: [&str; 6] = [
        "192.168.1.10",
        "10.0.0.5",
        "172.16.5.1",
        "0.0.0.0",
        "255.255.255.255",
        "203.0.113.77",
    ];

    #[test]
    fn test_new_rejects_bad_input() {
        assert_eq!(
            AddressCalculator::new("300.1.1.1", 24).unwrap_err(),
            AddressError::InvalidAddress("300.1.1.1".to_string())
        );
        assert_eq!(
            AddressCalculator::new("10.0.0.1", 33).unwrap_err(),
            AddressError::InvalidPrefix(33)
        );
        assert_eq!(
            AddressCalculator::new("10.x.0.1", 0).unwrap_err(),
            AddressError::InvalidAddress("10.x.0.1".to_string())
        );
    }

    #[test]
    fn test_network_is_idempotent_under_mask() {
        for address in SAMPLE_ADDRESSES {
            for prefix_length in 1..=30 {
                let c = calc(address, prefix_length);
                let network = c.calculate_network();
                let remasked = calc(&network.to_string(), prefix_length).calculate_network();
                assert_eq!(remasked, network, "{address}/{prefix_length}");
                assert_eq!(
                    u32::from(network) & u32::from(c.prefix_to_mask()),
                    u32::from(network)
                );
            }
        }
    }

    #[test]
    fn test_mask_plus_wildcard_is_255() {
        for prefix_length in 1..=32 {
            let c = calc("10.20.30.40", prefix_length);
            let mask = c.prefix_to_mask().octets();
            let wildcard = c.calculate_wildcard().octets();
            for i in 0..4 {
                assert_eq!(
                    u16::from(mask[i]) + u16::from(wildcard[i]),
                    255,
                    "/{prefix_length} octet {i}"
                );
            }
        }
    }

    #[test]
    fn test_network_or_wildcard_is_broadcast() {
        for address in SAMPLE_ADDRESSES {
            for prefix_length in 1..=32 {
                let c = calc(address, prefix_length);
                assert_eq!(
                    u32::from(c.calculate_network()) | u32::from(c.calculate_wildcard()),
                    u32::from(c.calculate_broadcast())
                );
            }
        }
    }

    #[test]
    fn test_hosts_in_network() {
        for prefix_length in 1..=30u32 {
            let total = 2u64.pow(32 - prefix_length);
            assert_eq!(
                calc("10.0.0.1", i64::from(prefix_length)).hosts_in_network(),
                (total, total - 2)
            );
        }
        assert_eq!(calc("10.0.0.1", 1).hosts_in_network().0, 2_147_483_648);
        assert_eq!(calc("10.0.0.1", 31).hosts_in_network(), (2, 2));
        assert_eq!(calc("10.0.0.1", 32).hosts_in_network(), (1, 1));
    }

    #[rstest]
    #[case("192.168.1.10", 24, "192.168.1.1", "192.168.1.254")]
    #[case("192.168.1.10", 30, "192.168.1.9", "192.168.1.10")]
    #[case("192.168.1.200", 26, "192.168.1.193", "192.168.1.254")]
    #[case("10.0.0.5", 8, "10.0.0.1", "10.255.255.254")]
    #[case("172.16.5.1", 31, "172.16.5.0", "172.16.5.1")]
    #[case("172.16.5.1", 32, "172.16.5.1", "172.16.5.1")]
    fn test_first_and_last_ip(
        #[case] address: &str,
        #[case] prefix_length: i64,
        #[case] first: &str,
        #[case] last: &str,
    ) {
        let c = calc(address, prefix_length);
        assert_eq!(c.first_ip().to_string(), first);
        assert_eq!(c.last_ip().to_string(), last);
    }

    // first_ip only ever touches the last octet; pin what that gives for
    // networks spanning more than one /24.
    #[rstest]
    #[case("10.0.1.77", 23, "10.0.0.0", "10.0.0.1", "10.0.1.254", "10.0.1.255")]
    #[case("172.16.200.7", 16, "172.16.0.0", "172.16.0.1", "172.16.255.254", "172.16.255.255")]
    #[case("192.168.37.4", 20, "192.168.32.0", "192.168.32.1", "192.168.47.254", "192.168.47.255")]
    #[case("8.8.8.8", 1, "0.0.0.0", "0.0.0.1", "127.255.255.254", "127.255.255.255")]
    fn test_first_ip_wider_than_24(
        #[case] address: &str,
        #[case] prefix_length: i64,
        #[case] network: &str,
        #[case] first: &str,
        #[case] last: &str,
        #[case] broadcast: &str,
    ) {
        let c = calc(address, prefix_length);
        assert_eq!(c.calculate_network().to_string(), network);
        assert_eq!(c.first_ip().to_string(), first);
        assert_eq!(c.last_ip().to_string(), last);
        assert_eq!(c.calculate_broadcast().to_string(), broadcast);
    }

    #[test]
    fn test_first_ip_is_network_plus_one_up_to_30() {
        for address in SAMPLE_ADDRESSES {
            for prefix_length in 1..=30 {
                let c = calc(address, prefix_length);
                assert_eq!(
                    u32::from(c.first_ip()),
                    u32::from(c.calculate_network()) + 1,
                    "{address}/{prefix_length}"
                );
                assert_eq!(
                    u32::from(c.last_ip()),
                    u32::from(c.calculate_broadcast()) - 1,
                    "{address}/{prefix_length}"
                );
            }
        }
    }

    #[test]
    fn test_slash_31() {
        let c = calc("172.16.5.1", 31);
        assert_eq!(c.calculate_network(), Ipv4Addr::new(172, 16, 5, 0));
        assert_eq!(c.calculate_broadcast(), Ipv4Addr::new(172, 16, 5, 1));
        assert_eq!(c.first_ip(), c.calculate_network());
        assert_eq!(c.last_ip(), c.calculate_broadcast());
        assert_eq!(c.hosts_in_network(), (2, 2));
    }

    #[test]
    fn test_slash_32() {
        let c = calc("172.16.5.1", 32);
        let addr = Ipv4Addr::new(172, 16, 5, 1);
        assert_eq!(c.calculate_network(), addr);
        assert_eq!(c.calculate_broadcast(), addr);
        assert_eq!(c.first_ip(), addr);
        assert_eq!(c.last_ip(), addr);
        assert_eq!(c.prefix_to_mask(), Ipv4Addr::new(255, 255, 255, 255));
        assert_eq!(c.calculate_wildcard(), Ipv4Addr::new(0, 0, 0, 0));
        assert_eq!(c.hosts_in_network(), (1, 1));
    }

    #[test]
    fn test_summary_192_168_1_10_24() {
        let s = calc("192.168.1.10", 24).summary();
        assert_eq!(s.network_id, Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(s.subnet_mask, Ipv4Addr::new(255, 255, 255, 0));
        assert_eq!(s.wildcard_mask, Ipv4Addr::new(0, 0, 0, 255));
        assert_eq!(s.broadcast_id, Ipv4Addr::new(192, 168, 1, 255));
        assert_eq!(s.first_ip, Ipv4Addr::new(192, 168, 1, 1));
        assert_eq!(s.last_ip, Ipv4Addr::new(192, 168, 1, 254));
        assert_eq!((s.total_ips, s.usable_ips), (256, 254));
        assert_eq!(s.network_class, NetworkClass::C);
    }

    #[test]
    fn test_identify_class() {
        assert_eq!(identify_class(10), NetworkClass::A);
        assert_eq!(identify_class(172), NetworkClass::B);
        assert_eq!(calc("230.1.2.3", 8).network_class(), NetworkClass::D);
        assert_eq!(calc("250.1.2.3", 8).network_class(), NetworkClass::E);
    }
}
