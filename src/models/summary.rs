//! Result of a subnet calculation.

use super::{Ipv4, NetworkClass};
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// The plain tuple form of a [`SubnetSummary`]:
/// (network_id, first_ip, last_ip, broadcast_id, total_ips, usable_ips,
/// subnet_mask, wildcard_mask, network_class).
pub type SummaryTuple = (
    String,
    String,
    String,
    String,
    u64,
    u64,
    String,
    String,
    String,
);

/// Every derived fact about one address/prefix pair.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetSummary {
    /// The input the summary was derived from.
    pub cidr: Ipv4,
    /// Address with all host bits cleared.
    pub network_id: Ipv4Addr,
    /// First usable host.
    pub first_ip: Ipv4Addr,
    /// Last usable host.
    pub last_ip: Ipv4Addr,
    /// Address with all host bits set.
    pub broadcast_id: Ipv4Addr,
    /// 2^(32 - prefix).
    pub total_ips: u64,
    /// Assignable addresses, all of them for /31 and /32.
    pub usable_ips: u64,
    pub subnet_mask: Ipv4Addr,
    pub wildcard_mask: Ipv4Addr,
    pub network_class: NetworkClass,
}

impl SubnetSummary {
    /// Flatten into the 9-tuple with dotted-decimal strings.
    pub fn into_tuple(self) -> SummaryTuple {
        (
            self.network_id.to_string(),
            self.first_ip.to_string(),
            self.last_ip.to_string(),
            self.broadcast_id.to_string(),
            self.total_ips,
            self.usable_ips,
            self.subnet_mask.to_string(),
            self.wildcard_mask.to_string(),
            self.network_class.to_string(),
        )
    }
}
