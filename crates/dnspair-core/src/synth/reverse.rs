//! Reverse (PTR) record builders
//!
//! The zone computation here is the part that silently breaks things when
//! it is wrong: a record built for the wrong reverse zone is routed to the
//! wrong provider zone and nothing complains until resolution fails.
//!
//! IPv4: reverse delegation happens at octet boundaries, so the zone is
//! always the /24 covering the address (`5` in `2.0.192.in-addr.arpa` for
//! `192.0.2.5`), no matter what prefix the operator supplied. Blocks finer
//! than /24 are handled by enumerating hosts (see [`super::tenant`]),
//! which is the RFC 2317 situation without the CNAME indirection.
//!
//! IPv6: the reverse tree is delegated per nibble. The zone is anchored at
//! the /32 boundary (the last 10 labels: 8 nibbles + `ip6.arpa`); the
//! labels between a finer prefix and that anchor go into the record name,
//! topped with a `*` label so one wildcard PTR covers the whole sub-block.

use std::net::{Ipv4Addr, Ipv6Addr};

use ipnetwork::Ipv6Network;

use crate::error::{Error, Result};
use crate::record::{RecordDescriptor, RecordType};

/// Root label of the IPv4 reverse tree
pub const V4_REVERSE_SUFFIX: &str = "in-addr.arpa";

/// Root label of the IPv6 reverse tree
pub const V6_REVERSE_SUFFIX: &str = "ip6.arpa";

/// Nibble labels kept in the zone: 8 nibbles = the /32 delegation anchor
const V6_ZONE_NIBBLES: usize = 8;

/// Total nibble labels in a full IPv6 reverse name
const V6_TOTAL_NIBBLES: usize = 32;

/// True for prefix lengths where the delegation boundary falls exactly on
/// a reverse-zone label: {32, 36, 40, 44, 48, 52, 56}
pub fn is_nibble_delegation(prefix_len: u8) -> bool {
    (32..=56).contains(&prefix_len) && prefix_len % 4 == 0
}

/// Build the PTR record for a single IPv4 address
///
/// The zone is the reverse zone of the covering /24; the name is the final
/// octet in decimal.
pub fn reverse_v4(target: &str, addr: Ipv4Addr) -> RecordDescriptor {
    let o = addr.octets();
    let zone = format!("{}.{}.{}.{}", o[2], o[1], o[0], V4_REVERSE_SUFFIX);
    RecordDescriptor::new(zone, RecordType::Ptr, o[3].to_string(), target)
}

/// Build the PTR record for a single IPv6 address
///
/// The zone is the /32 anchor (last 10 labels); the name is the remaining
/// 24 nibble labels.
pub fn reverse_v6_host(target: &str, addr: Ipv6Addr) -> RecordDescriptor {
    let labels = reverse_nibbles(addr);
    RecordDescriptor::new(
        v6_zone(&labels),
        RecordType::Ptr,
        labels[..V6_TOTAL_NIBBLES - V6_ZONE_NIBBLES].join("."),
        target,
    )
}

/// Build the PTR record for an IPv6 prefix
///
/// A /128 degrades to a single-host PTR. A nibble-aligned block in
/// /32../56 yields one wildcard PTR whose name is `*` followed by the
/// nibble labels between the prefix boundary and the /32 zone anchor
/// (just `*` for a /32 itself). Any other length is rejected.
pub fn reverse_v6_prefix(target: &str, net: Ipv6Network) -> Result<RecordDescriptor> {
    let prefix_len = net.prefix();
    if prefix_len == 128 {
        return Ok(reverse_v6_host(target, net.network()));
    }
    if !is_nibble_delegation(prefix_len) {
        return Err(Error::UnsupportedPrefixLength(prefix_len));
    }

    let labels = reverse_nibbles(net.network());
    // First delegated label, counting from the least significant end
    let start = V6_TOTAL_NIBBLES - usize::from(prefix_len) / 4;
    let mut name_labels = vec!["*"];
    name_labels.extend(
        labels[start..V6_TOTAL_NIBBLES - V6_ZONE_NIBBLES]
            .iter()
            .map(String::as_str),
    );

    Ok(RecordDescriptor::new(
        v6_zone(&labels),
        RecordType::Ptr,
        name_labels.join("."),
        target,
    ))
}

/// Expand an address into its 32 reverse nibble labels, least significant
/// nibble first (the order they appear in a reverse name)
fn reverse_nibbles(addr: Ipv6Addr) -> Vec<String> {
    let bits = u128::from_be_bytes(addr.octets());
    (0..V6_TOTAL_NIBBLES)
        .map(|i| format!("{:x}", (bits >> (4 * i)) & 0xf))
        .collect()
}

fn v6_zone(labels: &[String]) -> String {
    format!(
        "{}.{}",
        labels[V6_TOTAL_NIBBLES - V6_ZONE_NIBBLES..].join("."),
        V6_REVERSE_SUFFIX
    )
}
