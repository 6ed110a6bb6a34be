//! Record synthesis: operator input -> zone-qualified record descriptors
//!
//! Everything in this module is pure and synchronous. The builders encode
//! the delegation conventions that make reverse DNS fiddly:
//!
//! - IPv4 reverse zones sit at the /24 octet boundary, so a PTR for any
//!   address lands in the zone of its covering /24 (`hostname` of the
//!   record is the final octet).
//! - IPv6 reverse zones are anchored at the /32 nibble boundary; finer
//!   delegation is pushed into the record name, as a nibble-label path or
//!   a wildcard label for whole sub-blocks.
//!
//! See [`forward`], [`reverse`], and [`tenant`] for the individual
//! builders, and [`host_records`] for the composite host operation.

pub mod forward;
pub mod hostname;
pub mod reverse;
pub mod tenant;

pub use hostname::{HostParts, split_fqdn};
pub use tenant::{TenantInput, tenant_records};

use std::net::{Ipv4Addr, Ipv6Addr};

use ipnetwork::{Ipv4Network, Ipv6Network};

use crate::error::{Error, Result};
use crate::record::RecordDescriptor;

/// Input for the host operation: one FQDN plus its addresses
#[derive(Debug, Clone, Default)]
pub struct HostInput {
    /// Fully qualified hostname the records describe
    pub fqdn: String,
    /// IPv4 address literal, if any
    pub ipv4: Option<String>,
    /// IPv6 address literal, if any
    pub ipv6: Option<String>,
}

/// Build the full record set for a host: forward A/AAAA plus reverse PTRs
///
/// Produces up to four descriptors, in a stable order: A, v4 PTR, AAAA,
/// v6 PTR. At least one address is required.
pub fn host_records(input: &HostInput) -> Result<Vec<RecordDescriptor>> {
    if input.ipv4.is_none() && input.ipv6.is_none() {
        return Err(Error::invalid_input("At least one IP address is required"));
    }

    let parts = split_fqdn(&input.fqdn)?;
    let mut records = Vec::new();

    if let Some(v4) = &input.ipv4 {
        let addr = parse_v4_addr(v4)?;
        records.push(forward::forward_v4(&parts.domain, &parts.fqdn, addr));
        records.push(reverse::reverse_v4(&parts.fqdn, addr));
    }

    if let Some(v6) = &input.ipv6 {
        let addr = parse_v6_addr(v6)?;
        records.push(forward::forward_v6(&parts.domain, &parts.fqdn, addr));
        records.push(reverse::reverse_v6_host(&parts.fqdn, addr));
    }

    Ok(records)
}

pub(crate) fn parse_v4_addr(s: &str) -> Result<Ipv4Addr> {
    s.trim().parse().map_err(|_| Error::invalid_address(s))
}

pub(crate) fn parse_v6_addr(s: &str) -> Result<Ipv6Addr> {
    s.trim().parse().map_err(|_| Error::invalid_address(s))
}

pub(crate) fn parse_v4_prefix(s: &str) -> Result<Ipv4Network> {
    s.trim().parse().map_err(|_| Error::invalid_address(s))
}

pub(crate) fn parse_v6_prefix(s: &str) -> Result<Ipv6Network> {
    s.trim().parse().map_err(|_| Error::invalid_address(s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RecordType;

    #[test]
    fn host_records_round_trip_v4() {
        let input = HostInput {
            fqdn: "host1.example.com".to_string(),
            ipv4: Some("192.0.2.5".to_string()),
            ipv6: None,
        };
        let records = host_records(&input).unwrap();
        assert_eq!(records.len(), 2);

        assert_eq!(records[0].zone, "example.com");
        assert_eq!(records[0].rtype, RecordType::A);
        assert_eq!(records[0].name, "host1.example.com");
        assert_eq!(records[0].content, "192.0.2.5");

        assert_eq!(records[1].zone, "2.0.192.in-addr.arpa");
        assert_eq!(records[1].rtype, RecordType::Ptr);
        assert_eq!(records[1].name, "5");
        assert_eq!(records[1].content, "host1.example.com");
    }

    #[test]
    fn host_records_round_trip_v6() {
        let input = HostInput {
            fqdn: "host1.example.com".to_string(),
            ipv4: None,
            ipv6: Some("2001:db8::1".to_string()),
        };
        let records = host_records(&input).unwrap();
        assert_eq!(records.len(), 2);

        assert_eq!(records[0].rtype, RecordType::Aaaa);
        assert_eq!(records[0].zone, "example.com");
        assert_eq!(records[0].content, "2001:db8::1");

        assert_eq!(records[1].rtype, RecordType::Ptr);
        assert_eq!(records[1].zone, "8.b.d.0.1.0.0.2.ip6.arpa");
        assert_eq!(
            records[1].name,
            "1.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0"
        );
        assert_eq!(records[1].content, "host1.example.com");
    }

    #[test]
    fn dual_stack_host_produces_four_records_in_order() {
        let input = HostInput {
            fqdn: "host1.example.com".to_string(),
            ipv4: Some("192.0.2.5".to_string()),
            ipv6: Some("2001:db8::1".to_string()),
        };
        let records = host_records(&input).unwrap();
        let types: Vec<RecordType> = records.iter().map(|r| r.rtype).collect();
        assert_eq!(
            types,
            vec![
                RecordType::A,
                RecordType::Ptr,
                RecordType::Aaaa,
                RecordType::Ptr
            ]
        );
    }

    #[test]
    fn host_without_addresses_is_invalid_input() {
        let input = HostInput {
            fqdn: "host1.example.com".to_string(),
            ipv4: None,
            ipv6: None,
        };
        assert!(matches!(
            host_records(&input),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn malformed_address_is_rejected_with_the_offending_value() {
        let input = HostInput {
            fqdn: "host1.example.com".to_string(),
            ipv4: Some("192.0.2.300".to_string()),
            ipv6: None,
        };
        match host_records(&input) {
            Err(Error::InvalidAddress(addr)) => assert_eq!(addr, "192.0.2.300"),
            other => panic!("expected InvalidAddress, got {:?}", other),
        }
    }
}
