//! Forward (A/AAAA) record builders

use std::net::{Ipv4Addr, Ipv6Addr};

use crate::record::{RecordDescriptor, RecordType};

/// Build an A record: `fqdn -> addr` in the zone `domain`
pub fn forward_v4(domain: &str, fqdn: &str, addr: Ipv4Addr) -> RecordDescriptor {
    RecordDescriptor::new(domain, RecordType::A, fqdn, addr.to_string())
}

/// Build an AAAA record: `fqdn -> addr` in the zone `domain`
///
/// The content is the canonical (compressed) textual form of the address,
/// whatever form the operator typed it in.
pub fn forward_v6(domain: &str, fqdn: &str, addr: Ipv6Addr) -> RecordDescriptor {
    RecordDescriptor::new(domain, RecordType::Aaaa, fqdn, addr.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_record_fields() {
        let rec = forward_v4("example.com", "host1.example.com", "192.0.2.5".parse().unwrap());
        assert_eq!(rec.zone, "example.com");
        assert_eq!(rec.rtype, RecordType::A);
        assert_eq!(rec.name, "host1.example.com");
        assert_eq!(rec.content, "192.0.2.5");
        assert_eq!(rec.ttl, None);
    }

    #[test]
    fn aaaa_content_is_canonicalized() {
        let addr: Ipv6Addr = "2001:0db8:0000:0000:0000:0000:0000:0001".parse().unwrap();
        let rec = forward_v6("example.com", "host1.example.com", addr);
        assert_eq!(rec.rtype, RecordType::Aaaa);
        assert_eq!(rec.content, "2001:db8::1");
    }
}
