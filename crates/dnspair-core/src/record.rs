//! Record descriptors produced by the synthesis layer
//!
//! A [`RecordDescriptor`] is the unit of work for the whole pipeline: the
//! synthesis builders create them, the router groups them by provider, and
//! gateways submit them one at a time. Descriptors are immutable once
//! constructed and carry no identity beyond their field values.

use serde::{Deserialize, Serialize};

/// DNS record type
///
/// Only the types the synthesis layer can produce. Anything else is out of
/// scope for this tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    /// A record (IPv4 forward)
    A,
    /// AAAA record (IPv6 forward)
    Aaaa,
    /// PTR record (reverse)
    Ptr,
}

impl RecordType {
    /// Wire name as provider APIs expect it
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::Aaaa => "AAAA",
            RecordType::Ptr => "PTR",
        }
    }
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A zone-qualified DNS record ready for submission
///
/// `zone` is the DNS zone expected to contain the record (a forward zone
/// like `example.com`, or a reverse zone like `2.0.192.in-addr.arpa`).
/// `name` is the owner name within that zone; for forward records it is the
/// full FQDN, for IPv4 PTRs the final octet, for IPv6 PTRs the nibble-label
/// sequence below the zone anchor. `content` is the RDATA value: an address
/// string for A/AAAA, a target hostname for PTR.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDescriptor {
    /// Zone the record belongs to
    pub zone: String,

    /// Record type
    #[serde(rename = "type")]
    pub rtype: RecordType,

    /// Record owner name
    pub name: String,

    /// Record content (RDATA)
    pub content: String,

    /// Time-to-live in seconds; `None` leaves the provider default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,

    /// Whether the record should be proxied (Cloudflare-specific knob)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxied: Option<bool>,
}

impl RecordDescriptor {
    /// Create a descriptor with no ttl/proxied overrides
    pub fn new(
        zone: impl Into<String>,
        rtype: RecordType,
        name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            zone: zone.into(),
            rtype,
            name: name.into(),
            content: content.into(),
            ttl: None,
            proxied: None,
        }
    }

    /// Fill unset ttl/proxied fields from configured defaults
    pub fn with_defaults(mut self, ttl: u32, proxied: bool) -> Self {
        self.ttl.get_or_insert(ttl);
        self.proxied.get_or_insert(proxied);
        self
    }
}
