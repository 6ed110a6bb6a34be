//! Bulk PTR generation for tenant/customer prefix assignments
//!
//! IPv4 has no wildcard mechanism below the /24 octet boundary, so a
//! tenant block finer than /24 gets one explicit PTR per address. IPv6
//! delegates per nibble, so a whole tenant block collapses into a single
//! wildcard PTR.

use crate::error::{Error, Result};
use crate::record::RecordDescriptor;
use crate::synth::{parse_v4_prefix, parse_v6_prefix, reverse};

/// Input for the tenant operation: prefix assignments and PTR targets
#[derive(Debug, Clone, Default)]
pub struct TenantInput {
    /// Tenant identifier prepended to the IPv4 PTR target, if any
    pub tenant_id: Option<String>,
    /// IPv4 prefix assignment (finer than /24)
    pub prefix4: Option<String>,
    /// IPv6 prefix assignment (nibble-aligned, /32../56, or /128)
    pub prefix6: Option<String>,
    /// PTR target hostname for the IPv4 block
    pub target4: Option<String>,
    /// PTR target hostname for the IPv6 block
    pub target6: Option<String>,
}

/// Generate the PTR record set for a tenant prefix assignment
///
/// Target resolution: the per-family target wins; if only one target is
/// supplied it serves both families; with neither the call fails with
/// `MissingTarget`. At least one prefix is required.
pub fn tenant_records(input: &TenantInput) -> Result<Vec<RecordDescriptor>> {
    if input.prefix4.is_none() && input.prefix6.is_none() {
        return Err(Error::invalid_input("At least one prefix is required"));
    }

    let target4 = input.target4.as_deref().or(input.target6.as_deref());
    let target6 = input.target6.as_deref().or(input.target4.as_deref());

    let mut records = Vec::new();

    if let Some(prefix) = &input.prefix4 {
        let target = target4.ok_or(Error::MissingTarget)?;
        let target = match &input.tenant_id {
            Some(id) => format!("{}.{}", id, target),
            None => target.to_string(),
        };

        let net = parse_v4_prefix(prefix)?;
        if net.prefix() <= 24 {
            return Err(Error::UnsupportedPrefixLength(net.prefix()));
        }
        for addr in net.iter() {
            records.push(reverse::reverse_v4(&target, addr));
        }
    }

    if let Some(prefix) = &input.prefix6 {
        let target = target6.ok_or(Error::MissingTarget)?;
        let net = parse_v6_prefix(prefix)?;
        records.push(reverse::reverse_v6_prefix(target, net)?);
    }

    if records.is_empty() {
        return Err(Error::NoRecordsGenerated);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> TenantInput {
        TenantInput {
            tenant_id: None,
            prefix4: Some("192.0.2.0/28".to_string()),
            prefix6: None,
            target4: Some("ptr.example.com".to_string()),
            target6: None,
        }
    }

    #[test]
    fn v4_block_enumerates_every_address() {
        let records = tenant_records(&base()).unwrap();
        assert_eq!(records.len(), 16);
        for (i, rec) in records.iter().enumerate() {
            assert_eq!(rec.zone, "2.0.192.in-addr.arpa");
            assert_eq!(rec.name, i.to_string());
            assert_eq!(rec.content, "ptr.example.com");
        }
    }

    #[test]
    fn tenant_id_prefixes_the_v4_target() {
        let mut input = base();
        input.tenant_id = Some("crm-1042".to_string());
        let records = tenant_records(&input).unwrap();
        assert!(records.iter().all(|r| r.content == "crm-1042.ptr.example.com"));
    }

    #[test]
    fn v4_block_at_or_above_the_octet_boundary_is_rejected() {
        for prefix in ["192.0.2.0/24", "192.0.0.0/20"] {
            let mut input = base();
            input.prefix4 = Some(prefix.to_string());
            assert!(matches!(
                tenant_records(&input),
                Err(Error::UnsupportedPrefixLength(_))
            ));
        }
    }

    #[test]
    fn v6_block_collapses_into_one_wildcard() {
        let input = TenantInput {
            prefix6: Some("2001:db8:1::/48".to_string()),
            target6: Some("ptr6.example.com".to_string()),
            ..Default::default()
        };
        let records = tenant_records(&input).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].zone, "8.b.d.0.1.0.0.2.ip6.arpa");
        assert_eq!(records[0].name, "*.1.0.0.0");
        assert_eq!(records[0].content, "ptr6.example.com");
    }

    #[test]
    fn single_target_serves_both_families() {
        let input = TenantInput {
            prefix4: Some("192.0.2.0/30".to_string()),
            prefix6: Some("2001:db8::/32".to_string()),
            target4: Some("ptr.example.com".to_string()),
            ..Default::default()
        };
        let records = tenant_records(&input).unwrap();
        assert_eq!(records.len(), 5);
        assert!(records.iter().all(|r| r.content == "ptr.example.com"));
    }

    #[test]
    fn explicit_per_family_targets_win() {
        let input = TenantInput {
            prefix4: Some("192.0.2.0/31".to_string()),
            prefix6: Some("2001:db8::/32".to_string()),
            target4: Some("ptr4.example.com".to_string()),
            target6: Some("ptr6.example.com".to_string()),
            ..Default::default()
        };
        let records = tenant_records(&input).unwrap();
        assert_eq!(records[0].content, "ptr4.example.com");
        assert_eq!(records[2].content, "ptr6.example.com");
    }

    #[test]
    fn no_prefix_is_invalid_input() {
        let input = TenantInput {
            target4: Some("ptr.example.com".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            tenant_records(&input),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn no_target_is_missing_target() {
        let input = TenantInput {
            prefix4: Some("192.0.2.0/28".to_string()),
            ..Default::default()
        };
        assert!(matches!(tenant_records(&input), Err(Error::MissingTarget)));
    }

    #[test]
    fn misaligned_v6_prefix_propagates() {
        let input = TenantInput {
            prefix6: Some("2001:db8::/33".to_string()),
            target6: Some("ptr6.example.com".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            tenant_records(&input),
            Err(Error::UnsupportedPrefixLength(33))
        ));
    }
}
