//! FQDN decomposition into host and parent domain

use crate::error::{Error, Result};

/// An FQDN split into its host prefix and parent domain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostParts {
    /// The hostname as given (minus any trailing root dot)
    pub fqdn: String,
    /// The last two labels joined: the zone the forward record lands in
    pub domain: String,
    /// Everything before the domain; empty for a bare two-label name
    pub host: String,
}

/// Split a hostname into host and domain parts
///
/// The last two labels form the domain; whatever precedes them is the host
/// prefix, which may span any number of labels (`a.b.example.com` yields
/// host `a.b`). Single-label names are rejected since no domain can be
/// derived from them.
pub fn split_fqdn(hostname: &str) -> Result<HostParts> {
    let hostname = hostname.strip_suffix('.').unwrap_or(hostname);
    if hostname.is_empty() {
        return Err(Error::invalid_input("A hostname is required"));
    }

    let labels: Vec<&str> = hostname.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|l| l.is_empty()) {
        return Err(Error::invalid_input(format!(
            "Hostname {} has no derivable domain",
            hostname
        )));
    }

    let split = labels.len() - 2;
    Ok(HostParts {
        fqdn: hostname.to_string(),
        domain: labels[split..].join("."),
        host: labels[..split].join("."),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_three_label_name() {
        let parts = split_fqdn("host1.example.com").unwrap();
        assert_eq!(parts.fqdn, "host1.example.com");
        assert_eq!(parts.domain, "example.com");
        assert_eq!(parts.host, "host1");
    }

    #[test]
    fn deep_subdomains_keep_full_host_prefix() {
        let parts = split_fqdn("a.b.example.com").unwrap();
        assert_eq!(parts.domain, "example.com");
        assert_eq!(parts.host, "a.b");
    }

    #[test]
    fn two_label_name_has_empty_host() {
        let parts = split_fqdn("example.com").unwrap();
        assert_eq!(parts.domain, "example.com");
        assert_eq!(parts.host, "");
    }

    #[test]
    fn trailing_root_dot_is_tolerated() {
        let parts = split_fqdn("host1.example.com.").unwrap();
        assert_eq!(parts.fqdn, "host1.example.com");
        assert_eq!(parts.domain, "example.com");
    }

    #[test]
    fn single_label_is_rejected() {
        assert!(matches!(
            split_fqdn("localhost"),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn empty_hostname_is_rejected() {
        assert!(matches!(split_fqdn(""), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn empty_labels_are_rejected() {
        assert!(matches!(
            split_fqdn("host..example.com"),
            Err(Error::InvalidInput(_))
        ));
    }
}
