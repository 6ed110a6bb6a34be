//! Configuration types for the dnspair system
//!
//! Configuration is loaded externally (the CLI reads TOML) and handed to the
//! core as typed structs, validated once at load time. The core treats it as
//! read-only input.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Main dnspair configuration
///
/// The TOML shape mirrors the structs directly:
///
/// ```toml
/// [defaults]
/// ttl = 1
/// proxied = false
///
/// [zone."example.com"]
/// providers = ["cloudflare"]
///
/// [zone."2.0.192.in-addr.arpa"]
/// providers = ["cloudflare"]
///
/// [provider.cloudflare]
/// type = "cloudflare"
///
/// [provider.cloudflare.api]
/// email = "ops@example.com"
/// key = "..."
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairConfig {
    /// Defaults applied to every generated record
    #[serde(default)]
    pub defaults: RecordDefaults,

    /// Zone name -> owning providers
    #[serde(default)]
    pub zone: BTreeMap<String, ZoneConfig>,

    /// Provider name -> credentials/endpoint bundle
    #[serde(default)]
    pub provider: BTreeMap<String, ProviderConfig>,
}

impl PairConfig {
    /// Validate the configuration
    ///
    /// Checks zone/provider cross-references and per-provider credential
    /// sanity once, so routing and dispatch can rely on the maps being
    /// internally consistent.
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.zone.is_empty() {
            return Err(crate::Error::config("No zones configured"));
        }

        for (zone_name, zone) in &self.zone {
            if zone.providers.is_empty() {
                return Err(crate::Error::config(format!(
                    "Zone {} has no providers configured",
                    zone_name
                )));
            }
            for provider in &zone.providers {
                if !self.provider.contains_key(provider) {
                    return Err(crate::Error::unknown_provider(provider));
                }
            }
        }

        for (name, provider) in &self.provider {
            provider.validate(name)?;
        }

        Ok(())
    }
}

/// Zone ownership declaration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneConfig {
    /// Names of providers authoritative for this zone
    pub providers: Vec<String>,
}

/// Defaults applied to generated records that carry no explicit value
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RecordDefaults {
    /// Time-to-live in seconds; 1 means "automatic" on Cloudflare
    #[serde(default = "default_ttl")]
    pub ttl: u32,

    /// Whether records are created proxied
    #[serde(default)]
    pub proxied: bool,
}

impl Default for RecordDefaults {
    fn default() -> Self {
        Self {
            ttl: default_ttl(),
            proxied: false,
        }
    }
}

fn default_ttl() -> u32 {
    1
}

/// Provider credentials/endpoint bundle
///
/// A closed set of supported providers. Adding a provider means adding a
/// variant here and a gateway crate implementing it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProviderConfig {
    /// Cloudflare API v4
    Cloudflare {
        /// API endpoint and credentials
        api: CloudflareApi,
    },
}

impl ProviderConfig {
    /// Validate the provider configuration
    pub fn validate(&self, name: &str) -> Result<(), crate::Error> {
        match self {
            ProviderConfig::Cloudflare { api } => {
                if api.email.is_empty() {
                    return Err(crate::Error::config(format!(
                        "Provider {} is missing an API email",
                        name
                    )));
                }
                if api.key.is_empty() {
                    return Err(crate::Error::config(format!(
                        "Provider {} is missing an API key",
                        name
                    )));
                }
                Ok(())
            }
        }
    }

    /// Get the provider type name
    pub fn type_name(&self) -> &'static str {
        match self {
            ProviderConfig::Cloudflare { .. } => "cloudflare",
        }
    }
}

/// Cloudflare API endpoint and credentials
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloudflareApi {
    /// API base URL
    #[serde(default = "default_cloudflare_baseurl")]
    pub baseurl: String,

    /// Account email for X-Auth-Email
    pub email: String,

    /// API key for X-Auth-Key
    pub key: String,
}

fn default_cloudflare_baseurl() -> String {
    "https://api.cloudflare.com/client/v4/".to_string()
}
