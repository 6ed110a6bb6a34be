//! Error types for record synthesis, routing, and dispatch
//!
//! Synthesis and routing errors abort a batch before any provider call is
//! made. Per-record provider failures are not errors at all; they surface
//! as `Failure` entries in the report (see [`crate::report`]).

use thiserror::Error;

/// Result type alias for dnspair operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the dnspair system
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or unusable operator input (no address, too few labels, ...)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Malformed IP address or prefix literal
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Prefix length unusable for reverse delegation
    #[error(
        "Unsupported prefix length /{0}: IPv6 reverse delegation requires \
         a nibble-aligned length in 32..=56 (or 128 for a single host), \
         IPv4 requires a length in 25..=32"
    )]
    UnsupportedPrefixLength(u8),

    /// No PTR target hostname could be resolved for a tenant operation
    #[error("No PTR target hostname was supplied")]
    MissingTarget,

    /// Bulk generation finished without producing a single record
    #[error("No records were generated")]
    NoRecordsGenerated,

    /// A generated record targets a zone absent from configuration
    #[error("Zone {0} is not defined in configuration")]
    UnknownZone(String),

    /// A zone names a provider with no configured gateway
    #[error("Provider {0} is not defined in configuration")]
    UnknownProvider(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Zone-ID cache errors
    #[error("Zone cache error: {0}")]
    Cache(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create an invalid address error
    pub fn invalid_address(addr: impl Into<String>) -> Self {
        Self::InvalidAddress(addr.into())
    }

    /// Create an unknown zone error
    pub fn unknown_zone(zone: impl Into<String>) -> Self {
        Self::UnknownZone(zone.into())
    }

    /// Create an unknown provider error
    pub fn unknown_provider(provider: impl Into<String>) -> Self {
        Self::UnknownProvider(provider.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a zone cache error
    pub fn cache(msg: impl Into<String>) -> Self {
        Self::Cache(msg.into())
    }
}

/// Helper for converting anyhow::Error to our Error type
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err.to_string())
    }
}
