//! Core traits for the dnspair system
//!
//! This module defines the seams between the synthesis/routing core and
//! the outside world.
//!
//! - [`RecordGateway`]: Submit one record to one provider API
//! - [`ZoneIdCache`]: Caller-owned cache of provider zone identifiers

pub mod record_gateway;
pub mod zone_cache;

pub use record_gateway::RecordGateway;
pub use zone_cache::ZoneIdCache;
