// # dnspair-core
//
// Core library for paired forward/reverse DNS record automation.
//
// ## Architecture Overview
//
// This library turns minimal operator input (a hostname plus addresses,
// or a tenant prefix assignment) into zone-qualified record descriptors
// and drives them through provider gateways:
//
// - **synth**: pure record synthesis — FQDN decomposition, forward A/AAAA
//   builders, reverse PTR builders (classless IPv4 and nibble-delegated
//   IPv6), and bulk tenant generation
// - **router**: zone -> provider routing with whole-batch validation
// - **engine**: `PairEngine`, the synthesize -> route -> dispatch ->
//   aggregate pipeline
// - **RecordGateway**: trait for per-record submission to a provider API
// - **ZoneIdCache**: trait for the caller-owned zone-identifier cache,
//   with memory and file implementations
//
// ## Design Principles
//
// 1. Synthesis and routing are pure and validated as a unit; a batch
//    aborts before the first network call or not at all
// 2. Gateway failures are per-record data, not exceptions
// 3. Providers form a closed set of configuration variants; gateways and
//    caches are injected, never global

pub mod cache;
pub mod config;
pub mod engine;
pub mod error;
pub mod record;
pub mod report;
pub mod router;
pub mod synth;
pub mod traits;

// Re-export core types for convenience
pub use cache::{FileZoneCache, MemoryZoneCache};
pub use config::{CloudflareApi, PairConfig, ProviderConfig, RecordDefaults, ZoneConfig};
pub use engine::PairEngine;
pub use error::{Error, Result};
pub use record::{RecordDescriptor, RecordType};
pub use report::{OperationResult, OutcomeStatus, Report};
pub use router::{ProviderBatch, ZoneRouter};
pub use synth::{HostInput, HostParts, TenantInput};
pub use traits::{RecordGateway, ZoneIdCache};
