// # Zone-ID Cache Trait
//
// Provider APIs address zones by opaque identifiers, not names, and the
// name -> identifier lookup costs a round trip. The cache saves that trip
// across invocations.
//
// The cache is owned by the caller and injected into gateways; nothing in
// the core reaches for a process-wide store. The core assumes nothing
// about freshness: entries never expire, a stale-but-valid hit is served
// silently, and a failed `put` only costs a refetch next time.
//
// ## Implementations
//
// - [`crate::cache::MemoryZoneCache`]: per-process, for tests and one-shot use
// - [`crate::cache::FileZoneCache`]: JSON file, persists across invocations

use async_trait::async_trait;

use crate::error::Result;

/// Trait for zone-identifier cache implementations
#[async_trait]
pub trait ZoneIdCache: Send + Sync {
    /// Look up the cached identifier for a zone name
    async fn get(&self, zone: &str) -> Option<String>;

    /// Store a freshly resolved identifier for reuse
    ///
    /// Errors are storage errors only; callers are expected to treat them
    /// as non-fatal and carry on with the resolved identifier.
    async fn put(&self, zone: &str, id: &str) -> Result<()>;
}
