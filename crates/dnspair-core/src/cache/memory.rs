// # Memory Zone Cache
//
// In-memory implementation of ZoneIdCache.
//
// Entries live for the lifetime of the process only; every new invocation
// pays the zone-lookup round trip once per zone. Useful for tests and for
// environments where writing cache files is unwanted.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::error::Result;
use crate::traits::ZoneIdCache;

/// In-memory zone-ID cache
#[derive(Debug, Default)]
pub struct MemoryZoneCache {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryZoneCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ZoneIdCache for MemoryZoneCache {
    async fn get(&self, zone: &str) -> Option<String> {
        let entries = self.entries.read().await;
        entries.get(zone).cloned()
    }

    async fn put(&self, zone: &str, id: &str) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.insert(zone.to_string(), id.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_returns_what_put_stored() {
        let cache = MemoryZoneCache::new();
        assert_eq!(cache.get("example.com").await, None);

        cache.put("example.com", "023e105f4ecef8ad9ca31a8372d0c353").await.unwrap();
        assert_eq!(
            cache.get("example.com").await.as_deref(),
            Some("023e105f4ecef8ad9ca31a8372d0c353")
        );
    }

    #[tokio::test]
    async fn put_overwrites_existing_entry() {
        let cache = MemoryZoneCache::new();
        cache.put("example.com", "old").await.unwrap();
        cache.put("example.com", "new").await.unwrap();
        assert_eq!(cache.get("example.com").await.as_deref(), Some("new"));
    }
}
