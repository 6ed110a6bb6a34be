// # File Zone Cache
//
// File-backed implementation of ZoneIdCache.
//
// Persists resolved zone identifiers across invocations in a small JSON
// file, so a CLI run only pays the zone-lookup round trip for zones it
// has never seen. Writes are atomic (write to a temp file, then rename).
//
// Zone identifiers are re-fetchable, so corruption handling is simple: a
// file that fails to parse is logged and treated as empty. No backups.
//
// ## File Format
//
// ```json
// {
//   "version": "1.0",
//   "zones": {
//     "example.com": "023e105f4ecef8ad9ca31a8372d0c353"
//   }
// }
// ```

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;

use crate::Error;
use crate::error::Result;
use crate::traits::ZoneIdCache;

/// Cache file format version
const CACHE_FILE_VERSION: &str = "1.0";

/// File-backed zone-ID cache
#[derive(Debug)]
pub struct FileZoneCache {
    path: PathBuf,
    zones: RwLock<HashMap<String, String>>,
}

/// Serializable cache file format
#[derive(Debug, serde::Serialize, serde::Deserialize)]
struct CacheFileFormat {
    version: String,
    zones: HashMap<String, String>,
}

impl FileZoneCache {
    /// Create or load a file zone cache
    ///
    /// Creates parent directories if needed. A missing file starts the
    /// cache empty; an unparsable file is discarded with a warning.
    pub async fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).await.map_err(|e| {
                    Error::cache(format!(
                        "Failed to create cache directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let zones = Self::load(&path).await?;
        Ok(Self {
            path,
            zones: RwLock::new(zones),
        })
    }

    async fn load(path: &Path) -> Result<HashMap<String, String>> {
        if !path.exists() {
            tracing::debug!("Zone cache file does not exist: {}", path.display());
            return Ok(HashMap::new());
        }

        let content = fs::read_to_string(path).await.map_err(|e| {
            Error::cache(format!(
                "Failed to read cache file {}: {}",
                path.display(),
                e
            ))
        })?;

        match serde_json::from_str::<CacheFileFormat>(&content) {
            Ok(cache_file) => {
                if cache_file.version != CACHE_FILE_VERSION {
                    tracing::warn!(
                        "Zone cache version mismatch: expected {}, got {}. Loading anyway.",
                        CACHE_FILE_VERSION,
                        cache_file.version
                    );
                }
                tracing::debug!("Loaded zone cache: {} entries", cache_file.zones.len());
                Ok(cache_file.zones)
            }
            Err(e) => {
                tracing::warn!(
                    "Zone cache file {} is unparsable ({}); starting empty",
                    path.display(),
                    e
                );
                Ok(HashMap::new())
            }
        }
    }

    /// Write the cache to disk atomically
    async fn write(&self) -> Result<()> {
        let zones = self.zones.read().await;
        let cache_file = CacheFileFormat {
            version: CACHE_FILE_VERSION.to_string(),
            zones: zones.clone(),
        };
        drop(zones);

        let json = serde_json::to_string_pretty(&cache_file)?;

        let temp_path = self.temp_path();
        {
            let mut file = fs::File::create(&temp_path).await.map_err(|e| {
                Error::cache(format!(
                    "Failed to create temp file {}: {}",
                    temp_path.display(),
                    e
                ))
            })?;
            file.write_all(json.as_bytes()).await.map_err(|e| {
                Error::cache(format!(
                    "Failed to write temp file {}: {}",
                    temp_path.display(),
                    e
                ))
            })?;
            file.flush().await.map_err(|e| {
                Error::cache(format!(
                    "Failed to flush temp file {}: {}",
                    temp_path.display(),
                    e
                ))
            })?;
        }

        fs::rename(&temp_path, &self.path).await.map_err(|e| {
            Error::cache(format!(
                "Failed to rename {} to {}: {}",
                temp_path.display(),
                self.path.display(),
                e
            ))
        })?;

        tracing::trace!("Zone cache written to {}", self.path.display());
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut temp = self.path.clone();
        temp.set_extension("tmp");
        temp
    }
}

#[async_trait]
impl ZoneIdCache for FileZoneCache {
    async fn get(&self, zone: &str) -> Option<String> {
        let zones = self.zones.read().await;
        zones.get(zone).cloned()
    }

    async fn put(&self, zone: &str, id: &str) -> Result<()> {
        {
            let mut zones = self.zones.write().await;
            zones.insert(zone.to_string(), id.to_string());
        }
        self.write().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn entries_persist_across_instances() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("zones.json");

        let cache = FileZoneCache::new(&path).await.unwrap();
        assert_eq!(cache.get("example.com").await, None);

        cache.put("example.com", "zone-id-1").await.unwrap();
        assert!(path.exists());

        let cache2 = FileZoneCache::new(&path).await.unwrap();
        assert_eq!(cache2.get("example.com").await.as_deref(), Some("zone-id-1"));
    }

    #[tokio::test]
    async fn unparsable_file_starts_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("zones.json");
        fs::write(&path, b"not json at all").await.unwrap();

        let cache = FileZoneCache::new(&path).await.unwrap();
        assert_eq!(cache.get("example.com").await, None);

        // And the next put makes the file valid again
        cache.put("example.com", "zone-id-1").await.unwrap();
        let cache2 = FileZoneCache::new(&path).await.unwrap();
        assert_eq!(cache2.get("example.com").await.as_deref(), Some("zone-id-1"));
    }

    #[tokio::test]
    async fn parent_directories_are_created() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("zones.json");

        let cache = FileZoneCache::new(&path).await.unwrap();
        cache.put("example.com", "zone-id-1").await.unwrap();
        assert!(path.exists());
    }
}
