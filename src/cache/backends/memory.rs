use moka::sync::Cache;
use std::time::Duration;
use tracing::debug;

use crate::cache::{AssetCache, CacheResult, CachedAsset};
use crate::config::CacheConfig;

/// In-process cache backed by moka, bounded by `memory.max_capacity`.
/// Entries live until flushed unless `default_ttl` is set.
pub struct MemoryAssetCache {
    inner: Cache<String, CachedAsset>,
}

impl Default for MemoryAssetCache {
    fn default() -> Self {
        Self::from_config(&CacheConfig::default())
    }
}

impl MemoryAssetCache {
    pub fn from_config(config: &CacheConfig) -> Self {
        let mut builder = Cache::builder().max_capacity(config.memory.max_capacity);
        if let Some(ttl) = config.default_ttl {
            builder = builder.time_to_live(Duration::from_secs(ttl));
        }
        let inner = builder.build();

        debug!(
            "MemoryAssetCache initialized with max capacity: {}, default TTL: {:?}",
            config.memory.max_capacity, config.default_ttl
        );
        Self { inner }
    }
}

impl AssetCache for MemoryAssetCache {
    fn get(&self, key: &str) -> CacheResult {
        match self.inner.get(key) {
            Some(value) => CacheResult::Hit(value),
            None => CacheResult::Miss,
        }
    }

    fn set(&self, key: &str, value: CachedAsset) {
        self.inner.insert(key.to_string(), value);
    }

    fn clear(&self) {
        self.inner.invalidate_all();
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::Manifest;
    use std::sync::Arc;

    #[test]
    fn test_get_after_set() {
        let cache = MemoryAssetCache::default();
        cache.set(".app.js", CachedAsset::entry("/app.js", Some("/app.abc.js".to_string())));

        assert_eq!(
            cache.get(".app.js"),
            CacheResult::Hit(CachedAsset::entry("/app.js", Some("/app.abc.js".to_string())))
        );
        assert_eq!(cache.get("missing"), CacheResult::Miss);
    }

    #[test]
    fn test_known_absent_entry_is_a_hit() {
        let cache = MemoryAssetCache::default();
        cache.set("gone.css", CachedAsset::entry("gone.css", None));
        assert_eq!(
            cache.get("gone.css"),
            CacheResult::Hit(CachedAsset::entry("gone.css", None))
        );
    }

    #[test]
    fn test_entries_do_not_expire_by_default() {
        assert_eq!(CacheConfig::default().default_ttl, None);
        let cache = MemoryAssetCache::default();
        cache.set("app.js", CachedAsset::entry("app.js", Some("app.1.js".to_string())));
        std::thread::sleep(Duration::from_millis(50));
        assert!(matches!(cache.get("app.js"), CacheResult::Hit(_)));
    }

    #[test]
    fn test_configured_ttl_expires_entries() {
        let config = CacheConfig {
            default_ttl: Some(1),
            ..Default::default()
        };
        let cache = MemoryAssetCache::from_config(&config);
        cache.set("app.js", CachedAsset::entry("app.js", Some("app.1.js".to_string())));
        std::thread::sleep(Duration::from_millis(1100));
        assert_eq!(cache.get("app.js"), CacheResult::Miss);
    }

    #[test]
    fn test_clear_drops_everything() {
        let cache = MemoryAssetCache::default();
        let manifest = Manifest::from_json(r#"{"app.js": "app.1.js"}"#).unwrap();
        cache.set("mix-manifest", CachedAsset::Manifest(Arc::new(manifest)));
        cache.set("app.js", CachedAsset::entry("app.js", Some("app.1.js".to_string())));

        cache.clear();

        assert_eq!(cache.get("mix-manifest"), CacheResult::Miss);
        assert_eq!(cache.get("app.js"), CacheResult::Miss);
    }
}
