use tracing::trace;

use crate::cache::{AssetCache, CacheResult, CachedAsset};

/// Backend that never stores anything; every lookup reads the manifest
/// from disk.
#[derive(Default)]
pub struct NullAssetCache;

impl NullAssetCache {
    pub fn new() -> Self {
        trace!("Using NullAssetCache: manifest lookups will not be cached");
        NullAssetCache
    }
}

impl AssetCache for NullAssetCache {
    fn get(&self, key: &str) -> CacheResult {
        trace!("NullAssetCache.get called for key: {}", key);
        CacheResult::Miss
    }

    fn set(&self, key: &str, _: CachedAsset) {
        trace!("NullAssetCache.set called for key: {}", key);
    }

    fn clear(&self) {
        trace!("NullAssetCache.clear called, but no action taken");
    }

    fn name(&self) -> &'static str {
        "null"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_cache_always_misses() {
        let cache = NullAssetCache::new();
        cache.set("app.js", CachedAsset::entry("app.js", Some("app.1.js".to_string())));
        assert_eq!(cache.get("app.js"), CacheResult::Miss);
    }

    #[test]
    fn test_null_cache_clear_is_noop() {
        let cache = NullAssetCache::new();
        cache.clear();
        assert_eq!(cache.get("anything"), CacheResult::Miss);
    }
}
