use crate::cache::backends::{MemoryAssetCache, NullAssetCache};
use crate::cache::traits::AssetCache;
use crate::config::CacheConfig;
use crate::errors::{MixError, Result};
use once_cell::sync::Lazy;
use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};
use tracing::debug;

pub type AssetCacheConstructor =
    Arc<dyn Fn(&CacheConfig) -> Result<Arc<dyn AssetCache>> + Send + Sync>;

static ASSET_CACHE_REGISTRY: Lazy<RwLock<HashMap<String, AssetCacheConstructor>>> =
    Lazy::new(|| RwLock::new(builtin_plugins()));

fn builtin_plugins() -> HashMap<String, AssetCacheConstructor> {
    let mut plugins: HashMap<String, AssetCacheConstructor> = HashMap::new();
    plugins.insert(
        "memory".to_string(),
        Arc::new(|config: &CacheConfig| -> Result<Arc<dyn AssetCache>> {
            Ok(Arc::new(MemoryAssetCache::from_config(config)) as Arc<dyn AssetCache>)
        }),
    );
    plugins.insert(
        "null".to_string(),
        Arc::new(|_: &CacheConfig| -> Result<Arc<dyn AssetCache>> {
            Ok(Arc::new(NullAssetCache::new()))
        }),
    );
    plugins
}

/// Register an additional backend, replacing any backend of the same name
pub fn register_cache_plugin<S: Into<String>>(name: S, constructor: AssetCacheConstructor) {
    let name = name.into();
    let mut registry = ASSET_CACHE_REGISTRY
        .write()
        .expect("Cache registry RwLock poisoned - a thread panicked while holding the lock");
    registry.insert(name, constructor);
}

pub fn get_cache_plugin(name: &str) -> Option<AssetCacheConstructor> {
    ASSET_CACHE_REGISTRY
        .read()
        .expect("Cache registry RwLock poisoned - a thread panicked while holding the lock")
        .get(name)
        .cloned()
}

/// Names of all registered backends, sorted
pub fn registered_cache_plugins() -> Vec<String> {
    let mut names: Vec<String> = ASSET_CACHE_REGISTRY
        .read()
        .expect("Cache registry RwLock poisoned")
        .keys()
        .cloned()
        .collect();
    names.sort();
    names
}

/// Build the backend selected by `config.cache_type`
pub fn create_asset_cache(config: &CacheConfig) -> Result<Arc<dyn AssetCache>> {
    let constructor = get_cache_plugin(&config.cache_type).ok_or_else(|| {
        MixError::cache_plugin_not_found(format!(
            "Unknown cache type '{}'. Available: {}",
            config.cache_type,
            registered_cache_plugins().join(", ")
        ))
    })?;
    let cache = constructor(config)?;
    debug!("Asset cache backend initialized: {}", cache.name());
    Ok(cache)
}
