use std::sync::Arc;

use crate::manifest::Manifest;

/// Value stored in an [`AssetCache`]
#[derive(Debug, Clone, PartialEq)]
pub enum CachedAsset {
    /// The whole parsed manifest
    Manifest(Arc<Manifest>),
    /// A single manifest lookup for the logical `path`. Several paths can
    /// share a sanitized key, so readers compare `path` before trusting
    /// `value`. `None` records that the manifest has no entry.
    Entry { path: String, value: Option<String> },
}

impl CachedAsset {
    pub fn entry(path: impl Into<String>, value: Option<String>) -> Self {
        CachedAsset::Entry {
            path: path.into(),
            value,
        }
    }
}

/// Cache lookup result
#[derive(Debug, Clone, PartialEq)]
pub enum CacheResult {
    Hit(CachedAsset),
    Miss,
}

/// Opaque key-value store used for manifest lookups.
///
/// Implementations must be safe to share; the resolver only ever calls
/// `get`, `set` and `clear`.
pub trait AssetCache: Send + Sync {
    fn get(&self, key: &str) -> CacheResult;
    fn set(&self, key: &str, value: CachedAsset);
    fn clear(&self);

    /// Backend name, for logging
    fn name(&self) -> &'static str;
}
