//! Shared fixtures: a web root on disk with a manifest and built files

#![allow(dead_code)]

use mixer::cache::AssetCache;
use mixer::cache::backends::{MemoryAssetCache, NullAssetCache};
use mixer::config::MixConfig;
use mixer::{FsThemeResolver, Mix};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

pub fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

/// Web root with `dist/mix-manifest.json` and an empty file for every
/// build output listed in it
pub fn site(manifest: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    write_manifest(dir.path(), "dist", manifest);
    dir
}

pub fn write_manifest(root: &Path, dist: &str, manifest: &[(&str, &str)]) {
    let entries: serde_json::Map<String, serde_json::Value> = manifest
        .iter()
        .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
        .collect();
    write(
        root,
        &format!("{}/mix-manifest.json", dist),
        &serde_json::to_string(&entries).unwrap(),
    );
    for (_, built) in manifest {
        let built = built.split('?').next().unwrap().trim_start_matches('/');
        write(root, &format!("{}/{}", dist, built), "");
    }
}

pub fn mix_for(root: &Path) -> Mix {
    mix_with_cache(root, Arc::new(MemoryAssetCache::default()))
}

pub fn uncached_mix_for(root: &Path) -> Mix {
    mix_with_cache(root, Arc::new(NullAssetCache::new()))
}

fn mix_with_cache(root: &Path, cache: Arc<dyn AssetCache>) -> Mix {
    let themes = FsThemeResolver::new(root, vec!["$default".to_string()]);
    Mix::new(MixConfig::default(), cache, Arc::new(themes))
}
