//! Bundler manifest (`mix-manifest.json`) parsing
//!
//! The manifest maps logical asset names to their versioned build output,
//! e.g. `{"/js/app.js": "/js/app.js?id=5f2c1e"}`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

use crate::errors::Result;

/// Cache key under which the whole manifest is stored
pub const MANIFEST_CACHE_KEY: &str = "mix-manifest";

/// Characters not allowed in cache keys; each is replaced by `.`
const RESERVED_KEY_CHARS: &[char] = &['{', '}', '(', ')', '/', '\\', '@', ':'];

/// Parsed manifest contents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    entries: HashMap<String, String>,
}

impl Manifest {
    pub fn from_json(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Read and parse a manifest file
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Reading manifest from {}", path.display());
        let source = std::fs::read_to_string(path)?;
        Self::from_json(&source)
    }

    pub fn get(&self, logical_path: &str) -> Option<&str> {
        self.entries.get(logical_path).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A manifest value split into its build path and version query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry<'a> {
    pub path: &'a str,
    pub query: Option<&'a str>,
}

impl<'a> ManifestEntry<'a> {
    /// Split `app.js?id=abc#top` into `app.js` and `id=abc`. The fragment
    /// is dropped; an empty query counts as none.
    pub fn parse(value: &'a str) -> Self {
        let value = value.split_once('#').map_or(value, |(before, _)| before);
        match value.split_once('?') {
            Some((path, query)) if !query.is_empty() => Self {
                path,
                query: Some(query),
            },
            Some((path, _)) => Self { path, query: None },
            None => Self {
                path: value,
                query: None,
            },
        }
    }
}

/// Cache key for a logical asset path
pub fn cache_key(logical_path: &str) -> String {
    logical_path.replace(RESERVED_KEY_CHARS, ".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_lookup() {
        let manifest =
            Manifest::from_json(r#"{"/js/app.js": "/js/app.js?id=5f2c", "app.css": "app.1.css"}"#)
                .unwrap();
        assert_eq!(manifest.len(), 2);
        assert_eq!(manifest.get("/js/app.js"), Some("/js/app.js?id=5f2c"));
        assert_eq!(manifest.get("missing.js"), None);
    }

    #[test]
    fn test_manifest_rejects_non_string_values() {
        assert!(Manifest::from_json(r#"{"app.js": 1}"#).is_err());
        assert!(Manifest::from_json(r#"["app.js"]"#).is_err());
    }

    #[test]
    fn test_load_missing_file_is_file_error() {
        let err = Manifest::load(Path::new("/nonexistent/mix-manifest.json")).unwrap_err();
        assert!(matches!(err, crate::errors::MixError::FileOperation(_)));
    }

    #[test]
    fn test_entry_with_query() {
        let entry = ManifestEntry::parse("/js/app.js?id=5f2c");
        assert_eq!(entry.path, "/js/app.js");
        assert_eq!(entry.query, Some("id=5f2c"));
    }

    #[test]
    fn test_entry_without_query() {
        let entry = ManifestEntry::parse("app.abc123.js");
        assert_eq!(entry.path, "app.abc123.js");
        assert_eq!(entry.query, None);

        let entry = ManifestEntry::parse("app.js?");
        assert_eq!(entry.path, "app.js");
        assert_eq!(entry.query, None);
    }

    #[test]
    fn test_entry_drops_fragment() {
        let entry = ManifestEntry::parse("icons.svg?v=2#logo");
        assert_eq!(entry.path, "icons.svg");
        assert_eq!(entry.query, Some("v=2"));
    }

    #[test]
    fn test_cache_key_replaces_reserved_characters() {
        assert_eq!(cache_key("/js/app.js"), ".js.app.js");
        assert_eq!(cache_key("{a}(b)\\c@d:e"), ".a..b..c.d.e");
        assert_eq!(cache_key("app.js"), "app.js");
    }
}
