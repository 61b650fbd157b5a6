//! Themed resource lookup
//!
//! Manifest files, hot markers and built assets may live in any of the
//! active themes. A [`ThemeResolver`] finds the first theme that contains a
//! resource and reports where it is.

use std::path::PathBuf;
use tracing::trace;

use crate::config::ThemeConfig;

/// Theme name that maps to the configured public directory
pub const PUBLIC_THEME: &str = "$public";
/// Theme name that maps to the web root itself
pub const DEFAULT_THEME: &str = "$default";

pub trait ThemeResolver: Send + Sync {
    /// Root-relative URL path (e.g. `/themes/app/dist/app.js`) of the first
    /// theme containing `resource`, or `None` when no theme has it.
    fn find_themed_resource(&self, resource: &str) -> Option<String>;

    /// Filesystem location of a path returned by `find_themed_resource`
    fn absolute_path(&self, resolved: &str) -> PathBuf;
}

/// Looks resources up on disk below a web root
#[derive(Debug, Clone)]
pub struct FsThemeResolver {
    base_dir: PathBuf,
    public_dir: String,
    themes: Vec<String>,
}

impl FsThemeResolver {
    pub fn new(base_dir: impl Into<PathBuf>, themes: Vec<String>) -> Self {
        Self {
            base_dir: base_dir.into(),
            public_dir: "public".to_string(),
            themes,
        }
    }

    pub fn from_config(config: &ThemeConfig) -> Self {
        Self {
            base_dir: PathBuf::from(&config.base_dir),
            public_dir: config.public_dir.clone(),
            themes: config.themes.clone(),
        }
    }

    pub fn with_public_dir(mut self, public_dir: impl Into<String>) -> Self {
        self.public_dir = public_dir.into();
        self
    }

    /// Directory of a theme, relative to the web root
    fn theme_dir(&self, theme: &str) -> String {
        match theme {
            PUBLIC_THEME => self.public_dir.clone(),
            DEFAULT_THEME => String::new(),
            name if name.contains('/') => name.to_string(),
            name => join_relative(&["themes", name]),
        }
    }
}

impl ThemeResolver for FsThemeResolver {
    fn find_themed_resource(&self, resource: &str) -> Option<String> {
        self.themes.iter().find_map(|theme| {
            let candidate = join_relative(&[self.theme_dir(theme).as_str(), resource]);
            let exists = self.base_dir.join(&candidate).is_file();
            trace!("Theme '{}': {} exists={}", theme, candidate, exists);
            exists.then(|| format!("/{}", candidate))
        })
    }

    fn absolute_path(&self, resolved: &str) -> PathBuf {
        self.base_dir.join(resolved.trim_start_matches('/'))
    }
}

/// Join path segments with single `/` separators, dropping empty segments
/// and surrounding slashes.
pub fn join_relative(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|part| part.trim_matches('/'))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}
