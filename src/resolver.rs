//! Manifest-backed asset resolution
//!
//! [`Mix`] turns logical asset names (`/js/app.js`) into the URL of the
//! versioned build output, or into a dev server URL while hot reloading.
//! Manifest reads are cached in the configured [`AssetCache`]; hot mode
//! bypasses the cache so every edit on the dev server is picked up.

use parking_lot::{Mutex, RwLock};
use std::str::FromStr;
use std::sync::Arc;
use strum::{AsRefStr, EnumString, VariantNames};
use tracing::{debug, info, warn};

use crate::cache::{AssetCache, CacheResult, CachedAsset, create_asset_cache};
use crate::config::{MixConfig, StaticConfig};
use crate::errors::{MixError, Result};
use crate::hot::{join_links, read_hot_marker};
use crate::html::create_tag;
use crate::manifest::{MANIFEST_CACHE_KEY, Manifest, ManifestEntry, cache_key};
use crate::requirements::{AssetKind, AssetOptions, Requirements};
use crate::theme::{FsThemeResolver, ThemeResolver, join_relative};

const DEFERRED_CSS_ONLOAD: &str = "this.onload=null;this.rel='stylesheet'";

/// Functions callable from templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr, VariantNames)]
pub enum TemplateGlobal {
    #[strum(serialize = "mix")]
    Mix,
    #[strum(serialize = "DeferredCss")]
    DeferredCss,
    #[strum(serialize = "Defer")]
    Defer,
}

/// Outcome of a manifest lookup
#[derive(Debug, Clone, PartialEq, Eq)]
enum Lookup {
    /// No manifest could be read at all
    NoManifest,
    /// The manifest has no entry for the path
    Missing,
    Found(String),
}

pub struct Mix {
    config: MixConfig,
    cache: Arc<dyn AssetCache>,
    themes: Arc<dyn ThemeResolver>,
    /// `None` until the marker has been looked up
    hot_path: RwLock<Option<Option<String>>>,
    deferred_css: Mutex<Vec<(String, AssetOptions)>>,
}

impl Mix {
    pub fn new(
        config: MixConfig,
        cache: Arc<dyn AssetCache>,
        themes: Arc<dyn ThemeResolver>,
    ) -> Self {
        Self {
            config,
            cache,
            themes,
            hot_path: RwLock::new(None),
            deferred_css: Mutex::new(Vec::new()),
        }
    }

    /// Build a resolver with the configured cache backend and a filesystem
    /// theme lookup
    pub fn from_config(config: &StaticConfig) -> Result<Self> {
        let cache = create_asset_cache(&config.cache)?;
        let themes = Arc::new(FsThemeResolver::from_config(&config.theme));
        Ok(Self::new(config.mix.clone(), cache, themes))
    }

    /// Names of the functions exposed to templates
    pub fn template_globals() -> &'static [&'static str] {
        TemplateGlobal::VARIANTS
    }

    /// Dev server base URL, when the hot marker is present
    pub fn hot_path(&self) -> Option<String> {
        if let Some(memo) = &*self.hot_path.read() {
            return memo.clone();
        }

        let hot_path = self
            .themes
            .find_themed_resource(&self.config.hot_file)
            .and_then(|resolved| read_hot_marker(&self.themes.absolute_path(&resolved)));
        *self.hot_path.write() = Some(hot_path.clone());
        hot_path
    }

    pub fn is_hot(&self) -> bool {
        self.hot_path().is_some()
    }

    fn load_manifest(&self, hot: bool) -> Option<Arc<Manifest>> {
        if !hot && let CacheResult::Hit(CachedAsset::Manifest(manifest)) =
            self.cache.get(MANIFEST_CACHE_KEY)
        {
            return Some(manifest);
        }

        let Some(resolved) = self.themes.find_themed_resource(&self.config.manifest) else {
            debug!("No manifest found at '{}'", self.config.manifest);
            return None;
        };
        let manifest = match Manifest::load(&self.themes.absolute_path(&resolved)) {
            Ok(manifest) => Arc::new(manifest),
            Err(e) => {
                warn!("Ignoring unreadable manifest {}: {}", resolved, e);
                return None;
            }
        };

        if !hot {
            self.cache
                .set(MANIFEST_CACHE_KEY, CachedAsset::Manifest(manifest.clone()));
        }
        Some(manifest)
    }

    fn lookup(&self, path: &str, hot: bool) -> Lookup {
        let key = cache_key(path);
        if !hot {
            match self.cache.get(&key) {
                CacheResult::Hit(CachedAsset::Entry {
                    path: cached,
                    value,
                }) if cached == path => {
                    debug!("Manifest cache hit for '{}'", path);
                    return value.map_or(Lookup::Missing, Lookup::Found);
                }
                _ => debug!("Manifest cache miss for '{}'", path),
            }
        }

        let Some(manifest) = self.load_manifest(hot) else {
            return Lookup::NoManifest;
        };
        let entry = manifest.get(path).map(str::to_string);
        // The manifest itself owns its key
        if !hot && key != MANIFEST_CACHE_KEY {
            self.cache.set(&key, CachedAsset::entry(path, entry.clone()));
        }

        match entry {
            Some(value) => Lookup::Found(value),
            None => Lookup::Missing,
        }
    }

    /// Locate a manifest value (`app.abc.js?id=1`) in the build output
    fn resolve_built(&self, value: &str) -> Option<String> {
        let entry = ManifestEntry::parse(value);
        let built = join_relative(&[self.config.dist_dir.as_str(), entry.path]);
        let Some(mut resolved) = self.themes.find_themed_resource(&built) else {
            warn!("Build output '{}' listed in the manifest does not exist", built);
            return None;
        };
        if let Some(query) = entry.query {
            resolved.push('?');
            resolved.push_str(query);
        }
        Some(resolved)
    }

    /// Resolve a logical asset path.
    ///
    /// Absolute URLs, and every path when no manifest is available, are
    /// returned unchanged. `None` means the manifest does not list the path
    /// or its build output is missing.
    pub fn resolve(&self, path: &str) -> Option<String> {
        if is_absolute_url(path) {
            return Some(path.to_string());
        }

        let hot_path = self.hot_path();
        match self.lookup(path, hot_path.is_some()) {
            Lookup::NoManifest => Some(path.to_string()),
            Lookup::Missing => {
                debug!("'{}' is not listed in the manifest", path);
                None
            }
            Lookup::Found(value) => match hot_path {
                Some(base_url) => Some(join_links(&base_url, &value)),
                None => self.resolve_built(&value),
            },
        }
    }

    /// Register a stylesheet or script by its logical path
    pub fn mix(&self, path: &str, options: &AssetOptions, requirements: &mut dyn Requirements) {
        let Some(kind) = AssetKind::from_path(path) else {
            warn!("Cannot include '{}': only css and js assets are supported", path);
            return;
        };
        let Some(resolved) = self.resolve(path) else {
            return;
        };

        match kind {
            AssetKind::Css => requirements.css(&resolved, options),
            AssetKind::Js => requirements.javascript(&resolved, options),
        }
    }

    /// Register an asset so it does not block rendering: stylesheets are
    /// preloaded, scripts get `defer` unless the options say otherwise.
    pub fn defer(&self, path: &str, options: &AssetOptions, requirements: &mut dyn Requirements) {
        match AssetKind::from_path(path) {
            Some(AssetKind::Css) => self.defer_css(path, options, requirements),
            Some(AssetKind::Js) => {
                self.mix(path, &options.clone().defer_by_default(), requirements)
            }
            None => warn!("Cannot defer '{}': only css and js assets are supported", path),
        }
    }

    /// Preload a stylesheet and apply it once loaded, with a `<noscript>`
    /// fallback. Each stylesheet is inserted once until [`Mix::flush`].
    pub fn defer_css(&self, path: &str, options: &AssetOptions, requirements: &mut dyn Requirements) {
        let Some(href) = self.resolve(path) else {
            return;
        };

        let mut deferred = self.deferred_css.lock();
        if deferred.iter().any(|(existing, _)| *existing == href) {
            return;
        }

        let noscript = create_tag("noscript", &[], Some(stylesheet_tag(&href).as_str()));
        requirements.insert_head_tags(&format!("{}\n{}", preload_tag(&href, options), noscript));
        deferred.push((href, options.clone()));
    }

    /// Tags for every deferred stylesheet: one preload link each, then a
    /// single `<noscript>` holding the plain stylesheet links. Empty when
    /// nothing was deferred.
    pub fn deferred_css(&self) -> Vec<String> {
        let deferred = self.deferred_css.lock();
        if deferred.is_empty() {
            return Vec::new();
        }

        let mut tags: Vec<String> = deferred
            .iter()
            .map(|(href, options)| preload_tag(href, options))
            .collect();
        let fallbacks = deferred
            .iter()
            .map(|(href, _)| stylesheet_tag(href))
            .collect::<Vec<_>>()
            .join("\n");
        tags.push(create_tag("noscript", &[], Some(fallbacks.as_str())));
        tags
    }

    /// Dispatch a template call by name. Returns the markup the call
    /// renders in place, which is empty for the registering calls.
    pub fn call_global(
        &self,
        name: &str,
        path: Option<&str>,
        options: &AssetOptions,
        requirements: &mut dyn Requirements,
    ) -> Result<String> {
        let global = TemplateGlobal::from_str(name)
            .map_err(|_| MixError::template_call(format!("Unknown template global '{}'", name)))?;
        let require_path = || {
            path.ok_or_else(|| {
                MixError::template_call(format!("'{}' requires an asset path", global.as_ref()))
            })
        };

        match global {
            TemplateGlobal::Mix => {
                self.mix(require_path()?, options, requirements);
                Ok(String::new())
            }
            TemplateGlobal::Defer => {
                self.defer(require_path()?, options, requirements);
                Ok(String::new())
            }
            TemplateGlobal::DeferredCss => Ok(self.deferred_css().join("\n")),
        }
    }

    /// Drop cached manifest data, the hot marker and deferred stylesheets
    pub fn flush(&self) {
        self.cache.clear();
        *self.hot_path.write() = None;
        self.deferred_css.lock().clear();
        info!("Asset manifest cache flushed ({})", self.cache.name());
    }
}

/// Paths that are already URLs and bypass the manifest
pub fn is_absolute_url(path: &str) -> bool {
    path.starts_with("http") || path.starts_with("//")
}

fn preload_tag(href: &str, options: &AssetOptions) -> String {
    create_tag(
        "link",
        &[
            ("rel", Some("preload")),
            ("as", Some("style")),
            ("href", Some(href)),
            ("integrity", options.integrity.as_deref()),
            ("crossorigin", options.crossorigin.as_deref()),
            ("media", options.media.as_deref()),
            ("onload", Some(DEFERRED_CSS_ONLOAD)),
        ],
        None,
    )
}

fn stylesheet_tag(href: &str) -> String {
    create_tag("link", &[("rel", Some("stylesheet")), ("href", Some(href))], None)
}
