//! Mixer - bundler manifest asset resolution
//!
//! Resolves logical asset names (`/js/app.js`) to the versioned files a
//! front-end bundler wrote into its `mix-manifest.json`, for inclusion in
//! server-rendered pages. While the bundler's dev server runs (signalled
//! by a `hot` marker file) assets are served from the dev server instead.
//!
//! # Architecture
//! - `resolver`: [`Mix`], the entry point: resolve / mix / defer / flush
//! - `manifest`: manifest parsing and cache keys
//! - `hot`: hot reload marker
//! - `cache`: cache backends for manifest lookups (memory, null)
//! - `theme`: themed resource lookup on disk
//! - `requirements`: tag registration seam and an HTML-rendering registry
//! - `config`: configuration management
//! - `system`: logging

pub mod cache;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod errors;
pub mod hot;
pub mod html;
pub mod manifest;
pub mod requirements;
pub mod resolver;
pub mod system;
pub mod theme;

pub use errors::{MixError, Result};
pub use manifest::Manifest;
pub use requirements::{AssetKind, AssetOptions, Requirements, TagRegistry};
pub use resolver::{Mix, TemplateGlobal};
pub use theme::{FsThemeResolver, ThemeResolver};
