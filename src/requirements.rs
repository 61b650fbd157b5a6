//! Asset registration
//!
//! [`Requirements`] is the seam to the host page renderer: resolved assets
//! are handed to it and it decides how they end up in the page.
//! [`TagRegistry`] is a self-contained implementation that renders plain
//! HTML tags.

use serde::{Deserialize, Serialize};
use std::path::Path;
use strum::{AsRefStr, Display, EnumString};

use crate::html::create_tag;

/// Asset types that can be registered, keyed by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr, Display)]
#[strum(serialize_all = "lowercase")]
pub enum AssetKind {
    Css,
    Js,
}

impl AssetKind {
    /// Kind of a logical asset path, from its extension
    pub fn from_path(path: &str) -> Option<Self> {
        Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }
}

/// Tag options passed along with a registration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetOptions {
    #[serde(default)]
    pub media: Option<String>,
    #[serde(default)]
    pub integrity: Option<String>,
    #[serde(default)]
    pub crossorigin: Option<String>,
    #[serde(default, rename = "type")]
    pub script_type: Option<String>,
    #[serde(default)]
    pub defer: Option<bool>,
    #[serde(default, rename = "async")]
    pub is_async: Option<bool>,
}

impl AssetOptions {
    pub fn media(mut self, media: impl Into<String>) -> Self {
        self.media = Some(media.into());
        self
    }

    pub fn integrity(mut self, integrity: impl Into<String>) -> Self {
        self.integrity = Some(integrity.into());
        self
    }

    pub fn crossorigin(mut self, crossorigin: impl Into<String>) -> Self {
        self.crossorigin = Some(crossorigin.into());
        self
    }

    pub fn script_type(mut self, script_type: impl Into<String>) -> Self {
        self.script_type = Some(script_type.into());
        self
    }

    pub fn defer(mut self, defer: bool) -> Self {
        self.defer = Some(defer);
        self
    }

    pub fn is_async(mut self, is_async: bool) -> Self {
        self.is_async = Some(is_async);
        self
    }

    /// Set `defer` unless the caller already chose a value
    pub fn defer_by_default(mut self) -> Self {
        self.defer.get_or_insert(true);
        self
    }
}

/// Host-side registry that collects the tags a page needs
pub trait Requirements {
    fn css(&mut self, path: &str, options: &AssetOptions);
    fn javascript(&mut self, path: &str, options: &AssetOptions);
    /// Raw HTML to place in the document head
    fn insert_head_tags(&mut self, html: &str);
}

/// In-memory [`Requirements`] that renders HTML.
///
/// Registrations keep their first position; registering a path again
/// replaces its options. Identical head tags are inserted once.
#[derive(Debug, Clone, Default)]
pub struct TagRegistry {
    css: Vec<(String, AssetOptions)>,
    javascript: Vec<(String, AssetOptions)>,
    head_tags: Vec<String>,
}

fn upsert(entries: &mut Vec<(String, AssetOptions)>, path: &str, options: &AssetOptions) {
    match entries.iter_mut().find(|(existing, _)| existing == path) {
        Some((_, existing_options)) => *existing_options = options.clone(),
        None => entries.push((path.to_string(), options.clone())),
    }
}

fn bool_attr(flag: Option<bool>) -> Option<&'static str> {
    flag.filter(|set| *set).map(|_| "")
}

impl TagRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn css_files(&self) -> &[(String, AssetOptions)] {
        &self.css
    }

    pub fn javascript_files(&self) -> &[(String, AssetOptions)] {
        &self.javascript
    }

    pub fn head_tags(&self) -> &[String] {
        &self.head_tags
    }

    pub fn is_empty(&self) -> bool {
        self.css.is_empty() && self.javascript.is_empty() && self.head_tags.is_empty()
    }

    /// Stylesheet links followed by custom head tags, one per line
    pub fn render_head(&self) -> String {
        self.css
            .iter()
            .map(|(href, options)| {
                create_tag(
                    "link",
                    &[
                        ("rel", Some("stylesheet")),
                        ("href", Some(href.as_str())),
                        ("media", options.media.as_deref()),
                        ("integrity", options.integrity.as_deref()),
                        ("crossorigin", options.crossorigin.as_deref()),
                    ],
                    None,
                )
            })
            .chain(self.head_tags.iter().cloned())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Script tags, one per line
    pub fn render_body(&self) -> String {
        self.javascript
            .iter()
            .map(|(src, options)| {
                create_tag(
                    "script",
                    &[
                        ("src", Some(src.as_str())),
                        ("type", options.script_type.as_deref()),
                        ("integrity", options.integrity.as_deref()),
                        ("crossorigin", options.crossorigin.as_deref()),
                        ("defer", bool_attr(options.defer)),
                        ("async", bool_attr(options.is_async)),
                    ],
                    None,
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Requirements for TagRegistry {
    fn css(&mut self, path: &str, options: &AssetOptions) {
        upsert(&mut self.css, path, options);
    }

    fn javascript(&mut self, path: &str, options: &AssetOptions) {
        upsert(&mut self.javascript, path, options);
    }

    fn insert_head_tags(&mut self, html: &str) {
        if !self.head_tags.iter().any(|existing| existing == html) {
            self.head_tags.push(html.to_string());
        }
    }
}
