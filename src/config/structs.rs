use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "mix.toml";

/// Static configuration (loaded from TOML at startup)
///
/// - mix: manifest, hot marker and build output locations
/// - theme: where themed resources are looked up on disk
/// - cache: cache backend for manifest lookups
/// - logging: log output
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StaticConfig {
    #[serde(default)]
    pub mix: MixConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StaticConfig {
    /// Load configuration from a TOML file and environment variables
    ///
    /// Priority: ENV > file > defaults
    /// ENV prefix: MIX, separator: __
    /// Example: MIX__MIX__HOT_FILE=build/hot
    ///
    /// Errors are reported on stderr and the defaults are used instead.
    pub fn load(path: Option<&str>) -> Self {
        let path = path.unwrap_or(DEFAULT_CONFIG_FILE);
        match Self::try_load(path) {
            Ok(config) => {
                if std::path::Path::new(path).exists() {
                    eprintln!("[INFO] Configuration loaded from: {}", path);
                }
                config
            }
            Err(e) => {
                eprintln!("[ERROR] {}", e);
                Self::default()
            }
        }
    }

    /// Strict variant of [`StaticConfig::load`]: any build or
    /// deserialization problem is returned to the caller.
    pub fn try_load(path: &str) -> Result<Self> {
        use config::{Config, Environment, File};

        let settings = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix("MIX")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("theme.themes")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize::<StaticConfig>()?)
    }

    /// Render the default configuration as a sample TOML file
    pub fn generate_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config)
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }
}

/// Manifest and hot marker locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MixConfig {
    /// Manifest file, resolved through the theme lookup
    #[serde(default = "default_manifest")]
    pub manifest: String,
    /// Hot reload marker file, resolved through the theme lookup
    #[serde(default = "default_hot_file")]
    pub hot_file: String,
    /// Directory that manifest entries are relative to
    #[serde(default = "default_dist_dir")]
    pub dist_dir: String,
}

/// Themed resource lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Web root on disk; resolved resources are reported relative to it
    #[serde(default = "default_base_dir")]
    pub base_dir: String,
    /// Directory that the `$public` theme maps to
    #[serde(default = "default_public_dir")]
    pub public_dir: String,
    /// Themes in lookup order
    #[serde(default = "default_themes")]
    pub themes: Vec<String>,
}

/// Cache backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    #[serde(rename = "type")]
    #[serde(default = "default_cache_type")]
    pub cache_type: String,
    /// Seconds before a cached manifest expires; unset keeps it until
    /// flushed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_ttl: Option<u64>,
    #[serde(default)]
    pub memory: MemoryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryConfig {
    #[serde(default = "default_memory_capacity")]
    pub max_capacity: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

// ============================================================
// Default value functions
// ============================================================

fn default_manifest() -> String {
    "dist/mix-manifest.json".to_string()
}

fn default_hot_file() -> String {
    "dist/hot".to_string()
}

fn default_dist_dir() -> String {
    "dist".to_string()
}

fn default_base_dir() -> String {
    ".".to_string()
}

fn default_public_dir() -> String {
    "public".to_string()
}

fn default_themes() -> Vec<String> {
    vec!["$public".to_string(), "$default".to_string()]
}

fn default_cache_type() -> String {
    "memory".to_string()
}

fn default_memory_capacity() -> u64 {
    10000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_max_backups() -> u32 {
    5
}

fn default_enable_rotation() -> bool {
    true
}

// ============================================================
// Default implementations
// ============================================================

impl Default for MixConfig {
    fn default() -> Self {
        Self {
            manifest: default_manifest(),
            hot_file: default_hot_file(),
            dist_dir: default_dist_dir(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            public_dir: default_public_dir(),
            themes: default_themes(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            cache_type: default_cache_type(),
            default_ttl: None,
            memory: MemoryConfig::default(),
        }
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            max_capacity: default_memory_capacity(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}
