use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;

use super::StaticConfig;

static CONFIG: OnceLock<ArcSwap<StaticConfig>> = OnceLock::new();

/// Get the global configuration instance
///
/// Returns an Arc pointer to the configuration, which is cheap to clone
/// and doesn't hold any locks.
pub fn get_config() -> Arc<StaticConfig> {
    CONFIG
        .get()
        .expect("Config not initialized. Call init_config() first.")
        .load_full()
}

/// Like [`get_config`], but returns `None` before [`init_config`] ran.
pub fn try_get_config() -> Option<Arc<StaticConfig>> {
    CONFIG.get().map(|config| config.load_full())
}

/// Initialize the global configuration
///
/// Loads configuration from `path` (default "mix.toml" in the current
/// directory). If the file doesn't exist, uses in-memory defaults.
/// Later calls are no-ops.
///
/// # Examples
/// ```no_run
/// use mixer::config::init_config;
/// init_config(None);
/// ```
pub fn init_config(path: Option<&str>) -> Arc<StaticConfig> {
    CONFIG
        .get_or_init(|| ArcSwap::from_pointee(StaticConfig::load(path)))
        .load_full()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_config_after_init() {
        let initialized = init_config(Some("does-not-exist.toml"));
        assert_eq!(get_config().mix.manifest, initialized.mix.manifest);

        let current = try_get_config().expect("config was initialized");
        assert!(Arc::ptr_eq(&current, &get_config()));

        // later calls keep the first configuration
        let again = init_config(Some("other.toml"));
        assert!(Arc::ptr_eq(&again, &current));
    }
}
