use mixer::errors::{MixError, Result};
use std::error::Error;

#[cfg(test)]
mod error_creation_tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let error = MixError::config("bad value");

        assert!(matches!(error, MixError::Config(_)));
        assert_eq!(error.code(), "E001");
        assert_eq!(error.to_string(), "Configuration Error: bad value");
    }

    #[test]
    fn test_cache_plugin_not_found_error() {
        let error = MixError::cache_plugin_not_found("redis");

        assert!(matches!(error, MixError::CachePluginNotFound(_)));
        assert_eq!(error.code(), "E004");
        assert_eq!(error.message(), "redis");
    }

    #[test]
    fn test_template_call_error() {
        let error = MixError::template_call("Unknown template global 'Require'");

        assert_eq!(error.error_type(), "Template Call Error");
        assert!(error.format_simple().contains("'Require'"));
    }

    #[test]
    fn test_colored_format_contains_code_and_message() {
        let error = MixError::file_operation("permission denied");
        let formatted = error.format_colored();

        assert!(formatted.contains("E002"));
        assert!(formatted.contains("permission denied"));
    }
}

#[cfg(test)]
mod error_conversion_tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "manifest missing");
        let error: MixError = io_error.into();

        assert!(matches!(error, MixError::FileOperation(_)));
        assert!(error.message().contains("manifest missing"));
    }

    #[test]
    fn test_json_error_conversion() {
        fn parse() -> Result<serde_json::Value> {
            Ok(serde_json::from_str("{broken")?)
        }

        let error = parse().unwrap_err();
        assert!(matches!(error, MixError::Serialization(_)));
        assert_eq!(error.code(), "E003");
    }

    #[test]
    fn test_is_std_error() {
        let error: Box<dyn Error> = Box::new(MixError::serialization("x"));
        assert!(error.source().is_none());
    }
}
