use std::fmt;

#[derive(Debug, Clone)]
pub enum MixError {
    Config(String),
    FileOperation(String),
    Serialization(String),
    CachePluginNotFound(String),
    TemplateCall(String),
}

impl MixError {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            MixError::Config(_) => "E001",
            MixError::FileOperation(_) => "E002",
            MixError::Serialization(_) => "E003",
            MixError::CachePluginNotFound(_) => "E004",
            MixError::TemplateCall(_) => "E005",
        }
    }

    /// Human readable error category
    pub fn error_type(&self) -> &'static str {
        match self {
            MixError::Config(_) => "Configuration Error",
            MixError::FileOperation(_) => "File Operation Error",
            MixError::Serialization(_) => "Serialization Error",
            MixError::CachePluginNotFound(_) => "Cache Plugin Not Found",
            MixError::TemplateCall(_) => "Template Call Error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            MixError::Config(msg) => msg,
            MixError::FileOperation(msg) => msg,
            MixError::Serialization(msg) => msg,
            MixError::CachePluginNotFound(msg) => msg,
            MixError::TemplateCall(msg) => msg,
        }
    }

    /// Coloured output for terminals
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for MixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for MixError {}

impl MixError {
    pub fn config<T: Into<String>>(msg: T) -> Self {
        MixError::Config(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        MixError::FileOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        MixError::Serialization(msg.into())
    }

    pub fn cache_plugin_not_found<T: Into<String>>(msg: T) -> Self {
        MixError::CachePluginNotFound(msg.into())
    }

    pub fn template_call<T: Into<String>>(msg: T) -> Self {
        MixError::TemplateCall(msg.into())
    }
}

impl From<std::io::Error> for MixError {
    fn from(err: std::io::Error) -> Self {
        MixError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for MixError {
    fn from(err: serde_json::Error) -> Self {
        MixError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for MixError {
    fn from(err: config::ConfigError) -> Self {
        MixError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MixError>;
