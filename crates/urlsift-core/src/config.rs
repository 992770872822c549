//! Configuration management for urlsift
//!
//! Strongly-typed configuration with TOML support. Every field has a
//! default, so an empty file is a valid configuration.

use crate::domain::ReducerKind;
use crate::error::{Error, Result};
use crate::filter::MatchPolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Largest accepted preview size
pub const MAX_PREVIEW_LIMIT: usize = 10_000;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Matching settings
    pub filter: FilterConfig,

    /// Output files and preview
    pub output: OutputConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::ConfigNotFound {
                path: path.display().to_string(),
            },
            _ => Error::Io(e),
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(Error::from)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.output.preview_limit > MAX_PREVIEW_LIMIT {
            return Err(Error::config_value(
                "output.preview_limit",
                format!("Must be at most {MAX_PREVIEW_LIMIT}"),
            ));
        }

        if self.output.kept_file.trim().is_empty() {
            return Err(Error::config_value("output.kept_file", "Must not be empty"));
        }
        if self.output.removed_file.trim().is_empty() {
            return Err(Error::config_value("output.removed_file", "Must not be empty"));
        }
        if self.output.kept_file == self.output.removed_file {
            return Err(Error::config_value(
                "output",
                "kept_file and removed_file must differ",
            ));
        }

        Ok(())
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }
}

/// Matching settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Match policy (suffix or exact)
    pub policy: MatchPolicy,
    /// Registrable-domain reducer (naive or public-suffix)
    pub reducer: ReducerKind,
}

/// Output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// File receiving kept URLs
    pub kept_file: String,
    /// File receiving removed URLs
    pub removed_file: String,
    /// Number of URLs shown per list in the preview
    pub preview_limit: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            kept_file: "cleaned_urls.txt".to_string(),
            removed_file: "removed_urls.txt".to_string(),
            preview_limit: 20,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level used when no verbosity flag is given
    pub level: String,
    /// Log file path (None = stderr only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// Enable JSON format logging
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            json_format: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.filter.policy, MatchPolicy::Suffix);
        assert_eq!(config.filter.reducer, ReducerKind::Naive);
        assert_eq!(config.output.kept_file, "cleaned_urls.txt");
        assert_eq!(config.output.removed_file, "removed_urls.txt");
        assert_eq!(config.output.preview_limit, 20);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = Config::from_toml(
            r#"
            [filter]
            policy = "exact"
            reducer = "public-suffix"

            [output]
            preview_limit = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.filter.policy, MatchPolicy::Exact);
        assert_eq!(config.filter.reducer, ReducerKind::PublicSuffix);
        assert_eq!(config.output.preview_limit, 5);
        assert_eq!(config.output.kept_file, "cleaned_urls.txt");
    }

    #[test]
    fn test_unknown_policy_rejected() {
        let err = Config::from_toml("[filter]\npolicy = \"fuzzy\"\n").unwrap_err();
        assert!(matches!(err, Error::TomlParse(_)));
    }

    // =========== Validation Tests ===========

    #[test]
    fn test_config_validation() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_config_validation_preview_limit() {
        let mut config = Config::default();
        config.output.preview_limit = MAX_PREVIEW_LIMIT + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_same_output_files() {
        let mut config = Config::default();
        config.output.removed_file = config.output.kept_file.clone();
        assert!(config.validate().is_err());

        config.output.removed_file = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load("/nonexistent/urlsift.toml").unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
    }

    #[test]
    fn test_load_unreadable_path_is_io_error() {
        // A directory exists but cannot be read as a file
        let dir = std::env::temp_dir();
        let err = Config::load(&dir).unwrap_err();
        assert!(matches!(err, Error::Io(_)), "unexpected error: {err:?}");
    }
}
