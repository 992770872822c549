//! Error types for urlsift-core
//!
//! Centralized error handling using `thiserror` for ergonomic error definitions.
//! Malformed URLs are not errors: the normalizer yields `None` for them and the
//! matcher fails open.

use thiserror::Error;

/// Main error type for urlsift-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Text buffer could not be decoded with any supported encoding
    #[error("Unable to decode input as any of: {}", .encodings.join(", "))]
    Decoding {
        /// Encodings that were attempted, in order
        encodings: Vec<&'static str>,
    },

    /// A named input (URL list, blocklist) failed to load
    #[error("Failed to load {name}: {source}")]
    Input {
        /// Which input failed
        name: &'static str,
        /// Underlying error
        #[source]
        source: Box<Error>,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// Path to the missing config file
        path: String,
    },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    ConfigValue {
        /// Configuration key
        key: String,
        /// Error message
        message: String,
    },

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a decoding error listing the attempted encodings
    pub fn decoding(encodings: &[&'static str]) -> Self {
        Self::Decoding {
            encodings: encodings.to_vec(),
        }
    }

    /// Attach the name of the input that failed
    pub fn input(name: &'static str, source: Error) -> Self {
        Self::Input {
            name,
            source: Box::new(source),
        }
    }

    /// Create a config value error
    pub fn config_value(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigValue {
            key: key.into(),
            message: message.into(),
        }
    }
}
