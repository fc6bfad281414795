//! Error types for switch configuration loading.

use switcharoo_core::ColorParseError;
use thiserror::Error;

/// Error raised while loading a switch configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML syntax or shape error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
    /// Document root is neither a mapping nor empty
    #[error("Expected a mapping at the document root")]
    NotAMapping,
    /// Another root key sits beside `switch:`
    #[error("Unexpected key '{0}' next to 'switch'")]
    UnexpectedRootKey(String),
    /// A color field holds an unparseable value
    #[error("Invalid value for '{field}': {source}")]
    InvalidColor {
        /// Field name
        field: &'static str,
        /// Underlying parse failure
        #[source]
        source: ColorParseError,
    },
    /// Padding is negative or not finite
    #[error("Invalid value for 'padding': {0} (must be finite and non-negative)")]
    InvalidPadding(f32),
}
