//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An integer setting could not be parsed.
    #[error("failed to parse {name}='{value}': {source}")]
    InvalidInteger {
        name: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// A decimal setting could not be parsed.
    #[error("failed to parse {name}='{value}': {source}")]
    InvalidFloat {
        name: &'static str,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    /// A boolean setting was not one of `true/false/1/0/yes/no/on/off`.
    #[error("failed to parse {name}='{value}': expected a boolean")]
    InvalidBool { name: &'static str, value: String },

    /// A setting parsed but is outside its allowed range.
    #[error("invalid {name}: {reason}")]
    InvalidValue { name: &'static str, reason: String },

    /// A setting that must not be empty was empty.
    #[error("{name} must not be empty")]
    EmptyValue { name: &'static str },

    /// Path exists but is not a directory (when a directory was expected).
    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },
}
