//! Startup configuration errors.

use std::path::PathBuf;

use thiserror::Error;

/// Error raised while assembling the startup configuration.
///
/// A missing override file is not an error; every other failure to read,
/// parse or apply it is, and aborts initialization.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The override file exists but could not be read.
    #[error("failed to read config override '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The override file is not valid YAML/JSON.
    #[error("failed to parse config override '{}': {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// The override document parsed, but its top level is not a map.
    #[error("config override '{}' must be a map of constant names to values", path.display())]
    NotAMap { path: PathBuf },

    /// The override file has an extension we don't know how to parse.
    #[error(
        "unsupported config override format '{}' (expected .yaml, .yml or .json)",
        path.display()
    )]
    UnsupportedFormat { path: PathBuf },

    /// An override names a constant that does not exist.
    #[error("unknown config constant '{key}'")]
    UnknownKey { key: String },

    /// An override value has the wrong shape for its constant.
    #[error("invalid value for config constant '{key}': {message}")]
    InvalidValue { key: String, message: String },
}
