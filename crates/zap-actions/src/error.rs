// error.rs
//
// Error type for the few fallible entry points (name parsing, config loading).
// Stepping actions never fails.

use thiserror::Error;

/// Errors produced while parsing names or loading configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// No easing function is registered under this name.
    #[error("unknown easing '{0}'")]
    UnknownEasing(String),

    /// No interpolation path is registered under this name.
    #[error("unknown interpolation path '{0}'")]
    UnknownPath(String),

    /// A configuration value is out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// The configuration document could not be parsed.
    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
