//! Error types for contagion_core.
//!
//! Ticking a population never fails; the only fallible step is building one,
//! so every error here is a configuration error raised at startup.

use thiserror::Error;

/// Construction-time configuration failure.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A parameter is out of its allowed range
    #[error("Invalid configuration for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },

    /// Config file could not be read
    #[error("File system error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML for `SimConfig`
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type alias for contagion_core operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

impl ConfigError {
    /// Creates a new validation error for `field`.
    #[must_use]
    pub fn invalid<S: Into<String>>(field: &'static str, reason: S) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Fails with [`ConfigError::Invalid`] unless `value` is finite and strictly positive.
pub(crate) fn ensure_positive(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(
            field,
            format!("must be a positive finite number, got {value}"),
        ))
    }
}
