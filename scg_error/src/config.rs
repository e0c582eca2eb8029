//! Configuration types for the error layer.
//!
//! [`EnvelopeConfig`] controls how foreign errors are normalized. It is plain
//! serde data, so applications embed it in their own config files.
//!
//! ```rust
//! use scg_error::config::EnvelopeConfig;
//! use scg_error::normalize_with;
//! use std::io;
//!
//! let envelope = EnvelopeConfig {
//!     http_status: 503,
//!     ..EnvelopeConfig::default()
//! };
//! envelope.validate().unwrap();
//!
//! let err = normalize_with(io::Error::other("timeout"), &envelope);
//! assert_eq!(err.http_status(), 503);
//! assert_eq!(err.code(), "internal.error");
//! ```

use crate::consts::{DEFAULT_HTTP_STATUS, INTERNAL_CODE, INTERNAL_DETAIL, INTERNAL_KEY};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for configuration loading and validation.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// Configuration file not found at specified path.
    #[error("Configuration file not found")]
    FileNotFound,

    /// TOML parsing failed.
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Semantic validation failed.
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

/// Envelope used when a foreign error is normalized into an
/// [`Error`](crate::Error).
///
/// Every field is optional in TOML and falls back to the internal envelope
/// (`500`, `internal.error`, `internal`, `internal error`).
///
/// # TOML Example
///
/// ```toml
/// [envelope]
/// http_status = 503
/// code = "upstream.unavailable"
/// key = "unavailable"
/// detail = "service temporarily unavailable"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnvelopeConfig {
    pub http_status: u32,
    pub code: String,
    pub key: String,
    pub detail: String,
}

impl Default for EnvelopeConfig {
    fn default() -> Self {
        Self {
            http_status: DEFAULT_HTTP_STATUS,
            code: INTERNAL_CODE.to_string(),
            key: INTERNAL_KEY.to_string(),
            detail: INTERNAL_DETAIL.to_string(),
        }
    }
}

impl EnvelopeConfig {
    /// Validate the envelope.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationError` if:
    /// - `http_status` is zero
    /// - `code` or `key` is empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http_status == 0 {
            return Err(ConfigError::ValidationError(
                "envelope http_status must be positive".to_string(),
            ));
        }
        if self.code.is_empty() {
            return Err(ConfigError::ValidationError(
                "envelope code cannot be empty".to_string(),
            ));
        }
        if self.key.is_empty() {
            return Err(ConfigError::ValidationError(
                "envelope key cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
