//! Prelude module for common re-exports.
//!
//! # Usage
//!
//! ```rust
//! use scg_error::prelude::*;
//! ```

// ─── Error value ────────────────────────────────────────────────────
pub use crate::cause::{Cause, UnknownCause};
pub use crate::contract::ApiError;
pub use crate::error::Error;
pub use crate::maybe::MaybeError;

// ─── Context ────────────────────────────────────────────────────────
pub use crate::context;
pub use crate::context::{ContextMap, ContextValue};

// ─── Construction ───────────────────────────────────────────────────
pub use crate::options::{ErrorOption, e, with_cause, with_context, with_detail, with_http_status};
pub use crate::wrap::{ResultExt, ensure, normalize, wrap, wrap_opt};

// ─── Traversal ──────────────────────────────────────────────────────
pub use crate::chain;

// ─── Configuration ──────────────────────────────────────────────────
pub use crate::config::{ConfigError, EnvelopeConfig};
