//! SCG Error Library
//!
//! A transport-agnostic structured error value and the helpers to build,
//! wrap and normalize it.
//!
//! # Module Structure
//!
//! - [`error`] - The [`Error`] value
//! - [`context`] - Structured context model and the [`context!`] macro
//! - [`cause`] - Shared cause handle and the `"unknown"` placeholder
//! - [`contract`] - The [`ApiError`] trait consumers can depend on
//! - [`options`] - Option-driven construction via [`e`]
//! - [`wrap`] - [`wrap`], [`ensure`] and friends
//! - [`chain`] - Causal-chain traversal
//! - [`maybe`] - Absent-safe [`MaybeError`]
//! - [`config`] - The normalization envelope and its validation
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Usage
//!
//! ```rust
//! use scg_error::prelude::*;
//! use std::io;
//!
//! let err = wrap(io::Error::other("row not found"), 404, "customer.not_found", "not_found", "customer 42 not found", None)
//!     .with_context_kv("customer_id", "42");
//!
//! assert_eq!(err.to_string(), "customer.not_found [not_found] (404): row not found");
//! assert_eq!(err.detail(), "customer 42 not found");
//! assert!(chain::find::<io::Error>(&err).is_some());
//! ```

pub mod cause;
pub mod chain;
pub mod config;
pub mod consts;
pub mod context;
pub mod contract;
pub mod error;
pub mod maybe;
pub mod options;
pub mod prelude;
pub mod wrap;

pub use cause::{BoxError, Cause, UnknownCause};
pub use context::{ContextMap, ContextValue};
pub use contract::ApiError;
pub use error::Error;
pub use maybe::MaybeError;
pub use options::{ErrorOption, e};
pub use wrap::{ResultExt, ensure, ensure_with, normalize, normalize_with, wrap, wrap_opt};

/// Result type alias defaulting to [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
