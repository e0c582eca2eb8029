//! Minimal error contract other crates can depend on instead of the
//! concrete [`Error`](crate::Error) type.
//!
//! # Design
//!
//! The trait carries only getters and the cause link so it stays
//! transport-agnostic. Adapters (HTTP, gRPC, ...) encode from this surface.

use crate::context::ContextMap;
use std::error::Error as StdError;

/// Stable, read-only surface of a structured error.
///
/// Implementations must:
/// - return a defensive copy from [`context`](ApiError::context), never the
///   internal map, and `None` rather than an empty map;
/// - keep `Display` free of `detail` and `context`;
/// - expose their cause through both `source()` and
///   [`unwrap_cause`](ApiError::unwrap_cause).
pub trait ApiError: StdError + Send + Sync + 'static {
    /// Transport status code.
    fn http_status(&self) -> u32;

    /// Stable machine-facing code, e.g. `customer.not_found`.
    fn code(&self) -> &str;

    /// Category or namespace, e.g. `not_found`.
    fn key(&self) -> &str;

    /// Client-safe human detail.
    fn detail(&self) -> &str;

    /// Defensive copy of the structured context.
    fn context(&self) -> Option<ContextMap>;

    /// The wrapped error, if any.
    fn unwrap_cause(&self) -> Option<&(dyn StdError + 'static)> {
        self.source()
    }
}
