//! Wrapping and normalization helpers.
//!
//! - [`wrap`] / [`wrap_opt`] attach a cause to a new [`Error`]
//! - [`ensure`] / [`normalize`] turn any error into an [`Error`], leaving
//!   values that already are one untouched
//! - [`ResultExt::ensure_api`] does the same on the error side of a `Result`

use crate::cause::{BoxError, Cause};
use crate::chain;
use crate::config::EnvelopeConfig;
use crate::context::ContextMap;
use crate::error::Error;
use tracing::{debug, trace};

/// Create an [`Error`] that wraps `cause`.
///
/// The cause stays reachable through `source()` and the
/// [`chain`](crate::chain) helpers.
pub fn wrap(
    cause: impl Into<Cause>,
    http_status: u32,
    code: impl Into<String>,
    key: impl Into<String>,
    detail: impl Into<String>,
    context: Option<ContextMap>,
) -> Error {
    Error::new(http_status, code, key, detail, context).with_cause(cause)
}

/// Like [`wrap`], but an absent cause is replaced by the
/// [`UnknownCause`](crate::cause::UnknownCause) placeholder so the chain is
/// never silently empty.
pub fn wrap_opt(
    cause: Option<Cause>,
    http_status: u32,
    code: impl Into<String>,
    key: impl Into<String>,
    detail: impl Into<String>,
    context: Option<ContextMap>,
) -> Error {
    let cause = cause.unwrap_or_else(|| {
        debug!("wrap without cause, substituting placeholder");
        Cause::unknown()
    });
    wrap(cause, http_status, code, key, detail, context)
}

/// Normalize an optional error.
///
/// - `None` stays `None`
/// - an [`Error`] is returned as is, without re-wrapping
/// - a foreign error with an [`Error`] somewhere in its `source()` chain
///   yields a clone of the first one found; the clone shares its cause
/// - anything else is wrapped in the internal envelope
///   (`500`, `internal.error`, `internal`, `internal error`) with the
///   original kept as cause
pub fn ensure<E: Into<BoxError>>(err: Option<E>) -> Option<Error> {
    err.map(normalize)
}

/// [`ensure`] with a custom envelope for foreign errors.
pub fn ensure_with<E: Into<BoxError>>(err: Option<E>, envelope: &EnvelopeConfig) -> Option<Error> {
    err.map(|err| normalize_with(err, envelope))
}

/// Non-optional form of [`ensure`].
pub fn normalize<E: Into<BoxError>>(err: E) -> Error {
    normalize_with(err, &EnvelopeConfig::default())
}

/// Non-optional form of [`ensure_with`].
pub fn normalize_with<E: Into<BoxError>>(err: E, envelope: &EnvelopeConfig) -> Error {
    let boxed: BoxError = err.into();
    match boxed.downcast::<Error>() {
        Ok(err) => *err,
        Err(foreign) => {
            if let Some(inner) = chain::find::<Error>(&*foreign) {
                trace!(code = inner.code(), "found error below foreign wrapper");
                return inner.clone();
            }
            trace!(code = %envelope.code, "normalizing foreign error");
            wrap(
                Cause::from_boxed(foreign),
                envelope.http_status,
                envelope.code.as_str(),
                envelope.key.as_str(),
                envelope.detail.as_str(),
                None,
            )
        }
    }
}

/// Normalize the error side of a `Result`.
pub trait ResultExt<T> {
    /// Map the error through [`normalize`].
    fn ensure_api(self) -> Result<T, Error>;

    /// Map the error through [`normalize_with`].
    fn ensure_api_with(self, envelope: &EnvelopeConfig) -> Result<T, Error>;
}

impl<T, E: Into<BoxError>> ResultExt<T> for Result<T, E> {
    fn ensure_api(self) -> Result<T, Error> {
        self.map_err(normalize)
    }

    fn ensure_api_with(self, envelope: &EnvelopeConfig) -> Result<T, Error> {
        self.map_err(|err| normalize_with(err, envelope))
    }
}
