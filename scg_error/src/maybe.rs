//! Absent-safe handle around an optional [`Error`].
//!
//! Every accessor and mutator on [`MaybeError`] is defined for the absent
//! case: getters return zero values, mutators return the absent handle
//! unchanged, and `Display` renders `<nil>`.

use crate::cause::Cause;
use crate::consts::NIL_MESSAGE;
use crate::context::{ContextMap, ContextValue};
use crate::error::Error;
use std::fmt;

/// An [`Error`] that may be absent.
#[derive(Debug, Clone, Default)]
pub struct MaybeError(Option<Error>);

impl MaybeError {
    /// The absent handle.
    pub const fn none() -> Self {
        Self(None)
    }

    #[inline]
    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }

    #[inline]
    pub fn is_some(&self) -> bool {
        self.0.is_some()
    }

    #[inline]
    pub fn as_error(&self) -> Option<&Error> {
        self.0.as_ref()
    }

    #[inline]
    pub fn into_inner(self) -> Option<Error> {
        self.0
    }

    /// `0` when absent.
    pub fn http_status(&self) -> u32 {
        self.0.as_ref().map_or(0, Error::http_status)
    }

    /// Empty when absent.
    pub fn code(&self) -> &str {
        self.0.as_ref().map_or("", Error::code)
    }

    /// Empty when absent.
    pub fn key(&self) -> &str {
        self.0.as_ref().map_or("", Error::key)
    }

    /// Empty when absent.
    pub fn detail(&self) -> &str {
        self.0.as_ref().map_or("", Error::detail)
    }

    pub fn context(&self) -> Option<ContextMap> {
        self.0.as_ref().and_then(Error::context)
    }

    pub fn unwrap_cause(&self) -> Option<&Cause> {
        self.0.as_ref().and_then(Error::shared_cause)
    }

    /// No-op when absent.
    #[must_use]
    pub fn with_context_kv(self, key: impl Into<String>, value: impl Into<ContextValue>) -> Self {
        Self(self.0.map(|err| err.with_context_kv(key, value)))
    }

    /// No-op when absent.
    #[must_use]
    pub fn with_context_map<I, K, V>(self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ContextValue>,
    {
        Self(self.0.map(|err| err.with_context_map(entries)))
    }
}

impl From<Error> for MaybeError {
    fn from(err: Error) -> Self {
        Self(Some(err))
    }
}

impl From<Option<Error>> for MaybeError {
    fn from(err: Option<Error>) -> Self {
        Self(err)
    }
}

impl From<MaybeError> for Option<Error> {
    fn from(maybe: MaybeError) -> Self {
        maybe.0
    }
}

impl fmt::Display for MaybeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(err) => fmt::Display::fmt(err, f),
            None => f.write_str(NIL_MESSAGE),
        }
    }
}
