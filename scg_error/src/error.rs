//! The structured error value.
//!
//! [`Error`] carries a transport status, a stable code, a category key, a
//! client-safe detail, an optional structured context and an optional cause.
//!
//! # Ownership convention
//!
//! The `with_*` builders consume and return the value, the `set_*`/`merge_*`
//! setters take `&mut self`. Both are meant for the construction phase while
//! a single flow owns the error. Once the error has been handed to another
//! component treat it as immutable; readers only ever get copies of the
//! context.

use crate::cause::Cause;
use crate::context::{ContextMap, ContextValue};
use crate::contract::ApiError;
use static_assertions::assert_impl_all;
use std::error::Error as StdError;
use std::fmt;

/// Canonical structured error.
#[derive(Debug, Clone)]
pub struct Error {
    pub(crate) http_status: u32,
    pub(crate) code: String,
    pub(crate) key: String,
    pub(crate) detail: String,
    /// Never `Some(empty)`.
    pub(crate) context: Option<ContextMap>,
    pub(crate) cause: Option<Cause>,
}

assert_impl_all!(Error: ApiError, Clone, Send, Sync);

impl Error {
    /// Create an error from its parts.
    ///
    /// An empty `context` is stored as no context. Use
    /// [`with_cause`](Error::with_cause) to attach an underlying error.
    pub fn new(
        http_status: u32,
        code: impl Into<String>,
        key: impl Into<String>,
        detail: impl Into<String>,
        context: Option<ContextMap>,
    ) -> Self {
        Self {
            http_status,
            code: code.into(),
            key: key.into(),
            detail: detail.into(),
            context: normalize_context(context),
            cause: None,
        }
    }

    #[inline]
    pub fn http_status(&self) -> u32 {
        self.http_status
    }

    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Client-safe detail, suitable for user-facing display.
    #[inline]
    pub fn detail(&self) -> &str {
        &self.detail
    }

    /// Copy of the context, `None` when there is none.
    ///
    /// Nested maps are cloned recursively, so mutating the returned map (or
    /// any map nested in it) never reaches this error. Every call returns a
    /// fresh copy.
    pub fn context(&self) -> Option<ContextMap> {
        self.context.clone()
    }

    /// Copy of a single context entry.
    pub fn context_value(&self, key: &str) -> Option<ContextValue> {
        self.context.as_ref()?.get(key).cloned()
    }

    #[inline]
    pub fn has_context(&self) -> bool {
        self.context.is_some()
    }

    /// Shared handle to the wrapped error.
    #[inline]
    pub fn shared_cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    /// Attach or replace the underlying error.
    #[must_use]
    pub fn with_cause(mut self, cause: impl Into<Cause>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// Set one context entry, creating the context on first use.
    #[must_use]
    pub fn with_context_kv(mut self, key: impl Into<String>, value: impl Into<ContextValue>) -> Self {
        self.set_context_kv(key, value);
        self
    }

    /// Merge entries into the context. Existing keys are overwritten, an
    /// empty input leaves the error untouched.
    #[must_use]
    pub fn with_context_map<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ContextValue>,
    {
        self.merge_context(entries);
        self
    }

    /// In-place form of [`with_context_kv`](Error::with_context_kv).
    pub fn set_context_kv(&mut self, key: impl Into<String>, value: impl Into<ContextValue>) -> &mut Self {
        self.context
            .get_or_insert_with(ContextMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// In-place form of [`with_context_map`](Error::with_context_map).
    ///
    /// Borrowed maps are accepted and cloned on write.
    pub fn merge_context<I, K, V>(&mut self, entries: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ContextValue>,
    {
        let mut entries = entries.into_iter().peekable();
        if entries.peek().is_none() {
            return self;
        }

        let ctx = self.context.get_or_insert_with(ContextMap::new);
        for (k, v) in entries {
            ctx.insert(k.into(), v.into());
        }
        self
    }
}

/// Empty maps collapse to "no context".
pub(crate) fn normalize_context(context: Option<ContextMap>) -> Option<ContextMap> {
    context.filter(|ctx| !ctx.is_empty())
}

impl fmt::Display for Error {
    /// Compact form `code [key] (status)`, followed by `: cause` when present.
    /// Detail and context are never rendered.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] ({})", self.code, self.key, self.http_status)?;
        if let Some(cause) = &self.cause {
            write!(f, ": {cause}")?;
        }
        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause.as_ref().map(Cause::as_error)
    }
}

impl ApiError for Error {
    fn http_status(&self) -> u32 {
        self.http_status
    }

    fn code(&self) -> &str {
        &self.code
    }

    fn key(&self) -> &str {
        &self.key
    }

    fn detail(&self) -> &str {
        &self.detail
    }

    fn context(&self) -> Option<ContextMap> {
        Error::context(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context;
    use std::io;

    #[test]
    fn test_getters() {
        let err = Error::new(
            404,
            "customer.not_found",
            "not_found",
            "customer 42 not found",
            Some(context! { "a" => 1 }),
        );

        assert_eq!(err.http_status(), 404);
        assert_eq!(err.code(), "customer.not_found");
        assert_eq!(err.key(), "not_found");
        assert_eq!(err.detail(), "customer 42 not found");
        assert_eq!(err.context(), Some(context! { "a" => 1 }));
        assert!(err.shared_cause().is_none());
    }

    #[test]
    fn test_empty_context_is_absent() {
        let err = Error::new(200, "c", "k", "d", Some(ContextMap::new()));
        assert!(err.context().is_none());
        assert!(!err.has_context());

        let err = Error::new(200, "c", "k", "d", None);
        assert!(err.context().is_none());
    }

    #[test]
    fn test_display_without_cause() {
        let err = Error::new(500, "internal.error", "internal", "internal error", None);
        assert_eq!(err.to_string(), "internal.error [internal] (500)");
    }

    #[test]
    fn test_display_with_cause() {
        let err = Error::new(404, "customer.not_found", "not_found", "missing", None)
            .with_cause(io::Error::other("row not found"));
        assert_eq!(
            err.to_string(),
            "customer.not_found [not_found] (404): row not found"
        );
    }

    #[test]
    fn test_display_nests_error_causes() {
        let inner = Error::new(404, "customer.not_found", "not_found", "missing", None)
            .with_cause(io::Error::other("db"));
        let outer = Error::new(500, "repository.failure", "internal", "failed", None).with_cause(inner);

        assert_eq!(
            outer.to_string(),
            "repository.failure [internal] (500): customer.not_found [not_found] (404): db"
        );
    }

    #[test]
    fn test_source_exposes_cause() {
        let err = Error::new(500, "c", "k", "d", None).with_cause(io::Error::other("underlying"));
        let source = err.source().expect("source missing");
        assert_eq!(source.to_string(), "underlying");
        assert!(source.downcast_ref::<io::Error>().is_some());
    }

    #[test]
    fn test_context_kv_creates_map_on_first_use() {
        let err = Error::new(500, "x", "y", "z", None).with_context_kv("a", 1);
        assert_eq!(err.context_value("a"), Some(ContextValue::Int(1)));
        assert!(err.context_value("missing").is_none());
    }

    #[test]
    fn test_merge_overwrites_existing_keys() {
        let mut err = Error::new(500, "x", "y", "z", None);
        err.set_context_kv("a", 1)
            .merge_context(context! { "b" => 2, "a" => 3 });

        assert_eq!(err.context(), Some(context! { "a" => 3, "b" => 2 }));
    }

    #[test]
    fn test_merge_empty_input_keeps_context_absent() {
        let err = Error::new(500, "x", "y", "z", None)
            .with_context_map(ContextMap::new())
            .with_context_map(Vec::<(String, ContextValue)>::new());
        assert!(err.context().is_none());
    }

    #[test]
    fn test_merge_borrowed_map_clones_on_write() {
        let mut source = context! { "p" => 1 };
        let mut err = Error::new(500, "x", "y", "z", None);
        err.merge_context(&source);

        source.insert("p".to_string(), 2.into());
        assert_eq!(err.context_value("p"), Some(ContextValue::Int(1)));
    }

    #[test]
    fn test_context_copies_are_independent() {
        let err = Error::new(500, "x", "y", "z", Some(context! { "a" => 1 }));

        let mut first = err.context().unwrap();
        first.insert("b".to_string(), 3.into());

        assert_ne!(Some(first), err.context());
        assert_eq!(err.context().unwrap().len(), 1);
    }

    #[test]
    fn test_clone_shares_cause() {
        let err = Error::new(500, "x", "y", "z", None).with_cause(io::Error::other("shared"));
        let copy = err.clone();

        assert!(err.shared_cause().unwrap().ptr_eq(copy.shared_cause().unwrap()));
    }
}
