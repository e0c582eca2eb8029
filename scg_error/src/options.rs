//! Option-driven construction via [`e`].
//!
//! ```rust
//! use scg_error::options::{e, with_detail, with_http_status};
//!
//! let err = e("validation.failed", "validation", [
//!     with_http_status(400),
//!     with_detail("payload invalid"),
//! ]);
//! assert_eq!(err.http_status(), 400);
//! ```

use crate::cause::Cause;
use crate::consts::{DEFAULT_DETAIL, DEFAULT_HTTP_STATUS};
use crate::context::ContextMap;
use crate::error::{Error, normalize_context};

/// A single construction option. Each variant sets exactly one attribute.
#[derive(Debug, Clone)]
pub enum ErrorOption {
    HttpStatus(u32),
    Detail(String),
    Context(ContextMap),
    Cause(Cause),
}

impl ErrorOption {
    /// Apply this option to `err`, replacing whatever was set before.
    pub fn apply(self, err: &mut Error) {
        match self {
            Self::HttpStatus(status) => err.http_status = status,
            Self::Detail(detail) => err.detail = detail,
            Self::Context(ctx) => err.context = normalize_context(Some(ctx)),
            Self::Cause(cause) => err.cause = Some(cause),
        }
    }
}

/// Override the default `500` status.
pub fn with_http_status(status: u32) -> ErrorOption {
    ErrorOption::HttpStatus(status)
}

/// Override the default `"error"` detail.
pub fn with_detail(detail: impl Into<String>) -> ErrorOption {
    ErrorOption::Detail(detail.into())
}

/// Replace the whole context. The map is moved in; callers keeping a copy
/// cannot reach the error's context through it.
pub fn with_context(ctx: ContextMap) -> ErrorOption {
    ErrorOption::Context(ctx)
}

/// Attach the underlying error, reachable through `source()`.
pub fn with_cause(cause: impl Into<Cause>) -> ErrorOption {
    ErrorOption::Cause(cause.into())
}

/// Build an error from a code and key plus options.
///
/// Defaults: status 500, detail `"error"`, no context, no cause. Options are
/// applied left to right, so a later option wins over an earlier one touching
/// the same attribute.
pub fn e<I>(code: impl Into<String>, key: impl Into<String>, options: I) -> Error
where
    I: IntoIterator<Item = ErrorOption>,
{
    let mut err = Error::new(DEFAULT_HTTP_STATUS, code, key, DEFAULT_DETAIL, None);
    for option in options {
        option.apply(&mut err);
    }
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn test_defaults() {
        let err = e("validation.failed", "validation", []);

        assert_eq!(err.http_status(), 500);
        assert_eq!(err.detail(), "error");
        assert!(err.context().is_none());
        assert!(err.source().is_none());
    }

    #[test]
    fn test_all_options() {
        let err = e(
            "validation.failed",
            "validation",
            [
                with_http_status(400),
                with_detail("payload invalid"),
                with_context(context! { "x" => 1 }),
                with_cause(io::Error::other("decode")),
            ],
        );

        assert_eq!(err.http_status(), 400);
        assert_eq!(err.detail(), "payload invalid");
        assert_eq!(err.context(), Some(context! { "x" => 1 }));
        assert_eq!(err.source().unwrap().to_string(), "decode");
    }

    #[test]
    fn test_later_options_win() {
        let err = e(
            "c",
            "k",
            vec![
                with_http_status(400),
                with_detail("first"),
                with_http_status(422),
                with_context(context! { "a" => 1 }),
                with_context(context! { "b" => 2 }),
                with_detail("second"),
            ],
        );

        assert_eq!(err.http_status(), 422);
        assert_eq!(err.detail(), "second");
        assert_eq!(err.context(), Some(context! { "b" => 2 }));
    }

    #[test]
    fn test_empty_context_option_is_absent() {
        let err = e("c", "k", [with_context(context! { "a" => 1 }), with_context(ContextMap::new())]);
        assert!(err.context().is_none());
    }

    #[test]
    fn test_context_option_is_detached_from_caller_copy() {
        let mut ctx = context! { "k" => "v" };
        let err = e("c", "k", [with_context(ctx.clone())]);
        ctx.insert("k".to_string(), "v2".into());

        assert_eq!(err.context_value("k").unwrap().as_str(), Some("v"));
    }
}
