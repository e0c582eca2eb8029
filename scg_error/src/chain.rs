//! Causal-chain traversal.
//!
//! Walks `source()` links starting at an error, so lookups see through every
//! wrapper that exposes its cause, whatever its concrete type.
//!
//! ```rust
//! use scg_error::{chain, wrap};
//! use std::io;
//!
//! let inner = wrap(io::Error::other("db not found"), 404, "customer.not_found", "not_found", "nf", None);
//! let outer = wrap(inner, 500, "repository.failure", "internal", "failure", None);
//!
//! assert_eq!(chain::find::<scg_error::Error>(&outer).unwrap().code(), "repository.failure");
//! assert_eq!(chain::find_innermost::<scg_error::Error>(&outer).unwrap().code(), "customer.not_found");
//! assert_eq!(chain::root_cause(&outer).to_string(), "db not found");
//! ```

use std::error::Error as StdError;
use std::iter::FusedIterator;

/// Iterator over an error followed by each of its sources.
#[derive(Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

impl FusedIterator for Chain<'_> {}

/// Iterate `err` and every error below it.
pub fn iter<'a>(err: &'a (dyn StdError + 'static)) -> Chain<'a> {
    Chain { next: Some(err) }
}

/// First error of type `T` in the chain, starting with `err` itself.
pub fn find<'a, T: StdError + 'static>(err: &'a (dyn StdError + 'static)) -> Option<&'a T> {
    iter(err).find_map(|e| e.downcast_ref::<T>())
}

/// Last (deepest) error of type `T` in the chain.
pub fn find_innermost<'a, T: StdError + 'static>(err: &'a (dyn StdError + 'static)) -> Option<&'a T> {
    iter(err).filter_map(|e| e.downcast_ref::<T>()).last()
}

/// Returns true if `target` is `err` or one of its sources.
///
/// Comparison is by identity, not by message.
pub fn contains(err: &(dyn StdError + 'static), target: &(dyn StdError + 'static)) -> bool {
    iter(err).any(|e| same_error(e, target))
}

/// The deepest error in the chain; `err` itself when it has no source.
pub fn root_cause<'a>(err: &'a (dyn StdError + 'static)) -> &'a (dyn StdError + 'static) {
    iter(err).last().unwrap_or(err)
}

#[inline]
fn same_error(a: &(dyn StdError + 'static), b: &(dyn StdError + 'static)) -> bool {
    std::ptr::addr_eq(a as *const dyn StdError, b as *const dyn StdError)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::cause::Cause;
    use std::io;
    use thiserror::Error as ThisError;

    #[derive(Debug, ThisError)]
    #[error("repository: {source}")]
    struct RepoError {
        #[source]
        source: Error,
    }

    #[test]
    fn test_iter_single() {
        let err = io::Error::other("alone");
        assert_eq!(iter(&err).count(), 1);
        assert_eq!(root_cause(&err).to_string(), "alone");
    }

    #[test]
    fn test_iter_order() {
        let err = Error::new(500, "outer", "k", "d", None)
            .with_cause(Error::new(404, "inner", "k", "d", None).with_cause(io::Error::other("root")));

        let messages: Vec<String> = iter(&err).map(|e| e.to_string()).collect();
        assert_eq!(messages.len(), 3);
        assert!(messages[0].starts_with("outer"));
        assert!(messages[1].starts_with("inner"));
        assert_eq!(messages[2], "root");
    }

    #[test]
    fn test_find_sees_through_foreign_wrappers() {
        let inner = Error::new(404, "customer.not_found", "not_found", "nf", None)
            .with_cause(io::Error::other("db"));
        let foreign = RepoError { source: inner };
        let outer = Error::new(500, "service.failure", "internal", "failed", None).with_cause(foreign);

        assert_eq!(find::<Error>(&outer).unwrap().code(), "service.failure");
        assert_eq!(find_innermost::<Error>(&outer).unwrap().code(), "customer.not_found");
        assert!(find::<RepoError>(&outer).is_some());
        assert_eq!(find::<io::Error>(&outer).unwrap().to_string(), "db");
    }

    #[test]
    fn test_find_missing_type() {
        let err = Error::new(500, "c", "k", "d", None);
        assert!(find::<io::Error>(&err).is_none());
        assert!(find_innermost::<io::Error>(&err).is_none());
    }

    #[test]
    fn test_contains_is_identity_based() {
        let cause = Cause::new(io::Error::other("same message"));
        let err = Error::new(500, "c", "k", "d", None).with_cause(cause.clone());
        let lookalike = io::Error::other("same message");

        assert!(contains(&err, cause.as_error()));
        assert!(contains(&err, &err));
        assert!(!contains(&err, &lookalike));
    }
}
