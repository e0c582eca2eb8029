//! Shared handle to an underlying error.

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Boxed, thread-safe error accepted by the normalization helpers.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Placeholder cause substituted when a wrap is requested without a cause.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Error)]
#[error("{msg}", msg = crate::consts::UNKNOWN_CAUSE_MESSAGE)]
pub struct UnknownCause;

/// Reference-counted handle to the error an [`Error`](crate::Error) wraps.
///
/// Cloning a `Cause` never clones the underlying error: every clone points at
/// the same allocation, so identity checks such as
/// [`chain::contains`](crate::chain::contains) keep working after the owning
/// error has been cloned or moved.
#[derive(Clone)]
pub struct Cause(Arc<dyn StdError + Send + Sync + 'static>);

impl Cause {
    pub fn new<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self(Arc::new(err))
    }

    /// Take ownership of an already boxed error.
    pub fn from_boxed(err: BoxError) -> Self {
        Self(Arc::from(err))
    }

    /// The `"unknown"` placeholder.
    pub fn unknown() -> Self {
        Self::new(UnknownCause)
    }

    /// Borrow the underlying error as a plain trait object.
    #[inline]
    pub fn as_error(&self) -> &(dyn StdError + 'static) {
        &*self.0
    }

    /// Typed view of the underlying error.
    pub fn downcast_ref<T: StdError + 'static>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    /// Returns true if both handles point at the same error.
    #[inline]
    pub fn ptr_eq(&self, other: &Cause) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Returns true if this is the placeholder substituted for an absent cause.
    pub fn is_unknown(&self) -> bool {
        self.downcast_ref::<UnknownCause>().is_some()
    }
}

impl<E> From<E> for Cause
where
    E: StdError + Send + Sync + 'static,
{
    fn from(err: E) -> Self {
        Self::new(err)
    }
}

impl fmt::Debug for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::UNKNOWN_CAUSE_MESSAGE;
    use std::io;

    #[test]
    fn test_unknown_cause_message() {
        let cause = Cause::unknown();
        assert_eq!(cause.to_string(), UNKNOWN_CAUSE_MESSAGE);
        assert!(cause.is_unknown());
    }

    #[test]
    fn test_clone_preserves_identity() {
        let cause = Cause::new(io::Error::other("row not found"));
        let copy = cause.clone();

        assert!(cause.ptr_eq(&copy));
        assert!(!cause.ptr_eq(&Cause::new(io::Error::other("row not found"))));
    }

    #[test]
    fn test_as_error_points_at_shared_allocation() {
        let cause = Cause::new(io::Error::other("boom"));
        let a = cause.as_error() as *const dyn StdError;
        let b = cause.clone().as_error() as *const dyn StdError;

        assert!(std::ptr::addr_eq(a, b));
    }

    #[test]
    fn test_downcast() {
        let cause: Cause = io::Error::new(io::ErrorKind::NotFound, "missing").into();

        let inner = cause.downcast_ref::<io::Error>().unwrap();
        assert_eq!(inner.kind(), io::ErrorKind::NotFound);
        assert!(!cause.is_unknown());
    }

    #[test]
    fn test_from_boxed() {
        let boxed: BoxError = "plain message".into();
        let cause = Cause::from_boxed(boxed);

        assert_eq!(cause.to_string(), "plain message");
    }
}
