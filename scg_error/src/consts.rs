//! Crate-wide constants.
//!
//! Single source of truth for the defaults used by the builder and by
//! normalization of foreign errors.

/// Default status applied by [`crate::options::e`] and by normalization.
pub const DEFAULT_HTTP_STATUS: u32 = 500;

/// Default client-safe detail applied by [`crate::options::e`].
pub const DEFAULT_DETAIL: &str = "error";

/// Code of the internal envelope produced when normalizing a foreign error.
pub const INTERNAL_CODE: &str = "internal.error";

/// Key of the internal envelope.
pub const INTERNAL_KEY: &str = "internal";

/// Detail of the internal envelope.
pub const INTERNAL_DETAIL: &str = "internal error";

/// Message of the placeholder cause substituted for an absent cause.
pub const UNKNOWN_CAUSE_MESSAGE: &str = "unknown";

/// Rendering of an absent error.
pub const NIL_MESSAGE: &str = "<nil>";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_envelope_is_consistent() {
        assert_eq!(DEFAULT_HTTP_STATUS, 500);
        assert!(INTERNAL_CODE.starts_with(INTERNAL_KEY));
        assert_ne!(INTERNAL_DETAIL, DEFAULT_DETAIL);
    }

    #[test]
    fn placeholder_messages_are_distinct() {
        assert_ne!(UNKNOWN_CAUSE_MESSAGE, NIL_MESSAGE);
    }
}
