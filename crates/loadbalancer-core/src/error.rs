//! Common error types for the loadbalancer controller.

use thiserror::Error;

/// A result type using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised by the core helpers.
///
/// Everything else in the status pipeline is total; I/O, conflicts and
/// retries belong to the client layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A compound identifier did not split into exactly two dot-separated segments.
    #[error("malformed identifier: unexpected format {value:?}")]
    MalformedIdentifier {
        /// The raw value that failed to parse.
        value: String,
    },
}

impl CoreError {
    /// Build a `MalformedIdentifier` error for the given raw value.
    #[must_use]
    pub fn malformed(value: impl Into<String>) -> Self {
        Self::MalformedIdentifier {
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_message_quotes_value() {
        let err = CoreError::malformed("a.b.c");
        assert_eq!(
            err.to_string(),
            "malformed identifier: unexpected format \"a.b.c\""
        );
    }
}
