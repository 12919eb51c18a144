use thiserror::Error;

/// Convenience result type for collection operations.
pub type CollectResult<T> = Result<T, CollectError>;

/// Error type returned by fallible collection operations.
///
/// This is a single error enum shared across the whole operation set. All errors are
/// synchronous and local; a failing operation never mutates the receiver.
#[derive(Debug, Error)]
pub enum CollectError {
    /// The operation requires at least one element (`pop`, `random`, `reduce`,
    /// `avg`/`min`/`max`).
    #[error("collection is empty")]
    Empty,

    /// An argument is outside the operation's domain (e.g. a zero chunk size).
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Two collections were expected to have the same length (`combine`).
    #[error("length mismatch: left has {left} entries, right has {right}")]
    LengthMismatch { left: usize, right: usize },

    /// A spread element's shape does not match the expected arity
    /// (`map_spread`, [`crate::types::FromElement::from_spread`]).
    #[error("arity mismatch at index {index}: expected {expected} values, found {found}")]
    Arity {
        index: usize,
        expected: usize,
        found: usize,
    },

    /// An element does not expose the field named by a `group_by_field` selector.
    #[error("missing field '{field}' on element")]
    MissingField { field: String },
}
