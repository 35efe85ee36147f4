//! Error types for the seq crate.

use thiserror::Error;

/// Errors raised by terminal operators with a "must exist" contract.
///
/// Streaming and buffering operators never produce these for missing
/// elements: an empty upstream is simply exhaustion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeqError {
    /// `first()` was called on a sequence that yielded nothing.
    #[error("the source sequence is empty")]
    EmptySequence,

    /// `first_where()` exhausted the sequence without a matching element.
    #[error("no element satisfies the condition")]
    NoMatch,

    /// A sort key selector produced keys that are not totally ordered.
    #[error("sort keys are not totally ordered")]
    UnorderedKeys,
}

/// Result type for seq operations.
pub type Result<T> = std::result::Result<T, SeqError>;
