//! Error types for the merge crate.

use pxm_types::NodeKind;

/// Errors that abort a merge.
///
/// Schema-evolution irregularities are never errors; they are dropped or
/// passed through and recorded in the [`MergeReport`](crate::MergeReport).
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MergeError {
    /// The two nodes handed to a merge are of different kinds.
    #[error("kind mismatch at {path:?}: expected {expected}, got {actual}")]
    KindMismatch {
        path: String,
        expected: NodeKind,
        actual: NodeKind,
    },

    /// Nesting went deeper than the configured limit.
    #[error("nesting depth limit {limit} exceeded at {path:?}")]
    DepthExceeded { path: String, limit: usize },
}

/// Convenience alias for merge results.
pub type MergeResult<T> = Result<T, MergeError>;
