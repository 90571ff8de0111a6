use thiserror::Error;

/// Convenience result type for representation operations.
pub type ReprResult<T> = Result<T, ReprError>;

/// Error type shared by the representation matrix and its representations.
///
/// There is no retry path anywhere in the crate: every variant signals a
/// programming error in the caller, not a transient condition, and is expected
/// to propagate out to the benchmark harness uncaught.
#[derive(Debug, Error)]
pub enum ReprError {
    /// A structurally unsupported operation was attempted on a representation
    /// (e.g. an indexed write through a read-only view).
    #[error("representation '{representation}' does not support {operation}")]
    Unsupported {
        representation: &'static str,
        operation: &'static str,
    },

    /// Canonical storage could not be built, or a freshly built representation
    /// failed the content-equality validation against it.
    #[error("matrix construction failed: {message}")]
    Construction { message: String },
}

impl ReprError {
    /// Shorthand for the unsupported-operation contract violation.
    pub(crate) fn unsupported(representation: &'static str, operation: &'static str) -> Self {
        Self::Unsupported {
            representation,
            operation,
        }
    }
}
