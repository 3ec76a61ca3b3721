//! Error types for layout passes.

use thiserror::Error;

/// Errors a panel reports back to its host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A path panel has children but no path geometry to place them on.
    #[error("path geometry is missing; cannot place {children} child(ren)")]
    MissingPath {
        /// Number of children that needed placing
        children: usize,
    },

    /// Arrange received a different child list than the preceding measure.
    #[error("child count mismatch: measured {expected}, arranging {actual}")]
    ChildCountMismatch {
        /// Children seen by measure
        expected: usize,
        /// Children passed to arrange
        actual: usize,
    },

    /// A strategy parameter holds a value the panel cannot use.
    #[error("invalid value for '{name}': {message}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Error message
        message: String,
    },
}

/// Result alias for layout operations.
pub type LayoutResult<T> = Result<T, LayoutError>;
