//! Error types for algolab-structures.

use thiserror::Error;

/// Result type for structure operations.
pub type Result<T> = std::result::Result<T, StructureError>;

/// Errors raised by structure operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
    /// Insertion position outside `0..=len`.
    #[error("Invalid index: {index}. Valid range: 0-{len}")]
    IndexOutOfRange { index: usize, len: usize },
}
