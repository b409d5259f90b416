//! Input validation errors.
//!
//! These are raised at the input boundary, before any generator runs. The
//! display text is what the learner sees next to the input field.

use thiserror::Error;

use crate::graph::NodeId;

/// Result type for input validation.
pub type Result<T> = std::result::Result<T, InputError>;

/// Rejected user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The search target field was blank.
    #[error("Please enter a target value")]
    MissingTarget,

    /// A list of values was required but the field was blank.
    #[error("Please enter values")]
    MissingValues,

    /// A single value did not parse as an integer.
    #[error("Please enter a valid number")]
    InvalidNumber(String),

    /// A comma-separated list contained a token that is not an integer.
    #[error("Invalid input. Please enter comma-separated numbers")]
    InvalidList(String),

    /// Fewer elements than the algorithm needs.
    #[error("Please enter at least {min} numbers")]
    TooFew { min: usize, got: usize },

    /// More elements than can be visualized.
    #[error("Maximum {max} numbers allowed for visualization")]
    TooMany { max: usize, got: usize },

    /// Binary search input that is not in ascending order.
    #[error("Array must be sorted in ascending order")]
    Unsorted,

    /// A start, goal or source node that is not part of the graph.
    #[error("Unknown node {0}")]
    UnknownNode(NodeId),

    /// A graph node without a heuristic estimate.
    #[error("Missing heuristic for node {0}")]
    MissingHeuristic(NodeId),

    /// An edge with weight zero.
    #[error("Edge weights must be positive")]
    ZeroWeight { from: NodeId, to: NodeId },

    /// An empty edge list.
    #[error("Please enter at least one edge")]
    NoEdges,
}
