//! Error types for the graph crate.

use thiserror::Error;

/// Errors produced while constructing the glued-trees structure.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GraphError {
    /// Tree depth must be at least 1.
    #[error("tree depth must be at least 1, got {dim}")]
    InvalidDepth {
        /// The rejected depth parameter.
        dim: u32,
    },
}

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
