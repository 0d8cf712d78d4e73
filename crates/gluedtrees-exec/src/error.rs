//! Error types for the exec crate.

use thiserror::Error;

/// Errors surfaced by evolution backends.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExecError {
    /// The backend rejected or failed the evolution request.
    #[error("backend error: {0}")]
    Backend(String),

    /// The synthesized circuit exceeded the permitted depth.
    #[error("depth limit {max_depth} exceeded: {message}")]
    DepthExceeded {
        /// The limit that was in force.
        max_depth: u32,
        /// Backend-supplied detail.
        message: String,
    },
}

/// Result type for exec operations.
pub type ExecResult<T> = Result<T, ExecError>;
