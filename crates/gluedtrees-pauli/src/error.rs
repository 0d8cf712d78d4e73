//! Error types for the pauli crate.

use thiserror::Error;

/// Errors produced while assembling or decomposing the Hamiltonian.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PauliError {
    /// Register too small to host a glued-trees system; needs
    /// `dim = qubits − 2 ≥ 1`.
    #[error("register must have at least 3 qubits, got {qubits}")]
    InvalidQubits {
        /// The rejected register width.
        qubits: u32,
    },

    /// A matrix that must be square is not.
    #[error("matrix is not square: {rows}×{cols}")]
    NotSquare {
        /// Row count.
        rows: usize,
        /// Column count.
        cols: usize,
    },

    /// A dimension that must be a power of two is not — the register
    /// cannot host the operator.
    #[error("matrix dimension {size} is not a power of two")]
    NotPowerOfTwo {
        /// The offending dimension.
        size: usize,
    },

    /// Cholesky pivot failure — the system matrix is not
    /// positive-definite.
    #[error("matrix is not positive-definite (pivot {pivot} is non-positive)")]
    NotPositiveDefinite {
        /// Index of the failing pivot.
        pivot: usize,
    },

    /// Approximation target does not exceed the base list width.
    #[error("approximation target {qubits} does not exceed the base width {base}")]
    ApproximationTooSmall {
        /// Requested register width.
        qubits: u32,
        /// Width of the base list.
        base: u32,
    },

    /// Graph construction failed.
    #[error(transparent)]
    Graph(#[from] gluedtrees_graph::GraphError),
}

/// Result type for pauli operations.
pub type PauliResult<T> = Result<T, PauliError>;
