//! `gluedtrees-pauli` — from glued-trees graph to hardware-sized Pauli list.
//!
//! The pipeline turns the graph into a coupled-oscillator system matrix
//! `A = 3·I − Adj`, Cholesky-factors it, pads the factor to land the block
//! Hamiltonian
//!
//!   H = −[[0, B], [Bᵀ, 0]]
//!
//! on a power-of-two dimension `2^(dim+2)`, expands H in the tensor-product
//! Pauli basis and compresses the expansion to a fixed term budget so the
//! eventual evolution circuit stays within a feasible depth. Registers too
//! wide to decompose exactly are approximated by structurally padding the
//! widest exact list.
//!
//! # Quick start
//!
//! ```rust
//! use gluedtrees_pauli::{DenseDecomposer, MemoryCache, PauliListBuilder};
//!
//! let cache = MemoryCache::default();
//! let list = PauliListBuilder::new()
//!     .seed(7)
//!     .operator_list(4, &cache, &DenseDecomposer)
//!     .unwrap();
//! assert_eq!(list.num_qubits(), 4);
//! assert!(list.len() <= 200);
//! ```

pub mod cache;
pub mod crop;
pub mod decompose;
pub mod error;
pub mod matrix;
pub mod pauli;
pub mod pipeline;

pub use cache::{JsonFileCache, MemoryCache, NoCache, OperatorCache};
pub use crop::{approximate, crop};
pub use decompose::{Decomposer, DenseDecomposer};
pub use error::{PauliError, PauliResult};
pub use pauli::{OperatorList, Pauli, PauliString, PauliTerm};
pub use pipeline::{PauliListBuilder, CROP_BUDGET, MAX_EXACT_QUBITS};
