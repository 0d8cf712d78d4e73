//! System-matrix assembly.
//!
//! The coupled-oscillator system matrix is `A = 3·I_N − Adj` under the
//! graph's canonical entrance-to-exit ordering. A different node ordering
//! produces a permutation-conjugated A — identical structure, different
//! matrix — so any interop with a differently-ordered producer has to go
//! through the canonical labeling.
//!
//! A is factored as `L·Lᵀ` (Cholesky; A is symmetric positive-definite by
//! construction), the factor is padded with four zero columns so the
//! block Hamiltonian
//!
//!   H = −[[0, B], [Bᵀ, 0]]
//!
//! has side `2N + 4 = 2^(dim+2)`, an exact power of two. If the tree
//! parameterization ever changes, the pad count must be recomputed to
//! keep that identity.

use gluedtrees_graph::GluedTrees;
use ndarray::{s, Array2, ArrayView2};
use tracing::debug;

use crate::error::{PauliError, PauliResult};

/// Zero columns appended to the Cholesky factor so `2N + PAD_COLS`
/// lands on a power of two for the glued-trees node count.
pub const PAD_COLS: usize = 4;

/// `A = 3·I_N − Adj` under the canonical ordering.
pub fn system_matrix(graph: &GluedTrees) -> Array2<f64> {
    let n = graph.n_nodes();
    let mut a = Array2::zeros((n, n));
    for i in 0..n {
        a[[i, i]] = 3.0;
        for j in graph.neighbors(i) {
            a[[i, j]] = -1.0;
        }
    }
    a
}

/// Lower-triangular `L` with `L·Lᵀ = A`.
///
/// Requires A symmetric positive-definite; a non-positive pivot fails
/// with [`PauliError::NotPositiveDefinite`].
pub fn cholesky(a: ArrayView2<'_, f64>) -> PauliResult<Array2<f64>> {
    let (rows, cols) = a.dim();
    if rows != cols {
        return Err(PauliError::NotSquare { rows, cols });
    }
    let mut l: Array2<f64> = Array2::zeros((rows, rows));
    for i in 0..rows {
        for j in 0..=i {
            let mut sum = a[[i, j]];
            for k in 0..j {
                sum -= l[[i, k]] * l[[j, k]];
            }
            if i == j {
                if sum <= 0.0 {
                    return Err(PauliError::NotPositiveDefinite { pivot: i });
                }
                l[[i, j]] = sum.sqrt();
            } else {
                l[[i, j]] = sum / l[[j, j]];
            }
        }
    }
    Ok(l)
}

/// The factor `B`: Cholesky factor of A padded with [`PAD_COLS`] zero
/// columns, size `N × (N+4)`.
pub fn factor_matrix(a: ArrayView2<'_, f64>) -> PauliResult<Array2<f64>> {
    let n = a.nrows();
    let l = cholesky(a)?;
    let mut b = Array2::zeros((n, n + PAD_COLS));
    b.slice_mut(s![.., ..n]).assign(&l);
    Ok(b)
}

/// The block Hamiltonian `H = −[[0, B], [Bᵀ, 0]]`.
///
/// Fails with [`PauliError::NotPowerOfTwo`] when `rows + cols` is not a
/// power of two — only possible for factors that did not come from
/// [`factor_matrix`] over a glued-trees system matrix.
pub fn block_hamiltonian(b: ArrayView2<'_, f64>) -> PauliResult<Array2<f64>> {
    let (rows, cols) = b.dim();
    let m = rows + cols;
    if !m.is_power_of_two() {
        return Err(PauliError::NotPowerOfTwo { size: m });
    }
    let mut h = Array2::zeros((m, m));
    for i in 0..rows {
        for j in 0..cols {
            h[[i, rows + j]] = -b[[i, j]];
            h[[rows + j, i]] = -b[[i, j]];
        }
    }
    debug!(size = m, "assembled block Hamiltonian");
    Ok(h)
}

/// Full assembly: graph → A → B → H.
pub fn assemble(graph: &GluedTrees) -> PauliResult<Array2<f64>> {
    let a = system_matrix(graph);
    let b = factor_matrix(a.view())?;
    block_hamiltonian(b.view())
}
