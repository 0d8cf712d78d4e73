//! Expansion of a dense Hamiltonian in the tensor-product Pauli basis.
//!
//! Every q-qubit Pauli string is a signed permutation matrix: column `j`
//! has its single non-zero entry in row `j ⊕ x`, where `x` flags the X/Y
//! positions, with a phase of ±1 or ±i fixed by the Z/Y positions. The
//! coefficient of string P in `H = Σ c_P · P` is therefore
//!
//!   c_P = Tr(P·H) / M = (1/M) Σ_j phase_P(j) · H[j, j ⊕ x]
//!
//! a single O(M) sweep per string instead of a dense matrix product.
//! Total cost is still Θ(4^q · M), which is why exact decomposition is
//! capped (see [`crate::pipeline::MAX_EXACT_QUBITS`]) and wider registers
//! go through [`crate::crop::approximate`].

use ndarray::ArrayView2;
use num_complex::Complex64;
use tracing::debug;

use crate::error::{PauliError, PauliResult};
use crate::pauli::{OperatorList, Pauli, PauliString, PauliTerm};

/// Coefficients at or below this magnitude are dropped.
const COEFF_EPS: f64 = 1e-12;

/// Source of tensor-product basis expansions.
///
/// The raw expansion is a pure function of the matrix; keeping it behind
/// a trait lets precomputed or counting backends stand in for the dense
/// computation without touching the compression policy.
pub trait Decomposer {
    /// Expand `h` into a list of weighted Pauli strings.
    fn decompose(&self, h: ArrayView2<'_, f64>) -> PauliResult<OperatorList>;
}

/// Direct dense decomposition of a real Hermitian matrix.
#[derive(Debug, Default, Clone, Copy)]
pub struct DenseDecomposer;

impl Decomposer for DenseDecomposer {
    fn decompose(&self, h: ArrayView2<'_, f64>) -> PauliResult<OperatorList> {
        let (rows, cols) = h.dim();
        if rows != cols {
            return Err(PauliError::NotSquare { rows, cols });
        }
        if rows < 2 || !rows.is_power_of_two() {
            return Err(PauliError::NotPowerOfTwo { size: rows });
        }
        let m = rows;
        let q = m.trailing_zeros() as usize;

        let mut terms = Vec::new();
        for code in 0..(1usize << (2 * q)) {
            let symbols = decode(code, q);

            // Label position p acts on index bit q-1-p.
            let mut xmask = 0usize;
            let mut phase_mask = 0usize;
            let mut n_y = 0u32;
            for (p, symbol) in symbols.iter().enumerate() {
                let bit = 1usize << (q - 1 - p);
                match symbol {
                    Pauli::I => {}
                    Pauli::X => xmask |= bit,
                    Pauli::Y => {
                        xmask |= bit;
                        phase_mask |= bit;
                        n_y += 1;
                    }
                    Pauli::Z => phase_mask |= bit,
                }
            }

            let mut acc = 0.0f64;
            for j in 0..m {
                let v = h[[j, j ^ xmask]];
                if v != 0.0 {
                    if (j & phase_mask).count_ones() % 2 == 0 {
                        acc += v;
                    } else {
                        acc -= v;
                    }
                }
            }
            let coeff = (Complex64::i().powu(n_y) * acc / m as f64).re;
            if coeff.abs() > COEFF_EPS {
                terms.push(PauliTerm::new(PauliString::new(symbols), coeff));
            }
        }

        debug!(size = m, n_terms = terms.len(), "expanded Hamiltonian in Pauli basis");
        Ok(OperatorList::from_terms(terms))
    }
}

/// Decode a base-4 string code, most significant digit first.
fn decode(code: usize, q: usize) -> Vec<Pauli> {
    (0..q)
        .map(|p| Pauli::ALPHABET[(code >> (2 * (q - 1 - p))) & 3])
        .collect()
}
