//! End-to-end operator-list generation.
//!
//! graph → system matrix → Cholesky factor → block Hamiltonian → Pauli
//! expansion → magnitude sort → crop, with an approximation detour for
//! register widths past the exact-decomposition ceiling. Both the cache
//! and the decomposition backend are injected.

use gluedtrees_graph::GluedTrees;
use tracing::debug;

use crate::cache::OperatorCache;
use crate::crop;
use crate::decompose::Decomposer;
use crate::error::{PauliError, PauliResult};
use crate::matrix;
use crate::pauli::OperatorList;

/// Widest register decomposed exactly; anything wider is approximated
/// from this one's cropped list.
pub const MAX_EXACT_QUBITS: u32 = 13;

/// Default term budget after cropping.
pub const CROP_BUDGET: usize = 200;

/// Configuration for operator-list generation.
#[derive(Debug, Clone)]
pub struct PauliListBuilder {
    budget: usize,
    max_exact_qubits: u32,
    seed: Option<u64>,
}

impl Default for PauliListBuilder {
    fn default() -> Self {
        Self {
            budget: CROP_BUDGET,
            max_exact_qubits: MAX_EXACT_QUBITS,
            seed: None,
        }
    }
}

impl PauliListBuilder {
    /// Reference configuration: budget 200, exact ceiling 13 qubits,
    /// unseeded graph randomness.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the crop budget.
    #[must_use]
    pub fn budget(mut self, budget: usize) -> Self {
        self.budget = budget;
        self
    }

    /// Override the exact-decomposition ceiling.
    #[must_use]
    pub fn max_exact_qubits(mut self, qubits: u32) -> Self {
        self.max_exact_qubits = qubits;
        self
    }

    /// Seed the graph's leaf matching for reproducible lists.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Produce the cropped operator list for a register width.
    ///
    /// Cached lists are returned as-is. Widths past the exact ceiling are
    /// approximated from the ceiling width's list, which is itself
    /// obtained through this entry point and therefore cache-aware.
    /// Upstream failures (invalid width, non-positive-definite system
    /// matrix) propagate unchanged.
    pub fn operator_list(
        &self,
        qubits: u32,
        cache: &dyn OperatorCache,
        decomposer: &dyn Decomposer,
    ) -> PauliResult<OperatorList> {
        if qubits < 3 {
            return Err(PauliError::InvalidQubits { qubits });
        }
        if let Some(hit) = cache.get(qubits) {
            debug!(qubits, n_terms = hit.len(), "using cached operator list");
            return Ok(hit);
        }

        let list = if qubits > self.max_exact_qubits {
            let base = self.operator_list(self.max_exact_qubits, cache, decomposer)?;
            crop::approximate(&base, qubits)?
        } else {
            self.generate(qubits, decomposer)?
        };

        cache.put(qubits, &list);
        Ok(list)
    }

    fn generate(&self, qubits: u32, decomposer: &dyn Decomposer) -> PauliResult<OperatorList> {
        let dim = qubits - 2;
        let graph = GluedTrees::with_seed(dim, self.seed)?;
        let h = matrix::assemble(&graph)?;
        let mut list = decomposer.decompose(h.view())?;
        list.sort_by_magnitude();
        debug!(qubits, n_terms = list.len(), budget = self.budget, "generated exact operator list");
        Ok(crop::crop(&list, self.budget))
    }
}
