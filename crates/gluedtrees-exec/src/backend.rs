//! Evolution backend abstraction.
//!
//! A backend accepts an operator list and an evolution time and returns a
//! measurement-outcome distribution for `exp(-i·t·H)` applied to the
//! all-zeros register (which encodes the initial push on the entrance
//! oscillator, so no state preparation is needed). Depth and shot limits
//! travel with the request; the backend enforces its own timeout and
//! reports failure rather than hang.

use async_trait::async_trait;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use gluedtrees_pauli::OperatorList;

use crate::error::ExecResult;

/// One evolution request handed to a backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionRequest {
    /// The compressed operator list to exponentiate.
    pub operators: OperatorList,
    /// Evolution time t.
    pub time: f64,
    /// Maximum permitted circuit depth.
    pub max_depth: u32,
    /// Number of measurement shots.
    pub shots: u32,
}

/// Measurement-outcome distribution returned by a backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutcomeCounts {
    /// Shots per observed basis state, keyed by bitstring.
    pub counts: FxHashMap<String, u64>,
    /// Total shots executed.
    pub shots: u64,
}

impl OutcomeCounts {
    /// Fraction of shots observed in `state`; 0.0 when the state never
    /// appeared or no shots ran.
    pub fn proportion(&self, state: &str) -> f64 {
        if self.shots == 0 {
            return 0.0;
        }
        self.counts.get(state).copied().unwrap_or(0) as f64 / self.shots as f64
    }
}

/// External Hamiltonian-evolution capability.
#[async_trait]
pub trait EvolutionBackend: Send + Sync {
    /// Human-readable backend name for logging.
    fn name(&self) -> &str;

    /// Evolve under the operator list and measure.
    async fn evolve(&self, request: &EvolutionRequest) -> ExecResult<OutcomeCounts>;
}
