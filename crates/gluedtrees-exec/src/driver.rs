//! Time-sweep orchestration.
//!
//! The reference protocol runs one evolution per time offset in a window
//! centered on `t0 = 2·(q−2)`, from −12 to +12 in steps of 2. The calls
//! are independent — each receives its own immutable request and produces
//! its own outcome record — so they fan out through a bounded-concurrency
//! stream. Per-offset failures are captured in the corresponding sweep
//! point and never abort sibling offsets.

use std::sync::Arc;

use futures::stream::{self, StreamExt};
use tracing::{debug, warn};

use gluedtrees_pauli::OperatorList;

use crate::backend::{EvolutionBackend, EvolutionRequest, OutcomeCounts};

/// Reference circuit-depth ceiling.
pub const MAX_DEPTH: u32 = 1400;

/// Reference shot count per evolution.
pub const SHOTS: u32 = 8192;

/// Configuration of one time sweep.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Center time t0 of the window.
    pub center: f64,
    /// Signed offsets around the center, one evolution each.
    pub offsets: Vec<i32>,
    /// Maximum permitted circuit depth per evolution.
    pub max_depth: u32,
    /// Shots per evolution.
    pub shots: u32,
    /// Maximum evolutions in flight at once.
    pub concurrency: usize,
}

impl SweepConfig {
    /// Reference window for a register width: center `2·(qubits−2)`,
    /// offsets −12..=+12 in steps of 2, depth 1400, 8192 shots.
    pub fn reference(qubits: u32) -> Self {
        Self {
            center: 2.0 * (f64::from(qubits) - 2.0),
            offsets: (-12..=12).step_by(2).collect(),
            max_depth: MAX_DEPTH,
            shots: SHOTS,
            concurrency: 4,
        }
    }
}

/// Outcome of one offset in a sweep.
#[derive(Debug, Clone)]
pub struct SweepPoint {
    /// Signed offset from the window center.
    pub offset: i32,
    /// Absolute evolution time.
    pub time: f64,
    /// Per-offset result; an error here did not abort sibling offsets.
    pub outcome: Result<OutcomeCounts, String>,
}

/// Results of one full time sweep, ordered by offset.
#[derive(Debug, Clone)]
pub struct Sweep {
    /// One point per configured offset.
    pub points: Vec<SweepPoint>,
}

impl Sweep {
    /// Number of offsets that completed successfully.
    pub fn n_succeeded(&self) -> usize {
        self.points.iter().filter(|p| p.outcome.is_ok()).count()
    }
}

/// Sequencing and bookkeeping around an evolution backend.
pub struct SimulationDriver {
    backend: Arc<dyn EvolutionBackend>,
}

impl SimulationDriver {
    /// Wrap a backend.
    pub fn new(backend: Arc<dyn EvolutionBackend>) -> Self {
        Self { backend }
    }

    /// Run one evolution per configured offset and collect the outcome
    /// distributions, ordered by offset.
    pub async fn run_sweep(&self, operators: &OperatorList, config: &SweepConfig) -> Sweep {
        let concurrency = config.concurrency.max(1);
        let requests = config.offsets.iter().map(|&offset| {
            let backend = Arc::clone(&self.backend);
            let request = EvolutionRequest {
                operators: operators.clone(),
                time: config.center + f64::from(offset),
                max_depth: config.max_depth,
                shots: config.shots,
            };
            async move {
                debug!(offset, time = request.time, backend = backend.name(), "dispatching evolution");
                let outcome = backend.evolve(&request).await.map_err(|e| {
                    warn!(offset, error = %e, "evolution failed, keeping sibling offsets");
                    e.to_string()
                });
                SweepPoint {
                    offset,
                    time: request.time,
                    outcome,
                }
            }
        });

        let mut points: Vec<SweepPoint> = stream::iter(requests)
            .buffer_unordered(concurrency)
            .collect()
            .await;
        points.sort_by_key(|p| p.offset);
        Sweep { points }
    }
}
