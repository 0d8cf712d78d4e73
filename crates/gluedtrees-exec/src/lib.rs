//! `gluedtrees-exec` — time-sweep orchestration for glued-trees evolution.
//!
//! Hamiltonian simulation itself is an external capability hidden behind
//! [`EvolutionBackend`]; this crate sequences the reference time window
//! around `t ≈ 2n` (where the entrance push is expected to reach the exit
//! oscillator), fans the per-offset evolutions out with bounded
//! concurrency, and extracts the exit-state proportion series from the
//! returned outcome distributions. A failed offset is recorded against
//! that offset only — partial sweeps are valid results.

pub mod backend;
pub mod driver;
pub mod error;
pub mod series;

pub use backend::{EvolutionBackend, EvolutionRequest, OutcomeCounts};
pub use driver::{SimulationDriver, Sweep, SweepConfig, SweepPoint, MAX_DEPTH, SHOTS};
pub use error::{ExecError, ExecResult};
pub use series::{exit_state_label, SeriesPoint};
