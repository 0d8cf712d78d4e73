//! Exit-state series extraction.
//!
//! The quantum state tracking the exit oscillator's speed sits at basis
//! index `N−1 = 2^(q−1) − 3` under the canonical ordering (the top four
//! states belong to the zero-padded factor columns and track nothing).
//! The output artifact is the proportion of shots landing on that state
//! across the sweep window — the spike near the window center is the
//! entrance push "reaching" the exit.

use serde::Serialize;

use crate::driver::Sweep;

/// Basis label of the exit-oscillator speed state, a `qubits`-character
/// bitstring.
///
/// Requires `qubits ≥ 3`, the narrowest register the operator pipeline
/// accepts; debug builds assert on anything smaller.
pub fn exit_state_label(qubits: u32) -> String {
    debug_assert!(qubits >= 3, "register must have at least 3 qubits");
    let index: u64 = (1u64 << (qubits - 1)) - 3;
    format!("{index:0width$b}", width = qubits as usize)
}

/// One (time, proportion) sample of the exit-state series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint {
    /// Absolute evolution time.
    pub time: f64,
    /// Fraction of shots observed in the exit state.
    pub proportion: f64,
}

impl Sweep {
    /// The exit-state proportion at each successful offset.
    ///
    /// A successful evolution whose counts lack the exit state yields a
    /// 0.0 sample; a failed offset is omitted rather than zero-filled.
    pub fn exit_series(&self, qubits: u32) -> Vec<SeriesPoint> {
        let state = exit_state_label(qubits);
        self.points
            .iter()
            .filter_map(|point| {
                point.outcome.as_ref().ok().map(|counts| SeriesPoint {
                    time: point.time,
                    proportion: counts.proportion(&state),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_label_for_small_registers() {
        assert_eq!(exit_state_label(3), "001");
        assert_eq!(exit_state_label(4), "0101");
        assert_eq!(exit_state_label(5), "01101");
    }

    #[test]
    fn exit_label_matches_the_reference_ten_qubit_state() {
        // N−1 = 2^9 − 3 = 509
        assert_eq!(exit_state_label(10), "0111111101");
    }

    #[test]
    #[should_panic(expected = "at least 3 qubits")]
    fn exit_label_asserts_on_tiny_registers() {
        exit_state_label(2);
    }
}
