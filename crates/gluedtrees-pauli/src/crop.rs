//! Operator-list compression.
//!
//! Keeping every term of the expansion would blow the evolution circuit
//! past any feasible depth, so lists are cropped to a fixed budget. The
//! crop balances two pressures: the highest-magnitude terms carry most of
//! the operator's weight, but a pure magnitude cut starves whole symbol
//! positions. Selection therefore runs in two phases — a positional
//! diversity pass followed by a magnitude fill — over a list pre-sorted
//! by descending coefficient magnitude.
//!
//! Registers too wide to decompose exactly are approximated instead: the
//! widest exact cropped list is padded structurally, exploiting the
//! pattern that a term's second symbol tends to repeat through the middle
//! of the string.

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::error::{PauliError, PauliResult};
use crate::pauli::{OperatorList, Pauli, PauliString, PauliTerm};

/// Share of the budget filled by the diversity pass.
const DIVERSITY_SHARE: f64 = 0.6;

/// Crop `list` to at most `size` terms.
///
/// The input must be sorted by descending coefficient magnitude; a list
/// already within budget is returned unchanged. Phase A walks the symbol
/// positions from last to first with a running counter selecting the
/// required symbol (`IXYZ`, counter mod 4), picking the highest-magnitude
/// unselected term matching each (position, symbol) slot; full passes
/// repeat until `round(0.6·size)` terms are selected or a pass finds
/// nothing. Phase B fills the remainder with the highest-magnitude
/// unselected terms. Output order is selection order; magnitude ties keep
/// input order.
pub fn crop(list: &OperatorList, size: usize) -> OperatorList {
    if list.len() <= size {
        return list.clone();
    }
    let terms = list.terms();
    let width = terms[0].string.len();
    let target_a = (size as f64 * DIVERSITY_SHARE).round() as usize;

    let mut selected: FxHashSet<usize> = FxHashSet::default();
    let mut picked: Vec<usize> = Vec::with_capacity(size);

    let mut idx = 0usize;
    while picked.len() < target_a {
        let before = picked.len();
        for position in (0..width).rev() {
            let want = Pauli::ALPHABET[idx % 4];
            let hit = (0..terms.len())
                .find(|&k| !selected.contains(&k) && terms[k].string.get(position) == want);
            if let Some(k) = hit {
                selected.insert(k);
                picked.push(k);
            }
            idx += 1;
        }
        if picked.len() == before {
            // No eligible term anywhere in the cycle; stop short.
            break;
        }
    }

    for k in 0..terms.len() {
        if picked.len() >= size {
            break;
        }
        if selected.insert(k) {
            picked.push(k);
        }
    }
    picked.truncate(size);

    debug!(input = terms.len(), output = picked.len(), "cropped operator list");
    OperatorList::from_terms(picked.into_iter().map(|k| terms[k].clone()).collect())
}

/// Approximate a `qubits`-wide list from a narrower exact one.
///
/// Each term `(s, c)` becomes `s[0] + s[1]×(qubits − len(s)) + s[1..]`
/// with the coefficient unchanged — the repeated pad sits immediately
/// after the first symbol. Fails when the base list is narrower than two
/// symbols or already at least `qubits` wide.
pub fn approximate(base: &OperatorList, qubits: u32) -> PauliResult<OperatorList> {
    let base_width = base.num_qubits();
    if base_width < 2 || qubits <= base_width {
        return Err(PauliError::ApproximationTooSmall {
            qubits,
            base: base_width,
        });
    }
    let pad = (qubits - base_width) as usize;

    let terms = base
        .terms()
        .iter()
        .map(|term| {
            let symbols = term.string.symbols();
            let mut out: Vec<Pauli> = Vec::with_capacity(qubits as usize);
            out.push(symbols[0]);
            out.extend(std::iter::repeat(symbols[1]).take(pad));
            out.extend_from_slice(&symbols[1..]);
            PauliTerm::new(PauliString::new(out), term.coeff)
        })
        .collect();

    debug!(base = base_width, qubits, "approximated operator list by padding");
    Ok(OperatorList::from_terms(terms))
}
