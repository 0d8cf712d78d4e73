//! Pauli operator-list data structures.
//!
//! An operator list is an ordered sequence of weighted Pauli strings:
//!
//!   H ≈ Σ_k  c_k · P_k
//!
//! where each P_k is a dense tensor product of single-qubit Pauli
//! operators (I, X, Y, Z) and c_k ∈ ℝ. Strings are stored in label order:
//! the leftmost symbol acts on the most significant bit of a basis-state
//! index, matching the cache artifact's `"IXZ..."` labels.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Single-qubit Pauli operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pauli {
    /// Identity.
    I,
    /// Pauli-X.
    X,
    /// Pauli-Y.
    Y,
    /// Pauli-Z.
    Z,
}

impl Pauli {
    /// The four symbols in the canonical `IXYZ` cycling order.
    pub const ALPHABET: [Pauli; 4] = [Pauli::I, Pauli::X, Pauli::Y, Pauli::Z];

    /// The label character for this operator.
    pub fn to_char(self) -> char {
        match self {
            Pauli::I => 'I',
            Pauli::X => 'X',
            Pauli::Y => 'Y',
            Pauli::Z => 'Z',
        }
    }

    /// Parse a label character.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'I' => Some(Pauli::I),
            'X' => Some(Pauli::X),
            'Y' => Some(Pauli::Y),
            'Z' => Some(Pauli::Z),
            _ => None,
        }
    }
}

/// Dense fixed-length tensor product of Pauli operators.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PauliString(Vec<Pauli>);

impl PauliString {
    /// Construct from a symbol vector in label order.
    pub fn new(symbols: Vec<Pauli>) -> Self {
        Self(symbols)
    }

    /// Parse a label such as `"IXYZ"`.
    pub fn parse(label: &str) -> Option<Self> {
        label
            .chars()
            .map(Pauli::from_char)
            .collect::<Option<Vec<_>>>()
            .map(Self)
    }

    /// Number of symbol positions (register width).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The symbols in label order.
    pub fn symbols(&self) -> &[Pauli] {
        &self.0
    }

    /// Symbol at a label position.
    pub fn get(&self, position: usize) -> Pauli {
        self.0[position]
    }
}

impl fmt::Display for PauliString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.0 {
            write!(f, "{}", symbol.to_char())?;
        }
        Ok(())
    }
}

impl Serialize for PauliString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PauliString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        PauliString::parse(&label)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid Pauli label: {label}")))
    }
}

/// A single weighted term: `coeff · string`.
///
/// Serializes as a `[label, coeff]` pair, the shape the original cache
/// artifact uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "(PauliString, f64)", into = "(PauliString, f64)")]
pub struct PauliTerm {
    /// The Pauli string.
    pub string: PauliString,
    /// Real coefficient.
    pub coeff: f64,
}

impl PauliTerm {
    /// Create a new term.
    pub fn new(string: PauliString, coeff: f64) -> Self {
        Self { string, coeff }
    }
}

impl From<(PauliString, f64)> for PauliTerm {
    fn from((string, coeff): (PauliString, f64)) -> Self {
        Self { string, coeff }
    }
}

impl From<PauliTerm> for (PauliString, f64) {
    fn from(term: PauliTerm) -> Self {
        (term.string, term.coeff)
    }
}

/// Ordered sequence of Pauli terms, all of the same width.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperatorList {
    terms: Vec<PauliTerm>,
}

impl OperatorList {
    /// Create from a list of terms.
    pub fn from_terms(terms: Vec<PauliTerm>) -> Self {
        Self { terms }
    }

    /// All terms in order.
    pub fn terms(&self) -> &[PauliTerm] {
        &self.terms
    }

    /// Number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True if the list has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Register width of the terms, 0 for an empty list.
    pub fn num_qubits(&self) -> u32 {
        self.terms.first().map_or(0, |t| t.string.len() as u32)
    }

    /// Sort by descending coefficient magnitude; ties keep input order.
    pub fn sort_by_magnitude(&mut self) {
        self.terms.sort_by(|a, b| {
            b.coeff
                .abs()
                .partial_cmp(&a.coeff.abs())
                .unwrap_or(Ordering::Equal)
        });
    }

    /// Consume the list, yielding its terms.
    pub fn into_terms(self) -> Vec<PauliTerm> {
        self.terms
    }
}

impl FromIterator<PauliTerm> for OperatorList {
    fn from_iter<T: IntoIterator<Item = PauliTerm>>(iter: T) -> Self {
        Self {
            terms: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_round_trip() {
        let s = PauliString::parse("IXYZ").unwrap();
        assert_eq!(s.len(), 4);
        assert_eq!(s.to_string(), "IXYZ");
        assert_eq!(s.get(0), Pauli::I);
        assert_eq!(s.get(3), Pauli::Z);
    }

    #[test]
    fn bad_label_rejected() {
        assert!(PauliString::parse("IXQ").is_none());
    }

    #[test]
    fn term_serializes_as_pair() {
        let term = PauliTerm::new(PauliString::parse("XZ").unwrap(), -0.5);
        let json = serde_json::to_string(&term).unwrap();
        assert_eq!(json, r#"["XZ",-0.5]"#);
        let back: PauliTerm = serde_json::from_str(&json).unwrap();
        assert_eq!(back, term);
    }

    #[test]
    fn magnitude_sort_is_stable() {
        let mut list = OperatorList::from_terms(vec![
            PauliTerm::new(PauliString::parse("II").unwrap(), 0.5),
            PauliTerm::new(PauliString::parse("XX").unwrap(), -1.0),
            PauliTerm::new(PauliString::parse("YY").unwrap(), 1.0),
            PauliTerm::new(PauliString::parse("ZZ").unwrap(), -0.5),
        ]);
        list.sort_by_magnitude();
        let labels: Vec<String> = list.terms().iter().map(|t| t.string.to_string()).collect();
        assert_eq!(labels, vec!["XX", "YY", "II", "ZZ"]);
    }
}
