//! Tests for the dense Pauli-basis decomposition.
//!
//! Reconstruction checks go through an independent Kronecker-product
//! build of each Pauli string so the decomposer is not validated against
//! its own bit tricks.

use gluedtrees_graph::GluedTrees;
use gluedtrees_pauli::{matrix, Decomposer, DenseDecomposer, OperatorList, Pauli, PauliError};
use ndarray::{array, Array2};
use num_complex::Complex64;

fn pauli_matrix(p: Pauli) -> Array2<Complex64> {
    let one = Complex64::new(1.0, 0.0);
    let zero = Complex64::new(0.0, 0.0);
    let i = Complex64::i();
    match p {
        Pauli::I => array![[one, zero], [zero, one]],
        Pauli::X => array![[zero, one], [one, zero]],
        Pauli::Y => array![[zero, -i], [i, zero]],
        Pauli::Z => array![[one, zero], [zero, -one]],
    }
}

fn kron(a: &Array2<Complex64>, b: &Array2<Complex64>) -> Array2<Complex64> {
    let (ar, ac) = a.dim();
    let (br, bc) = b.dim();
    let mut out = Array2::zeros((ar * br, ac * bc));
    for i in 0..ar {
        for j in 0..ac {
            for k in 0..br {
                for l in 0..bc {
                    out[[i * br + k, j * bc + l]] = a[[i, j]] * b[[k, l]];
                }
            }
        }
    }
    out
}

fn reconstruct(list: &OperatorList) -> Array2<Complex64> {
    let m = 1usize << list.num_qubits();
    let mut out = Array2::zeros((m, m));
    for term in list.terms() {
        let mut p = Array2::<Complex64>::eye(1);
        for &symbol in term.string.symbols() {
            p = kron(&p, &pauli_matrix(symbol));
        }
        out = out + p.mapv(|x| x * Complex64::new(term.coeff, 0.0));
    }
    out
}

fn assert_reconstructs(h: &Array2<f64>) {
    let list = DenseDecomposer.decompose(h.view()).unwrap();
    let rebuilt = reconstruct(&list);
    for ((i, j), &value) in h.indexed_iter() {
        let got = rebuilt[[i, j]];
        assert!(
            (got.re - value).abs() < 1e-9 && got.im.abs() < 1e-9,
            "entry ({i},{j}): {got} vs {value}"
        );
    }
}

#[test]
fn scaled_identity_decomposes_to_a_single_term() {
    let h = array![[3.0, 0.0], [0.0, 3.0]];
    let list = DenseDecomposer.decompose(h.view()).unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list.terms()[0].string.to_string(), "I");
    assert!((list.terms()[0].coeff - 3.0).abs() < 1e-12);
}

#[test]
fn one_qubit_coupling_matrix() {
    // 3I - X
    let h = array![[3.0, -1.0], [-1.0, 3.0]];
    let list = DenseDecomposer.decompose(h.view()).unwrap();
    assert_eq!(list.len(), 2);
    let coeff_of = |label: &str| {
        list.terms()
            .iter()
            .find(|t| t.string.to_string() == label)
            .map(|t| t.coeff)
    };
    assert!((coeff_of("I").unwrap() - 3.0).abs() < 1e-12);
    assert!((coeff_of("X").unwrap() + 1.0).abs() < 1e-12);
}

#[test]
fn z_matrix_decomposes_to_z() {
    let h = array![[1.0, 0.0], [0.0, -1.0]];
    let list = DenseDecomposer.decompose(h.view()).unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list.terms()[0].string.to_string(), "Z");
    assert!((list.terms()[0].coeff - 1.0).abs() < 1e-12);
}

#[test]
fn symmetric_matrix_reconstructs_exactly() {
    let h = array![
        [2.0, -1.0, 0.5, 0.0],
        [-1.0, 3.0, 0.0, 0.25],
        [0.5, 0.0, -2.0, 1.0],
        [0.0, 0.25, 1.0, 0.75],
    ];
    assert_reconstructs(&h);
}

#[test]
fn glued_trees_hamiltonian_reconstructs() {
    let graph = GluedTrees::with_seed(2, Some(13)).unwrap();
    let h = matrix::assemble(&graph).unwrap();
    assert_reconstructs(&h);
}

#[test]
fn rejects_non_power_of_two_input() {
    let h = Array2::<f64>::zeros((3, 3));
    let err = DenseDecomposer.decompose(h.view()).unwrap_err();
    assert!(matches!(err, PauliError::NotPowerOfTwo { size: 3 }));
}

#[test]
fn rejects_non_square_input() {
    let h = Array2::<f64>::zeros((2, 4));
    let err = DenseDecomposer.decompose(h.view()).unwrap_err();
    assert!(matches!(err, PauliError::NotSquare { rows: 2, cols: 4 }));
}
