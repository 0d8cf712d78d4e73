//! Structural tests for glued-trees construction.

use gluedtrees_graph::{GluedTrees, GraphError};

#[test]
fn depth_zero_is_rejected() {
    let err = GluedTrees::with_seed(0, Some(1)).unwrap_err();
    assert!(matches!(err, GraphError::InvalidDepth { dim: 0 }));
}

#[test]
fn node_and_edge_counts() {
    for dim in 1..=6 {
        let graph = GluedTrees::with_seed(dim, Some(42)).unwrap();
        let n = 2 * ((1usize << dim) - 1);
        assert_eq!(graph.n_nodes(), n, "dim {dim}");
        assert_eq!(graph.n_edges(), (3 * n - 2) / 2, "dim {dim}");
    }
}

#[test]
fn entrance_and_exit_are_the_only_degree_two_nodes() {
    for dim in 1..=6 {
        let graph = GluedTrees::with_seed(dim, Some(99)).unwrap();
        for node in graph.nodes() {
            let expected = if node == graph.entrance() || node == graph.exit() {
                2
            } else {
                3
            };
            assert_eq!(graph.degree(node), expected, "dim {dim} node {node}");
        }
    }
}

#[test]
fn dim_three_scenario() {
    let graph = GluedTrees::with_seed(3, Some(7)).unwrap();
    assert_eq!(graph.n_nodes(), 14);
    assert_eq!(graph.entrance(), 0);
    assert_eq!(graph.exit(), 13);
    let interior = graph
        .nodes()
        .filter(|&n| n != graph.entrance() && n != graph.exit())
        .filter(|&n| graph.degree(n) == 3)
        .count();
    assert_eq!(interior, 12);
}

#[test]
fn cross_edges_stay_between_the_leaf_sets() {
    let dim = 4;
    let graph = GluedTrees::with_seed(dim, Some(5)).unwrap();
    let tree_nodes = (1usize << dim) - 1;
    let leaf_count = 1usize << (dim - 1);
    for node in graph.nodes().filter(|&n| n < tree_nodes) {
        for neighbor in graph.neighbors(node) {
            if neighbor >= tree_nodes {
                // An edge crossing the tree boundary must join the two
                // outer-leaf ranges.
                assert!(node >= leaf_count - 1, "node {node} is not a leaf");
                assert!(
                    neighbor < tree_nodes + leaf_count,
                    "neighbor {neighbor} is not an opposite leaf"
                );
            }
        }
    }
}

#[test]
fn early_leaves_can_share_an_opposite_partner() {
    // Every leaf with remaining capacity is eligible for every draw, so
    // two T1 leaves sharing a T2 partner while untouched leaves remain
    // must be common. At dim 3 the first two T1 leaves (labels 3 and 4)
    // draw unordered pairs from four opposite leaves; a shared partner
    // has probability 5/6 per instance.
    let dim = 3;
    let tree_nodes = (1usize << dim) - 1;
    let shared = (0..500u64)
        .filter(|&seed| {
            let graph = GluedTrees::with_seed(dim as u32, Some(seed)).unwrap();
            let a: Vec<usize> = graph
                .neighbors(3)
                .into_iter()
                .filter(|&n| n >= tree_nodes)
                .collect();
            graph
                .neighbors(4)
                .into_iter()
                .filter(|&n| n >= tree_nodes)
                .any(|n| a.contains(&n))
        })
        .count();
    assert!(shared > 300, "shared partners in only {shared}/500 instances");
}

#[test]
fn same_seed_reproduces_the_matching() {
    let a = GluedTrees::with_seed(5, Some(1234)).unwrap();
    let b = GluedTrees::with_seed(5, Some(1234)).unwrap();
    for node in a.nodes() {
        assert_eq!(a.neighbors(node), b.neighbors(node));
    }
}

#[test]
fn depth_one_degenerates_to_a_doubled_pair() {
    let graph = GluedTrees::with_seed(1, Some(3)).unwrap();
    assert_eq!(graph.n_nodes(), 2);
    assert_eq!(graph.n_edges(), 2);
    assert_eq!(graph.degree(0), 2);
    assert_eq!(graph.degree(1), 2);
    assert_eq!(graph.neighbors(0), vec![1]);
    assert_eq!(graph.neighbors(1), vec![0]);
}
