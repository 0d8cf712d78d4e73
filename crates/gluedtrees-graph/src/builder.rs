//! Glued-trees graph construction.
//!
//! Two complete binary trees of height `dim - 1` are laid out mirror-image
//! and joined by a random matching between their outer leaves: every leaf
//! of the first tree gains two cross-edges into the second tree's leaf
//! set, and every leaf of the second tree receives exactly two. Under the
//! canonical labeling the entrance (root of the first tree) is node 0 and
//! the exit (root of the second) is node `N-1`, with `N = 2·(2^dim − 1)`.
//! Entrance and exit end with degree 2; every other node with degree 3.

use petgraph::graph::{NodeIndex, UnGraph};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::{GraphError, GraphResult};

/// The glued-trees graph under its canonical entrance-to-exit ordering.
///
/// Node labels `0..n_nodes()` are petgraph node indices in insertion
/// order; label 0 is the entrance and label `N-1` the exit. The structure
/// is immutable once built. Rebuilding with the same `dim` but a
/// different (or absent) seed yields a different leaf matching.
#[derive(Debug, Clone)]
pub struct GluedTrees {
    dim: u32,
    graph: UnGraph<(), ()>,
}

impl GluedTrees {
    /// Build a glued-trees graph of depth `dim` using the supplied RNG
    /// for the leaf matching.
    pub fn build(dim: u32, rng: &mut impl Rng) -> GraphResult<Self> {
        if dim < 1 {
            return Err(GraphError::InvalidDepth { dim });
        }

        let tree_nodes = (1usize << dim) - 1;
        let n = 2 * tree_nodes;
        let mut graph = UnGraph::with_capacity(n, (3 * n - 2) / 2);
        for _ in 0..n {
            graph.add_node(());
        }

        // Tree edges: children of k are 2k+1 and 2k+2 in the first tree,
        // mirrored through x -> N-1-x in the second.
        let internal = (1usize << (dim - 1)) - 1;
        for k in 0..internal {
            for child in [2 * k + 1, 2 * k + 2] {
                graph.add_edge(NodeIndex::new(k), NodeIndex::new(child), ());
                graph.add_edge(NodeIndex::new(n - 1 - k), NodeIndex::new(n - 1 - child), ());
            }
        }

        // Random matching between the two outer-leaf sets. Each opposite
        // leaf absorbs exactly two cross-edges.
        let leaf_count = 1usize << (dim - 1);
        let first_leaf = leaf_count - 1;
        let opposite: Vec<usize> = (tree_nodes..tree_nodes + leaf_count).collect();
        let mut capacity = vec![2u8; leaf_count];
        for leaf in first_leaf..tree_nodes {
            let mut chosen: Vec<usize> = Vec::with_capacity(2);
            for _ in 0..2 {
                let pick = pick_opposite(&capacity, &chosen, rng);
                capacity[pick] -= 1;
                chosen.push(pick);
                graph.add_edge(NodeIndex::new(leaf), NodeIndex::new(opposite[pick]), ());
            }
        }

        debug!(dim, n_nodes = n, n_edges = graph.edge_count(), "built glued-trees graph");
        Ok(Self { dim, graph })
    }

    /// Build with an optional seed; `None` uses thread-local entropy and
    /// is therefore not reproducible.
    pub fn with_seed(dim: u32, seed: Option<u64>) -> GraphResult<Self> {
        match seed {
            Some(seed) => Self::build(dim, &mut StdRng::seed_from_u64(seed)),
            None => Self::build(dim, &mut rand::thread_rng()),
        }
    }

    /// Depth parameter the graph was built with.
    pub fn dim(&self) -> u32 {
        self.dim
    }

    /// Total node count `N = 2·(2^dim − 1)`.
    pub fn n_nodes(&self) -> usize {
        self.graph.node_count()
    }

    /// Total edge count, counting multiplicity (`(3N − 2) / 2`).
    pub fn n_edges(&self) -> usize {
        self.graph.edge_count()
    }

    /// The entrance node (root of the first tree).
    pub fn entrance(&self) -> usize {
        0
    }

    /// The exit node (root of the second tree).
    pub fn exit(&self) -> usize {
        self.n_nodes() - 1
    }

    /// Degree of a node, counting edge multiplicity.
    pub fn degree(&self, label: usize) -> usize {
        self.graph.edges(NodeIndex::new(label)).count()
    }

    /// Distinct neighbors of a node in ascending label order.
    pub fn neighbors(&self, label: usize) -> Vec<usize> {
        let mut out: Vec<usize> = self
            .graph
            .neighbors(NodeIndex::new(label))
            .map(|n| n.index())
            .collect();
        out.sort_unstable();
        out.dedup();
        out
    }

    /// All node labels in canonical order.
    pub fn nodes(&self) -> impl Iterator<Item = usize> + '_ {
        0..self.n_nodes()
    }
}

/// Choose the opposite-tree leaf for one cross-edge.
///
/// Uniform over the leaves with remaining capacity, excluding the current
/// source's earlier pick so its two cross-edges land on distinct leaves.
/// Only when that exclusion empties the pool may a leaf repeat (the
/// `dim = 1` degenerate pair, which ends up joined by a doubled edge).
fn pick_opposite(capacity: &[u8], chosen: &[usize], rng: &mut impl Rng) -> usize {
    let pool = |exclude: bool| -> Vec<usize> {
        (0..capacity.len())
            .filter(|i| capacity[*i] >= 1 && !(exclude && chosen.contains(i)))
            .collect()
    };

    if let Some(&pick) = pool(true).choose(rng) {
        return pick;
    }
    *pool(false)
        .choose(rng)
        .expect("total leaf capacity equals the number of draws")
}
