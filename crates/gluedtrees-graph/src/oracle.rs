//! Key oracle over the glued-trees graph.
//!
//! The lookup demo never sees node labels. Each node is addressed by a
//! printable key and the only permitted query is key → neighbor keys. The
//! entrance carries a sentinel key so a caller has somewhere to start;
//! the exit is recognizable as the only other key with exactly two
//! neighbors. The oracle is immutable once built.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;

use crate::builder::GluedTrees;

/// Sentinel key assigned to the entrance node.
pub const START_KEY: &str = "START";

/// Read-only key → neighbor-keys mapping over a glued-trees graph.
#[derive(Debug, Clone)]
pub struct KeyOracle {
    neighbors: BTreeMap<String, Vec<String>>,
    entrance_key: String,
    exit_key: String,
}

impl KeyOracle {
    /// Assign every node a key and freeze the neighbor mapping.
    ///
    /// The entrance gets [`START_KEY`]; every other node a random
    /// uppercase-ASCII key of length `max(dim, 4)`, re-drawn on
    /// collision.
    pub fn build(graph: &GluedTrees, rng: &mut impl Rng) -> Self {
        let key_len = (graph.dim() as usize).max(4);
        let mut used: FxHashSet<String> = FxHashSet::default();
        let mut keys: Vec<String> = Vec::with_capacity(graph.n_nodes());
        for label in graph.nodes() {
            if label == graph.entrance() {
                used.insert(START_KEY.to_string());
                keys.push(START_KEY.to_string());
                continue;
            }
            loop {
                let key = random_key(key_len, rng);
                if used.insert(key.clone()) {
                    keys.push(key);
                    break;
                }
            }
        }

        let neighbors = graph
            .nodes()
            .map(|label| {
                let adjacent = graph
                    .neighbors(label)
                    .into_iter()
                    .map(|other| keys[other].clone())
                    .collect();
                (keys[label].clone(), adjacent)
            })
            .collect();

        Self {
            neighbors,
            entrance_key: keys[graph.entrance()].clone(),
            exit_key: keys[graph.exit()].clone(),
        }
    }

    /// Build with an optional seed; `None` uses thread-local entropy.
    pub fn with_seed(graph: &GluedTrees, seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::build(graph, &mut StdRng::seed_from_u64(seed)),
            None => Self::build(graph, &mut rand::thread_rng()),
        }
    }

    /// Neighbor keys of `key`, or `None` for an unknown key.
    pub fn neighbors(&self, key: &str) -> Option<&[String]> {
        self.neighbors.get(key).map(Vec::as_slice)
    }

    /// The entrance sentinel key.
    pub fn entrance_key(&self) -> &str {
        &self.entrance_key
    }

    /// The exit node's key.
    pub fn exit_key(&self) -> &str {
        &self.exit_key
    }

    /// Number of keys in the oracle.
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    /// True if the oracle holds no keys.
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// The full mapping in stable key order, ready for serialization in
    /// the `glued-trees.json` artifact shape.
    pub fn neighbor_map(&self) -> &BTreeMap<String, Vec<String>> {
        &self.neighbors
    }
}

fn random_key(len: usize, rng: &mut impl Rng) -> String {
    (0..len).map(|_| rng.gen_range(b'A'..=b'Z') as char).collect()
}
