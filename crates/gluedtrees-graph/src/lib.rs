//! `gluedtrees-graph` — glued binary-trees construction and key oracle.
//!
//! The glued-trees structure is two mirrored complete binary trees whose
//! outer leaves are joined by a random matching. Classical traversal from
//! the entrance root to the exit root is exponentially hard because the
//! matching scrambles any positional information; the quantum treatment
//! in the sibling crates reaches the exit in time linear in the column
//! count.
//!
//! # Quick start
//!
//! ```rust
//! use gluedtrees_graph::GluedTrees;
//!
//! let graph = GluedTrees::with_seed(3, Some(7)).unwrap();
//! assert_eq!(graph.n_nodes(), 14);
//! assert_eq!(graph.degree(graph.entrance()), 2);
//! assert_eq!(graph.degree(graph.exit()), 2);
//! ```

pub mod builder;
pub mod error;
pub mod oracle;

pub use builder::GluedTrees;
pub use error::{GraphError, GraphResult};
pub use oracle::{KeyOracle, START_KEY};
