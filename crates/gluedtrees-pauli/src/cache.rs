//! Operator-list caching.
//!
//! Exact decomposition is expensive, so generated lists are cached keyed
//! by register width. The store is injected rather than global state;
//! embedders can swap backends and tests can count hits. The file store
//! keeps the same JSON shape as the original cache artifact:
//! `{"10": [["IXZ…", -0.31], …]}`. A broken cache never aborts a run —
//! reads degrade to recomputation with a warning.

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::pauli::OperatorList;

/// Key-value store for generated operator lists.
pub trait OperatorCache: Send + Sync {
    /// Stored list for the given register width, if any.
    fn get(&self, qubits: u32) -> Option<OperatorList>;

    /// Persist a list. Failures are logged and swallowed; persistence is
    /// an optimization, never a correctness requirement.
    fn put(&self, qubits: u32, list: &OperatorList);
}

/// Cache that never hits.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCache;

impl OperatorCache for NoCache {
    fn get(&self, _qubits: u32) -> Option<OperatorList> {
        None
    }

    fn put(&self, _qubits: u32, _list: &OperatorList) {}
}

/// In-memory cache for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: RwLock<FxHashMap<u32, OperatorList>>,
}

impl OperatorCache for MemoryCache {
    fn get(&self, qubits: u32) -> Option<OperatorList> {
        self.entries.read().ok()?.get(&qubits).cloned()
    }

    fn put(&self, qubits: u32, list: &OperatorList) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(qubits, list.clone());
        }
    }
}

/// Single-file JSON cache, whole file read and rewritten per operation.
///
/// Suitable for the generator workflow where a handful of register sizes
/// accumulate over repeated runs.
#[derive(Debug, Clone)]
pub struct JsonFileCache {
    path: PathBuf,
}

impl JsonFileCache {
    /// Create a cache backed by the given file; the file is created on
    /// first `put`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> FxHashMap<String, OperatorList> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return FxHashMap::default(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "operator cache unreadable, recomputing");
                return FxHashMap::default();
            }
        };
        match serde_json::from_str(&text) {
            Ok(map) => map,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "operator cache corrupt, recomputing");
                FxHashMap::default()
            }
        }
    }
}

impl OperatorCache for JsonFileCache {
    fn get(&self, qubits: u32) -> Option<OperatorList> {
        let hit = self.load().remove(&qubits.to_string());
        if hit.is_some() {
            debug!(qubits, path = %self.path.display(), "operator cache hit");
        }
        hit
    }

    fn put(&self, qubits: u32, list: &OperatorList) {
        let mut map = self.load();
        map.insert(qubits.to_string(), list.clone());
        match serde_json::to_string(&map) {
            Ok(text) => {
                if let Err(e) = std::fs::write(&self.path, text) {
                    warn!(path = %self.path.display(), error = %e, "operator cache write failed");
                }
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "operator cache serialization failed");
            }
        }
    }
}
