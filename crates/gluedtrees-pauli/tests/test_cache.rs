//! Tests for operator-list caching.

use std::path::PathBuf;

use gluedtrees_pauli::{
    JsonFileCache, MemoryCache, NoCache, OperatorCache, OperatorList, PauliString, PauliTerm,
};

fn sample_list() -> OperatorList {
    vec![
        PauliTerm::new(PauliString::parse("IXYZ").unwrap(), -0.75),
        PauliTerm::new(PauliString::parse("ZZII").unwrap(), 0.5),
    ]
    .into_iter()
    .collect()
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("gluedtrees-{}-{}.json", name, std::process::id()))
}

#[test]
fn memory_cache_round_trip() {
    let cache = MemoryCache::default();
    assert!(cache.get(4).is_none());
    let list = sample_list();
    cache.put(4, &list);
    assert_eq!(cache.get(4).unwrap(), list);
    assert!(cache.get(5).is_none());
}

#[test]
fn no_cache_never_hits() {
    let cache = NoCache;
    cache.put(4, &sample_list());
    assert!(cache.get(4).is_none());
}

#[test]
fn json_file_cache_round_trip() {
    let path = temp_path("roundtrip");
    let _ = std::fs::remove_file(&path);
    let cache = JsonFileCache::new(&path);

    assert!(cache.get(4).is_none());
    let list = sample_list();
    cache.put(4, &list);
    assert_eq!(cache.get(4).unwrap(), list);

    // A second entry must not clobber the first.
    cache.put(7, &list);
    assert!(cache.get(4).is_some());
    assert!(cache.get(7).is_some());

    let _ = std::fs::remove_file(&path);
}

#[test]
fn json_file_cache_uses_the_artifact_shape() {
    let path = temp_path("shape");
    let _ = std::fs::remove_file(&path);
    let cache = JsonFileCache::new(&path);
    cache.put(4, &sample_list());

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let entry = &value.as_object().unwrap()["4"];
    assert_eq!(entry[0][0], "IXYZ");
    assert_eq!(entry[0][1], -0.75);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn corrupt_cache_degrades_to_a_miss() {
    let path = temp_path("corrupt");
    std::fs::write(&path, "definitely not json").unwrap();
    let cache = JsonFileCache::new(&path);
    assert!(cache.get(4).is_none());

    // A put over the corrupt file heals it.
    let list = sample_list();
    cache.put(4, &list);
    assert_eq!(cache.get(4).unwrap(), list);

    let _ = std::fs::remove_file(&path);
}
