use std::path::PathBuf;

use flappy_term::error::StoreError;
use flappy_term::score_store::ScoreStore;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("flappy_term_{}_{}", std::process::id(), name))
}

#[test]
fn missing_file_loads_zero() {
    let store = ScoreStore::new(temp_path("missing"));
    assert_eq!(store.load(), 0);
}

#[test]
fn save_then_load() {
    let path = temp_path("roundtrip");
    let store = ScoreStore::new(&path);
    store.save(42).unwrap();
    assert_eq!(store.load(), 42);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "42");
    std::fs::remove_file(&path).ok();
}

#[test]
fn garbage_loads_zero() {
    let path = temp_path("garbage");
    std::fs::write(&path, "not a number").unwrap();
    assert_eq!(ScoreStore::new(&path).load(), 0);
    std::fs::remove_file(&path).ok();
}

#[test]
fn surrounding_whitespace_is_tolerated() {
    let path = temp_path("whitespace");
    std::fs::write(&path, "  17\n").unwrap();
    assert_eq!(ScoreStore::new(&path).load(), 17);
    std::fs::remove_file(&path).ok();
}

#[test]
fn save_into_missing_directory_fails() {
    let store = ScoreStore::new(temp_path("no_such_dir").join("score"));
    let err = store.save(1).unwrap_err();
    assert!(matches!(err, StoreError::Io { .. }));
}

#[test]
fn default_path_is_a_dotfile() {
    let path = ScoreStore::default_path();
    assert!(path.ends_with(".flappy_term_score"));
}
