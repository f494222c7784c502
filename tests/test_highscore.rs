use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use egg_catcher::highscore::{HighScoreError, HighScoreStore};

/// A fresh path under the system temp dir, unique per test.
fn scratch_path(name: &str) -> PathBuf {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    let path = std::env::temp_dir().join(format!(
        "egg_catcher_test_{}_{}_{}.dat",
        std::process::id(),
        name,
        n
    ));
    let _ = fs::remove_file(&path);
    path
}

#[test]
fn missing_file_loads_zero() {
    let store = HighScoreStore::new(scratch_path("missing"));
    assert!(matches!(store.try_load(), Err(HighScoreError::Io(_))));
    assert_eq!(store.load(), 0);
}

#[test]
fn save_then_load() {
    let path = scratch_path("roundtrip");
    let store = HighScoreStore::new(&path);
    store.save(73).expect("save");
    assert_eq!(store.load(), 73);
    assert_eq!(fs::read(&path).expect("read").len(), 4);
    let _ = fs::remove_file(&path);
}

#[test]
fn record_is_native_endian_i32() {
    let path = scratch_path("layout");
    let store = HighScoreStore::new(&path);
    store.save(-12).expect("save");
    assert_eq!(fs::read(&path).expect("read"), (-12i32).to_ne_bytes().to_vec());
    let _ = fs::remove_file(&path);
}

#[test]
fn save_overwrites() {
    let path = scratch_path("overwrite");
    let store = HighScoreStore::new(&path);
    store.save(10).expect("save");
    store.save(25).expect("save");
    assert_eq!(store.load(), 25);
    assert_eq!(fs::read(&path).expect("read").len(), 4);
    let _ = fs::remove_file(&path);
}

#[test]
fn short_file_is_treated_as_no_score() {
    let path = scratch_path("short");
    fs::write(&path, [1u8, 2]).expect("write");
    let store = HighScoreStore::new(&path);
    assert!(matches!(
        store.try_load(),
        Err(HighScoreError::Truncated { len: 2 })
    ));
    assert_eq!(store.load(), 0);
    let _ = fs::remove_file(&path);
}

#[test]
fn trailing_bytes_are_ignored() {
    let path = scratch_path("long");
    let mut bytes = 31i32.to_ne_bytes().to_vec();
    bytes.extend_from_slice(b"junk");
    fs::write(&path, bytes).expect("write");
    assert_eq!(HighScoreStore::new(&path).load(), 31);
    let _ = fs::remove_file(&path);
}

#[test]
fn save_into_missing_directory_reports_error() {
    let path = scratch_path("nodir").join("nested").join("score.dat");
    let store = HighScoreStore::new(&path);
    assert!(matches!(store.save(5), Err(HighScoreError::Io(_))));
}
