use assert_fs::prelude::*;
use bench_fs::{Error, NormalizedPath, io};
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_read_text_existing_file() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("test.txt");
    fs::write(&file_path, "hello").unwrap();

    let path = NormalizedPath::new(&file_path);
    let content = io::read_text(&path).unwrap();
    assert_eq!(content, "hello");
}

#[test]
fn test_read_text_nonexistent_file() {
    let path = NormalizedPath::new("/nonexistent/file.txt");
    let result = io::read_text(&path);
    assert!(matches!(result, Err(Error::Io { .. })));
}

#[test]
fn test_ensure_dir_creates_nested_directories() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("output/predictions"));

    io::ensure_dir(&path).unwrap();

    assert!(path.is_dir());
}

#[test]
fn test_ensure_dir_keeps_existing_contents() {
    let temp = assert_fs::TempDir::new().unwrap();
    let existing = temp.child("logs/run.log");
    existing.write_str("first run").unwrap();

    io::ensure_dir(&NormalizedPath::new(temp.child("logs").path())).unwrap();

    temp.child("logs").assert(predicate::path::is_dir());
    existing.assert(predicate::str::contains("first run"));
}

#[test]
fn test_ensure_dir_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("logs"));

    io::ensure_dir(&path).unwrap();
    io::ensure_dir(&path).unwrap();

    assert!(path.is_dir());
}

#[test]
fn test_ensure_dir_fails_when_a_file_is_in_the_way() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("scores");
    fs::write(&file_path, "not a directory").unwrap();

    let result = io::ensure_dir(&NormalizedPath::new(&file_path));

    assert!(matches!(result, Err(Error::Io { .. })));
}
