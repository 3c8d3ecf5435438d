//! Shared test fixtures.

use std::path::PathBuf;
use tempfile::TempDir;

/// A temporary directory standing in for a documentation root.
pub fn create_test_root_dir() -> TempDir {
    TempDir::new().expect("failed to create temp dir")
}

/// Writes `content` to `name` inside the test root.
pub fn create_test_file(root: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = root.path().join(name);
    std::fs::write(&path, content).expect("failed to write test file");
    path
}
