// Integration test utilities and common code
// WHY: Centralized utilities avoid duplication across integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test fixture helper for creating temporary directories of documents
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl TestFixture {
    /// Create a new test fixture with temporary directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();

        Self { temp_dir, root_path }
    }

    /// Create a document with given content, creating parent directories as needed
    pub fn create_document<P: AsRef<Path>>(&self, relative_path: P, content: &str) -> PathBuf {
        let file_path = self.root_path.join(relative_path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }

        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    /// Summary file path matching the main implementation
    pub fn summary_path<P: AsRef<Path>>(&self, source_path: P) -> PathBuf {
        let source_path = source_path.as_ref();
        let file_stem = source_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown");
        source_path.with_file_name(format!("{file_stem}_summary.txt"))
    }

    pub fn read_summary<P: AsRef<Path>>(&self, source_path: P) -> Result<String, std::io::Error> {
        fs::read_to_string(self.summary_path(source_path))
    }
}

/// Compare two strings sentence by sentence, providing a detailed diff on mismatch
pub fn assert_golden_summary(actual: &str, expected: &str, context: &str) {
    if actual == expected {
        return;
    }
    let actual_parts: Vec<&str> = actual.split(". ").collect();
    let expected_parts: Vec<&str> = expected.split(". ").collect();

    for (i, (a, e)) in actual_parts.iter().zip(expected_parts.iter()).enumerate() {
        if a != e {
            panic!("{context}: sentence {i} mismatch\nExpected: {e}\nActual:   {a}");
        }
    }
    panic!(
        "{context}: summary mismatch\nExpected: {expected}\nActual:   {actual}"
    );
}
