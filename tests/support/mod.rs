//! Test support utilities for heysops integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Each test gets its own project dir and a bin dir holding a fake `sops`.
/// No process-global state is mutated; child processes use `.current_dir()`
/// so tests can safely run in parallel.
pub struct Test {
    /// Temporary directory for the test project
    pub dir: TempDir,
    /// Directory holding the fake sops script and its call log
    pub bin: TempDir,
}

impl Test {
    /// Create a new empty test environment with a fake sops installed.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let bin = TempDir::new().expect("failed to create temp bin dir");

        let sops = bin.path().join("sops");
        fs::write(&sops, FAKE_SOPS).expect("failed to write fake sops");
        fs::set_permissions(&sops, fs::Permissions::from_mode(0o755))
            .expect("failed to chmod fake sops");

        Self { dir, bin }
    }

    /// Create a test environment with `.heysops.yaml` and an empty `.gitignore`.
    pub fn init() -> Self {
        let t = Self::new();
        let output = t.init_cmd();
        assert!(
            output.status.success(),
            "Failed to initialize: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        t.write(".gitignore", "");
        t
    }

    /// Initialized environment with the given plaintext files encrypted.
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let t = Self::init();
        for (name, body) in files {
            t.write(name, body);
        }
        let names: Vec<&str> = files.iter().map(|(n, _)| *n).collect();
        let output = t.encrypt(&names);
        assert!(
            output.status.success(),
            "Failed to encrypt {:?}: {}",
            names,
            String::from_utf8_lossy(&output.stderr)
        );
        t.clear_calls();
        t
    }

    /// Path to the fake sops executable.
    pub fn sops_path(&self) -> PathBuf {
        self.bin.path().join("sops")
    }

    /// Path inside the project directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn write(&self, name: &str, contents: &str) {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent dir");
        }
        fs::write(path, contents).expect("failed to write file");
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path(name)).expect("failed to read file")
    }

    /// Lines of the project `.gitignore`.
    pub fn gitignore(&self) -> Vec<String> {
        self.read(".gitignore").lines().map(str::to_string).collect()
    }

    /// Encrypt/decrypt calls made to the fake sops (not counting version checks).
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.bin.path().join("calls.log"))
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    pub fn clear_calls(&self) {
        let _ = fs::remove_file(self.bin.path().join("calls.log"));
    }
}
