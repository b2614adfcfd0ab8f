//! Test support utilities for acme-crypt integration tests.
//!
//! Provides isolated working directories, a fake gpg and a simulated
//! acme file tree.

#![allow(dead_code)]

pub mod commands;
pub mod fixtures;
pub mod skip;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// No process-global state is mutated: child processes get their
/// environment and working directory explicitly, so tests can run in
/// parallel.
pub struct Test {
    /// Working directory for the commands under test
    pub dir: TempDir,
    /// Canonical path of `dir`, as the binaries see it
    pub root: PathBuf,
    /// Holds the fake gpg and the simulated acme tree
    pub tools: TempDir,
    /// gpg program handed to the binaries
    pub gpg: PathBuf,
    /// Simulated acme mount
    pub acme: Acme,
}

impl Test {
    /// Create an environment with an empty acme tree and a gpg path that
    /// does not exist yet.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let tools = TempDir::new().expect("failed to create tools dir");
        let gpg = tools.path().join("gpg");
        let acme = Acme::new(tools.path().join("acme"));
        let root = dir
            .path()
            .canonicalize()
            .expect("failed to canonicalize temp dir");

        Self {
            dir,
            root,
            tools,
            gpg,
            acme,
        }
    }

    /// Create an environment whose gpg is the fake script.
    #[cfg(unix)]
    pub fn with_fake_gpg() -> Self {
        let t = Self::new();
        write_fake_gpg(&t.gpg);
        t
    }

    /// Path inside the working directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}
