//! Shared test utilities for resolver tests.
//!
//! This module provides:
//! - Resolvers backed by a throwaway document directory
//! - Raw document access for asserting on the persisted JSON

#![allow(dead_code)]

use env_resolver::{MapEnv, VariableResolver};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A resolver whose document lives in its own temporary directory.
///
/// The directory is removed when the fixture is dropped.
pub struct Fixture {
    pub dir: TempDir,
    pub resolver: VariableResolver,
}

impl Fixture {
    /// Resolver over an empty document and the given environment.
    pub fn new(env: MapEnv) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let resolver = VariableResolver::with_env(document_path(dir.path()), env);
        Self { dir, resolver }
    }

    /// Resolver over a document pre-populated with `content`.
    pub fn with_document(content: &str, env: MapEnv) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = document_path(dir.path());
        std::fs::create_dir_all(path.parent().unwrap()).expect("create config dir");
        std::fs::write(&path, content).expect("write document");
        let resolver = VariableResolver::with_env(path, env);
        Self { dir, resolver }
    }

    pub fn path(&self) -> &Path {
        self.resolver.path()
    }

    /// Parse the persisted document as raw JSON.
    pub fn document(&self) -> Value {
        let content = std::fs::read_to_string(self.path()).expect("read document");
        serde_json::from_str(&content).expect("document is valid JSON")
    }
}

/// Conventional document location under `root`.
pub fn document_path(root: &Path) -> PathBuf {
    root.join("config").join("environment.json")
}
