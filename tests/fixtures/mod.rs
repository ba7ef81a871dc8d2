//! Shared fixtures for depsync integration tests.

use anyhow::Result;
use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test fixture for sample manifest JSON documents
pub struct ManifestFixture {
    pub content: String,
    #[allow(dead_code)]
    pub name: String,
}

impl ManifestFixture {
    /// Top-level manifest from the worked example: a@1.0.0, b@2.0.0
    pub fn top_level_basic() -> Self {
        Self {
            name: "top_level_basic".to_string(),
            content: r#"{"dependencies": {"a": "1.0.0", "b": "2.0.0"}}"#.to_string(),
        }
    }

    /// Spec manifest from the worked example: a@0.9.0 (stale), c@3.0.0 (spec-only)
    pub fn spec_basic() -> Self {
        Self {
            name: "spec_basic".to_string(),
            content: r#"{"dependencies": {"a": "0.9.0", "c": "3.0.0"}}"#.to_string(),
        }
    }

    /// Spec manifest carrying extra fields that must survive a save untouched
    #[allow(dead_code)]
    pub fn spec_with_extra_fields() -> Self {
        Self {
            name: "spec_with_extra_fields".to_string(),
            content: concat!(
                r#"{"version": "1.0.0", "summary": "test suite", "#,
                r#""dependencies": {"a": "0.9.0", "c": "3.0.0"}, "license": "MIT"}"#
            )
            .to_string(),
        }
    }

    /// Manifest with invalid JSON syntax
    #[allow(dead_code)]
    pub fn invalid_syntax() -> Self {
        Self {
            name: "invalid_syntax".to_string(),
            content: r#"{"dependencies": {"a": "1.0.0","#.to_string(),
        }
    }

    /// Manifest missing the required dependencies object
    #[allow(dead_code)]
    pub fn missing_dependencies() -> Self {
        Self {
            name: "missing_dependencies".to_string(),
            content: r#"{"summary": "no dependencies here"}"#.to_string(),
        }
    }
}

/// Isolated directory plus a command builder for end-to-end runs
pub struct TestEnvironment {
    temp: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp: TempDir::new()?,
        })
    }

    #[allow(dead_code)]
    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Write a manifest file into the environment, returning its full path
    pub fn write_manifest(&self, file_name: &str, fixture: &ManifestFixture) -> Result<PathBuf> {
        let path = self.temp.path().join(file_name);
        std::fs::write(&path, &fixture.content)?;
        Ok(path)
    }

    /// Read a file from the environment as a string
    pub fn read(&self, file_name: &str) -> Result<String> {
        Ok(std::fs::read_to_string(self.temp.path().join(file_name))?)
    }

    /// Parse a file from the environment as JSON
    #[allow(dead_code)]
    pub fn read_json(&self, file_name: &str) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.read(file_name)?)?)
    }

    /// Build a `depsync` command running inside the environment
    pub fn depsync_command(&self) -> Command {
        let mut cmd = Command::cargo_bin("depsync").expect("depsync binary should build");
        cmd.current_dir(self.temp.path());
        cmd
    }
}
