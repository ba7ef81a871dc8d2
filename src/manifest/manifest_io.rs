//! I/O operations for manifest files.
//!
//! Loading reads the whole file into memory, parses it, and checks the
//! `dependencies` precondition before returning. Saving serializes the whole
//! document and hands it to the atomic writer, so computation failures can
//! never truncate the spec file.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};
use std::path::Path;
use tracing::debug;

use crate::core::DepsyncError;
use crate::manifest::{DependencyMap, SpecManifest, TopLevelManifest};
use crate::utils::fs::safe_write;

/// Read a manifest file and parse it into an order-preserving JSON object.
fn load_document(path: &Path) -> Result<serde_json::Map<String, Value>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DepsyncError::ManifestNotFound {
                path: path.display().to_string(),
            }
        } else {
            DepsyncError::from(e)
        }
    })?;

    let value: Value =
        serde_json::from_str(&content).map_err(|e| DepsyncError::ManifestParseError {
            file: path.display().to_string(),
            reason: e.to_string(),
        })?;

    match value {
        Value::Object(doc) => Ok(doc),
        _ => Err(DepsyncError::ManifestNotObject {
            file: path.display().to_string(),
        }
        .into()),
    }
}

/// Extract the `dependencies` object, enforcing the key-presence precondition.
fn require_dependencies<'a>(
    doc: &'a serde_json::Map<String, Value>,
    path: &Path,
) -> Result<&'a DependencyMap> {
    doc.get("dependencies")
        .and_then(Value::as_object)
        .ok_or_else(|| {
            DepsyncError::DependenciesMissing {
                file: path.display().to_string(),
            }
            .into()
        })
}

impl TopLevelManifest {
    /// Load the authoritative manifest from a JSON file.
    ///
    /// Fails if the file is missing, is not valid JSON, or has no
    /// `dependencies` object.
    pub fn load(path: &Path) -> Result<Self> {
        let doc = load_document(path)
            .with_context(|| format!("Failed to load top-level manifest: {}", path.display()))?;
        let dependencies = require_dependencies(&doc, path)?.clone();

        debug!(
            path = %path.display(),
            packages = dependencies.len(),
            "loaded top-level manifest"
        );

        Ok(Self {
            dependencies,
            path: path.to_path_buf(),
        })
    }
}

impl SpecManifest {
    /// Load the spec manifest from a JSON file, keeping the full document.
    ///
    /// The `dependencies` precondition is validated here so the failure
    /// surfaces before any reconciliation work.
    pub fn load(path: &Path) -> Result<Self> {
        let doc = load_document(path)
            .with_context(|| format!("Failed to load spec manifest: {}", path.display()))?;
        require_dependencies(&doc, path)?;

        debug!(path = %path.display(), "loaded spec manifest");

        Ok(Self {
            doc,
            path: path.to_path_buf(),
        })
    }

    /// The spec's dependency map, in document order.
    pub fn dependencies(&self) -> Result<&DependencyMap> {
        require_dependencies(&self.doc, &self.path)
    }

    /// Replace the `dependencies` object.
    ///
    /// An existing key keeps its position in the document, so the field does
    /// not move relative to the other top-level fields.
    pub fn set_dependencies(&mut self, deps: DependencyMap) {
        self.doc
            .insert("dependencies".to_string(), Value::Object(deps));
    }

    /// Set or replace the derived `test-dependencies` object.
    ///
    /// Replaces in place when the field already exists; otherwise the field
    /// is appended after all existing fields.
    pub fn set_test_dependencies(&mut self, deps: DependencyMap) {
        self.doc
            .insert("test-dependencies".to_string(), Value::Object(deps));
    }

    /// Serialize the document in the manifest wire format.
    ///
    /// 4-space indentation, `", "` / `": "` separators, no trailing newline.
    pub fn to_json_string(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = Serializer::with_formatter(&mut buf, formatter);
        self.doc
            .serialize(&mut ser)
            .map_err(DepsyncError::from)
            .context("Failed to serialize spec manifest")?;
        String::from_utf8(buf).context("Serialized manifest was not valid UTF-8")
    }

    /// Atomically write the document back to the path it was loaded from.
    pub fn save(&self) -> Result<()> {
        let content = self.to_json_string()?;
        safe_write(&self.path, &content)
            .with_context(|| format!("Failed to write spec manifest: {}", self.path.display()))?;

        debug!(path = %self.path.display(), "wrote spec manifest");
        Ok(())
    }
}
