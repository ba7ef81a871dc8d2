//! Manifest parsing and persistence.
//!
//! Two manifest kinds flow through depsync:
//!
//! - [`TopLevelManifest`] - the parent project's manifest, treated as the
//!   authoritative source of truth for shared version pins. Only its
//!   `dependencies` object is read; nothing is ever written back.
//! - [`SpecManifest`] - the secondary manifest being synchronized. The whole
//!   document is kept in memory, order-preserved, so that every field other
//!   than `dependencies` and `test-dependencies` survives a save verbatim.
//!
//! # Ordering
//!
//! Dependency maps are [`serde_json::Map`]s backed by an insertion-ordered
//! map (the `preserve_order` feature). Replacing the value of an existing key
//! keeps its position in the document; inserting a new key appends it at the
//! end. Dependency maps are re-emitted in sorted key order on save, but only
//! on save - the reconciler sees them in source order.
//!
//! # Format
//!
//! Manifests are UTF-8 JSON objects. Saves use 4-space indentation with
//! `", "` and `": "` separators and no trailing newline.

mod manifest_io;


use std::path::{Path, PathBuf};

/// Ordered mapping from package name to an opaque version specifier.
///
/// Values are JSON values rather than strings so that a manifest with an
/// unusual version representation still round-trips; depsync compares them
/// for equality and copies them, nothing more.
pub type DependencyMap = serde_json::Map<String, serde_json::Value>;

/// The authoritative top-level manifest.
///
/// Only the `dependencies` object is retained; the rest of the document is
/// irrelevant to reconciliation and never written back.
#[derive(Debug, Clone)]
pub struct TopLevelManifest {
    /// Package name -> version specifier, in document order
    pub dependencies: DependencyMap,
    path: PathBuf,
}

impl TopLevelManifest {
    /// Path this manifest was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// The spec manifest being synchronized.
///
/// Holds the entire JSON document so arbitrary extra fields are preserved
/// across a save. Loading validates the `dependencies` precondition up
/// front, so a missing key fails before any work happens.
#[derive(Debug, Clone)]
pub struct SpecManifest {
    doc: serde_json::Map<String, serde_json::Value>,
    path: PathBuf,
}

impl SpecManifest {
    /// Path this manifest was loaded from (and will be saved to)
    pub fn path(&self) -> &Path {
        &self.path
    }
}
