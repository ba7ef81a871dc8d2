//! Dependency reconciliation between two manifests.
//!
//! This is the whole of depsync's logic: a single pass over the top-level
//! dependency map that pushes its version pins into the spec's map. The
//! functions here never touch the file system; callers load the maps, run
//! the merge, and decide whether to persist the result.
//!
//! # Rules
//!
//! - A package in the top-level map but not in the spec map is inserted.
//! - A package in both maps with differing versions takes the top-level
//!   version ("top-level wins").
//! - A package only in the spec map is left alone; with `--note` it ends up
//!   in the derived `test-dependencies` map instead.
//!
//! Each insertion or version change produces one human-readable message, in
//! top-level iteration order.


use serde_json::Value;
use tracing::debug;

use crate::manifest::DependencyMap;

/// Push top-level version pins into the spec dependency map.
///
/// Mutates `spec` in place and returns one message per insertion or version
/// change, ordered by iteration over `top`. `spec_path` appears in insertion
/// messages so the report names the file that gained the package.
///
/// Note the change-message wording: it reads "from version {top} to {spec}",
/// i.e. the incoming authoritative value fills the "from" slot and the value
/// being replaced fills the "to" slot. That inversion is part of the
/// tool's observable output contract and is kept as-is.
pub fn reconcile(top: &DependencyMap, spec: &mut DependencyMap, spec_path: &str) -> Vec<String> {
    let mut messages = Vec::new();

    for (name, version) in top {
        match spec.get(name).cloned() {
            None => {
                spec.insert(name.clone(), version.clone());
                messages.push(format!(
                    "Package {name} inserted to {spec_path} for the first time at version \"{}\"",
                    display_version(version)
                ));
            }
            Some(existing) if existing != *version => {
                messages.push(format!(
                    "Changing {name} from version {} to {}",
                    display_version(version),
                    display_version(&existing)
                ));
                spec.insert(name.clone(), version.clone());
            }
            Some(_) => {}
        }
    }

    debug!(changes = messages.len(), "reconciled dependency maps");
    messages
}

/// Compute the spec-only packages, sorted by name.
///
/// Returns every entry of `spec` whose key does not appear in `top`. Meant
/// to run on the map *after* [`reconcile`], when every top-level package is
/// guaranteed present, so membership alone identifies test-only entries.
pub fn test_dependencies(top: &DependencyMap, spec: &DependencyMap) -> DependencyMap {
    let only_in_spec: DependencyMap = spec
        .iter()
        .filter(|(name, _)| !top.contains_key(name.as_str()))
        .map(|(name, version)| (name.clone(), version.clone()))
        .collect();

    sorted_deps(&only_in_spec)
}

/// Return a copy of the map with keys in ascending order.
pub fn sorted_deps(deps: &DependencyMap) -> DependencyMap {
    let mut entries: Vec<(String, Value)> = deps
        .iter()
        .map(|(name, version)| (name.clone(), version.clone()))
        .collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    entries.into_iter().collect()
}

/// Render a version specifier for a change message.
///
/// Strings print bare (no JSON quotes); anything else falls back to compact
/// JSON so unusual manifests still produce a readable report.
fn display_version(version: &Value) -> String {
    match version.as_str() {
        Some(s) => s.to_string(),
        None => version.to_string(),
    }
}
