//! depsync - dependency version reconciler for JSON manifests
//!
//! A small CLI that keeps a secondary "spec" manifest (for example a test or
//! sub-project manifest) in sync with the authoritative top-level manifest of
//! a project. Version pins declared by the top-level manifest always win;
//! packages only the spec declares can optionally be recorded as
//! `test-dependencies`.
//!
//! # Model
//!
//! Both inputs are UTF-8 JSON documents carrying a `dependencies` object that
//! maps package names to opaque version specifiers. `depsync` never interprets
//! version strings - it only copies them. The spec document may contain any
//! number of other fields; those are written back untouched and in their
//! original order.
//!
//! # Core Modules
//!
//! - [`cli`] - Command-line surface and the write/report decision
//! - [`core`] - Error types and user-friendly error reporting
//! - [`manifest`] - Loading, validating, and saving the two manifests
//! - [`reconciler`] - The pure merge logic, free of any I/O
//! - [`utils`] - Atomic file write helpers
//!
//! # Command-Line Usage
//!
//! ```bash
//! # Copy pins from package.json into tests/spec.json
//! depsync package.json tests/spec.json
//!
//! # Preview without writing
//! depsync --dry package.json tests/spec.json
//!
//! # Also record spec-only packages as test-dependencies
//! depsync --note package.json tests/spec.json
//! ```

pub mod cli;
pub mod core;
pub mod manifest;
pub mod reconciler;
pub mod utils;
