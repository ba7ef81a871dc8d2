//! Core types shared across depsync.
//!
//! This module hosts the error taxonomy and the user-facing error reporting
//! layer. Everything else in the crate returns [`anyhow::Result`] and lets
//! `main` convert failures through [`user_friendly_error`] at the very end.

pub mod error;

pub use error::{DepsyncError, ErrorContext, user_friendly_error};
