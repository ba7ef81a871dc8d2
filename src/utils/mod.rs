//! Cross-cutting utilities.

pub mod fs;

pub use fs::safe_write;
