//! Error handling for depsync
//!
//! The error system is built around two types:
//! - [`DepsyncError`] - strongly-typed failure cases for precise handling
//! - [`ErrorContext`] - wrapper adding user-friendly details and suggestions
//!
//! Every failure is fatal: there are no retries and no partial-success modes.
//! The spec file is only ever written after the whole computation succeeds,
//! so no error can leave it half-written.
//!
//! Use [`user_friendly_error`] to convert any [`anyhow::Error`] into an
//! [`ErrorContext`] for colored CLI display:
//!
//! ```rust,no_run
//! use depsync_cli::core::{DepsyncError, user_friendly_error};
//!
//! let error = DepsyncError::ManifestNotFound { path: "package.json".to_string() };
//! let ctx = user_friendly_error(anyhow::Error::from(error));
//! ctx.display(); // colored error, details, and suggestion on stderr
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for depsync operations
///
/// Each variant represents one failure mode from the tool's error taxonomy:
/// I/O errors, JSON parse errors, and schema precondition errors. Variants
/// carry the file path involved so messages can point at the offending input.
#[derive(Error, Debug, Clone)]
pub enum DepsyncError {
    /// Input manifest file does not exist or could not be opened
    #[error("Manifest file not found: {path}")]
    ManifestNotFound {
        /// Path that could not be opened
        path: String,
    },

    /// Input manifest contains malformed JSON
    #[error("Invalid JSON syntax in {file}")]
    ManifestParseError {
        /// Path to the manifest that failed to parse
        file: String,
        /// Specific reason for the parsing failure
        reason: String,
    },

    /// Input manifest parsed, but the document root is not a JSON object
    #[error("Manifest file {file} is not a JSON object")]
    ManifestNotObject {
        /// Path to the offending manifest
        file: String,
    },

    /// Input manifest has no usable `dependencies` object
    ///
    /// Both inputs must declare a top-level `dependencies` object mapping
    /// package names to version specifiers. This is a precondition, not a
    /// recoverable state.
    #[error("Manifest file {file} has no \"dependencies\" object")]
    DependenciesMissing {
        /// Path to the offending manifest
        file: String,
    },

    /// A file system operation failed
    #[error("File system error during {operation}: {path}")]
    FileSystemError {
        /// The operation that failed (e.g. "read", "write")
        operation: String,
        /// Path involved in the failed operation
        path: String,
    },

    /// Insufficient permissions for a file operation
    #[error("Permission denied during {operation}: {path}")]
    PermissionDenied {
        /// The operation that failed
        operation: String,
        /// Path involved in the failed operation
        path: String,
    },

    /// I/O error from the standard library
    #[error("IO operation failed: {message}")]
    IoError {
        /// Description of the I/O failure
        message: String,
    },

    /// JSON serialization error
    #[error("JSON error: {message}")]
    JsonError {
        /// Description of the serialization failure
        message: String,
    },

    /// Catch-all for errors that don't fit other variants
    #[error("{message}")]
    Other {
        /// The error message
        message: String,
    },
}

impl From<std::io::Error> for DepsyncError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for DepsyncError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonError {
            message: err.to_string(),
        }
    }
}

/// User-friendly error wrapper with optional details and suggestion
///
/// Wraps a [`DepsyncError`] for terminal display. The suggestion should be
/// an actionable step; the details explain why the error occurred.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying depsync error
    pub error: DepsyncError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details
    #[must_use]
    pub const fn new(error: DepsyncError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add an actionable suggestion, shown in green
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add explanatory details, shown in yellow
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error, details, and suggestion to stderr with colors
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into a user-friendly [`ErrorContext`]
///
/// Recognizes [`DepsyncError`] variants and raw [`std::io::Error`]s and
/// attaches tailored suggestions; anything else falls through as
/// [`DepsyncError::Other`] with the full anyhow chain as the message.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(depsync_error) = error.downcast_ref::<DepsyncError>() {
        return create_error_context(depsync_error.clone());
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(DepsyncError::FileSystemError {
                    operation: "file access".to_string(),
                    path: "unknown".to_string(),
                })
                .with_suggestion("Check that the file exists and the path is correct");
            }
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(DepsyncError::PermissionDenied {
                    operation: "file access".to_string(),
                    path: "unknown".to_string(),
                })
                .with_suggestion("Check file ownership or re-run with sufficient permissions");
            }
            _ => {}
        }
    }

    ErrorContext::new(DepsyncError::Other {
        message: format!("{error:#}"),
    })
}

/// Attach suggestions and details appropriate to each error variant
fn create_error_context(error: DepsyncError) -> ErrorContext {
    match &error {
        DepsyncError::ManifestNotFound { path } => {
            let details = format!("Tried to open: {path}");
            ErrorContext::new(error)
                .with_suggestion("Check the path, or create the manifest file first")
                .with_details(details)
        }
        DepsyncError::ManifestParseError { reason, .. } => {
            let details = reason.clone();
            ErrorContext::new(error)
                .with_suggestion(
                    "Fix the JSON syntax - look for trailing commas, unquoted keys, or unmatched brackets",
                )
                .with_details(details)
        }
        DepsyncError::ManifestNotObject { .. } => ErrorContext::new(error)
            .with_suggestion("The manifest must be a JSON object with a \"dependencies\" field"),
        DepsyncError::DependenciesMissing { .. } => ErrorContext::new(error)
            .with_suggestion("Add a \"dependencies\" object mapping package names to versions")
            .with_details(
                "Both the top-level and the spec manifest must declare a \"dependencies\" object",
            ),
        DepsyncError::PermissionDenied { .. } => ErrorContext::new(error)
            .with_suggestion("Check file ownership or re-run with sufficient permissions"),
        _ => ErrorContext::new(error),
    }
}
