//! Error types for brewlock operations.
//!
//! This module defines [`BrewlockError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `BrewlockError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `BrewlockError::Other`) for unexpected errors
//! - Every error is terminal for the run: no retries, no partial lockfile

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for brewlock operations.
#[derive(Debug, Error)]
pub enum BrewlockError {
    /// Manifest file not found at the expected location.
    #[error("Manifest not found: {path}")]
    ManifestNotFound { path: PathBuf },

    /// An external backend command failed to spawn or exited non-zero.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// A backend command produced output the adapter cannot understand.
    #[error("Malformed response from '{command}': {source}")]
    MalformedResponse {
        command: String,
        source: serde_json::Error,
    },

    /// A declared tap reported no HEAD revision.
    #[error("No HEAD revision found for tap: {tap}")]
    MissingTapRevision { tap: String },

    /// A declared formula has no installed record.
    #[error("Missing formula info for: {name}")]
    UnresolvedFormula { name: String },

    /// A declared cask has no installed record.
    #[error("Missing cask info for: {name}")]
    UnresolvedCask { name: String },

    /// A declared App Store app has no installed record.
    #[error("Missing App Store info for: {name} ({id})")]
    UnresolvedStoreApp { name: String, id: String },

    /// A declared editor extension has no installed record.
    #[error("Missing editor extension info for: {name}")]
    UnresolvedExtension { name: String },

    /// None of the candidate editor CLIs responded.
    #[error("No editor CLI found (code/cursor/codium/code-insiders)")]
    NoEditorCli,

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for brewlock operations.
pub type Result<T> = std::result::Result<T, BrewlockError>;
