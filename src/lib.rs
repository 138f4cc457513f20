//! brewlock - Snapshot installed packages into a lockfile.
//!
//! brewlock reads a Brewfile-style manifest, queries each package backend
//! for the live installed state of every declared item, and writes a
//! `Brewfile.lock.json` recording exact versions and provenance — a
//! dependency lockfile for Homebrew taps, formulae, casks, Mac App Store
//! apps, and editor extensions.
//!
//! It is read-only introspection: nothing is ever installed, upgraded, or
//! removed. Either every declared package resolves against what is actually
//! installed and a complete lockfile is written, or the run fails and no
//! file is touched.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`manifest`] - Brewfile parsing into per-kind declarations
//! - [`backend`] - Per-kind inventory adapters (tap, formula, cask, mas, editor)
//! - [`lock`] - Reconciliation engine and lock document model
//! - [`shell`] - External command execution capability
//! - [`system`] - Host OS version and architecture introspection
//! - [`error`] - Error types and result aliases
//! - [`ui`] - Spinners and terminal output
//!
//! # Example
//!
//! ```
//! use brewlock::manifest::Manifest;
//!
//! let manifest = Manifest::parse("tap \"homebrew/cask\"\nbrew \"git\"\n");
//! assert_eq!(manifest.taps, vec!["homebrew/cask"]);
//! assert_eq!(manifest.formulae, vec!["git"]);
//! ```

pub mod backend;
pub mod cli;
pub mod error;
pub mod lock;
pub mod manifest;
pub mod shell;
pub mod system;
pub mod ui;

pub use error::{BrewlockError, Result};
