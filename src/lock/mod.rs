//! The manifest-to-lockfile reconciliation engine.
//!
//! [`reconcile::Reconciler`] turns parsed declarations into fully-resolved
//! lock entries by querying each backend lazily; [`document`] holds the lock
//! document model and its deterministic serialization. The split mirrors the
//! strictness boundary: reconciliation can fail, assembly cannot.

pub mod document;
pub mod reconcile;

pub use document::{LockDocument, LockEntries};
pub use reconcile::Reconciler;

use crate::error::Result;
use crate::shell::CommandRunner;
use crate::system::{self, SystemInfo};
use chrono::{DateTime, Utc};

/// Per-run context captured once at run start.
///
/// Current time and host info are snapshotted here and passed down
/// explicitly, keeping the reconciler and assembler pure given their inputs.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub generated_at: DateTime<Utc>,
    pub system: SystemInfo,
}

impl RunContext {
    /// Capture the current time and host metadata.
    pub fn capture(runner: &dyn CommandRunner) -> Result<Self> {
        Ok(Self {
            generated_at: Utc::now(),
            system: system::snapshot(runner)?,
        })
    }
}
