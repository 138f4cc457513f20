//! Lock document model and serialization.
//!
//! The document is assembled fully in memory and only then written, so a
//! failed run can never leave a partial lockfile behind. Serialization order
//! is deterministic: document fields, then the five kinds in fixed order,
//! then entries in declaration order within each kind — the lockfile diffs
//! cleanly under version control.

use crate::lock::RunContext;
use crate::system::SystemInfo;
use chrono::{DateTime, Utc};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// An insertion-ordered string-keyed map.
///
/// Serializes as a JSON object whose keys appear in insertion order.
/// Re-inserting an existing key replaces its value in place, matching plain
/// JSON object semantics (a manifest declaring the same package twice locks
/// it once).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryMap<V>(Vec<(String, V)>);

impl<V> Default for EntryMap<V> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<V> EntryMap<V> {
    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        if let Some(slot) = self.0.iter_mut().find(|(existing, _)| *existing == key) {
            slot.1 = value;
        } else {
            self.0.push((key, value));
        }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.0
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<V: Serialize> Serialize for EntryMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Lock entry for a tap: the revision its repository was at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TapEntry {
    pub revision: String,
}

/// Lock entry for a formula.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormulaEntry {
    pub version: String,
    /// Provenance tap; serialized as null when Homebrew no longer knows it.
    pub tap: Option<String>,
}

/// Lock entry for a cask.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaskEntry {
    pub version: String,
    pub tap: Option<String>,
}

/// Lock entry for a Mac App Store app, keyed by display name in the
/// document with the store ID recorded alongside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreAppEntry {
    pub id: String,
    pub version: String,
}

/// Lock entry for an editor extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtensionEntry {
    pub version: String,
}

/// Reconciled entries for all five kinds.
///
/// Every kind key is always present in the serialized document, empty or
/// not, so consumers can index unconditionally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LockEntries {
    pub tap: EntryMap<TapEntry>,
    pub brew: EntryMap<FormulaEntry>,
    pub cask: EntryMap<CaskEntry>,
    pub mas: EntryMap<StoreAppEntry>,
    pub vscode: EntryMap<ExtensionEntry>,
}

impl LockEntries {
    /// Total number of lock entries across all kinds.
    pub fn len(&self) -> usize {
        self.tap.len() + self.brew.len() + self.cask.len() + self.mas.len() + self.vscode.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The complete lock document.
#[derive(Debug, Clone, Serialize)]
pub struct LockDocument {
    pub generated_at: DateTime<Utc>,
    pub system: SystemInfo,
    pub entries: LockEntries,
}

impl LockDocument {
    /// Combine reconciled entries with the run context.
    ///
    /// Pure aggregation — every failure mode lives upstream of this call.
    pub fn assemble(context: RunContext, entries: LockEntries) -> Self {
        Self {
            generated_at: context.generated_at,
            system: context.system,
            entries,
        }
    }

    /// Render the document as pretty JSON with a trailing newline.
    pub fn to_json(&self) -> crate::error::Result<String> {
        let mut rendered =
            serde_json::to_string_pretty(self).map_err(anyhow::Error::from)?;
        rendered.push('\n');
        Ok(rendered)
    }
}
