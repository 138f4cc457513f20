//! Manifest-to-lockfile reconciliation.
//!
//! One pass per kind, in fixed order: tap, formula, cask, App Store,
//! editor extension. A kind with no declarations is skipped without touching
//! its backend. Within a kind the adapter's resolution table is built once,
//! then every declaration is looked up strictly — the first miss aborts the
//! whole run. A lockfile that silently omitted a declared package would look
//! complete while lying, so no entry set is ever emitted partially.

use crate::backend::{cask, editor, formula, mas, tap};
use crate::error::{BrewlockError, Result};
use crate::lock::document::{
    CaskEntry, ExtensionEntry, FormulaEntry, LockEntries, StoreAppEntry, TapEntry,
};
use crate::manifest::{Manifest, StoreApp};
use crate::shell::CommandRunner;
use crate::ui::Reporter;

/// Resolves declared packages against live backend state.
pub struct Reconciler<'a> {
    runner: &'a dyn CommandRunner,
    reporter: &'a Reporter,
}

impl<'a> Reconciler<'a> {
    pub fn new(runner: &'a dyn CommandRunner, reporter: &'a Reporter) -> Self {
        Self { runner, reporter }
    }

    /// Reconcile every declaration in the manifest into lock entries.
    pub fn reconcile(&self, manifest: &Manifest) -> Result<LockEntries> {
        let mut entries = LockEntries::default();
        self.lock_taps(&manifest.taps, &mut entries)?;
        self.lock_formulae(&manifest.formulae, &mut entries)?;
        self.lock_casks(&manifest.casks, &mut entries)?;
        self.lock_store_apps(&manifest.store_apps, &mut entries)?;
        self.lock_extensions(&manifest.extensions, &mut entries)?;
        Ok(entries)
    }

    fn lock_taps(&self, taps: &[String], entries: &mut LockEntries) -> Result<()> {
        if taps.is_empty() {
            return Ok(());
        }

        let task = self.reporter.task("Resolving tap revisions");
        let revisions = match tap::revisions(self.runner, taps) {
            Ok(revisions) => revisions,
            Err(err) => {
                task.fail("Failed to resolve tap revisions");
                return Err(err);
            }
        };
        task.done(&format!("Resolved {} tap revisions", revisions.len()));

        for tap_name in taps {
            let Some(revision) = revisions.get(tap_name) else {
                return Err(BrewlockError::MissingTapRevision {
                    tap: tap_name.clone(),
                });
            };
            entries.tap.insert(
                tap_name.clone(),
                TapEntry {
                    revision: revision.clone(),
                },
            );
        }
        Ok(())
    }

    fn lock_formulae(&self, formulae: &[String], entries: &mut LockEntries) -> Result<()> {
        if formulae.is_empty() {
            return Ok(());
        }

        let task = self.reporter.task("Querying installed formulae");
        let table = match formula::installed_map(self.runner) {
            Ok(table) => table,
            Err(err) => {
                task.fail("Failed to query installed formulae");
                return Err(err);
            }
        };
        task.done("Queried installed formulae");

        for name in formulae {
            let Some(resolved) = table.get(name) else {
                return Err(BrewlockError::UnresolvedFormula { name: name.clone() });
            };
            entries.brew.insert(
                name.clone(),
                FormulaEntry {
                    version: resolved.version.clone(),
                    tap: resolved.tap.clone(),
                },
            );
        }
        Ok(())
    }

    fn lock_casks(&self, casks: &[String], entries: &mut LockEntries) -> Result<()> {
        if casks.is_empty() {
            return Ok(());
        }

        let task = self.reporter.task("Querying installed casks");
        let table = match cask::installed_map(self.runner) {
            Ok(table) => table,
            Err(err) => {
                task.fail("Failed to query installed casks");
                return Err(err);
            }
        };
        task.done("Queried installed casks");

        for token in casks {
            let Some(resolved) = table.get(token) else {
                return Err(BrewlockError::UnresolvedCask { name: token.clone() });
            };
            entries.cask.insert(
                token.clone(),
                CaskEntry {
                    version: resolved.version.clone(),
                    tap: resolved.tap.clone(),
                },
            );
        }
        Ok(())
    }

    fn lock_store_apps(&self, store_apps: &[StoreApp], entries: &mut LockEntries) -> Result<()> {
        if store_apps.is_empty() {
            return Ok(());
        }

        let task = self.reporter.task("Querying App Store apps");
        let table = match mas::installed_apps(self.runner) {
            Ok(table) => table,
            Err(err) => {
                task.fail("Failed to query App Store apps");
                return Err(err);
            }
        };
        task.done("Queried App Store apps");

        for app in store_apps {
            // Lookup is by store ID; the declared display name is what the
            // lock entry is keyed by.
            let Some(record) = table.get(&app.id) else {
                return Err(BrewlockError::UnresolvedStoreApp {
                    name: app.name.clone(),
                    id: app.id.clone(),
                });
            };
            entries.mas.insert(
                app.name.clone(),
                StoreAppEntry {
                    id: app.id.clone(),
                    version: record.version.clone(),
                },
            );
        }
        Ok(())
    }

    fn lock_extensions(&self, extensions: &[String], entries: &mut LockEntries) -> Result<()> {
        if extensions.is_empty() {
            return Ok(());
        }

        let task = self.reporter.task("Querying editor extensions");
        let table = match editor::installed_extensions(self.runner) {
            Ok(table) => table,
            Err(err) => {
                task.fail("Failed to query editor extensions");
                return Err(err);
            }
        };
        task.done("Queried editor extensions");

        for identifier in extensions {
            let Some(version) = table.get(identifier) else {
                return Err(BrewlockError::UnresolvedExtension {
                    name: identifier.clone(),
                });
            };
            entries.vscode.insert(
                identifier.clone(),
                ExtensionEntry {
                    version: version.clone(),
                },
            );
        }
        Ok(())
    }
}
