//! The `lock` command: rebuild the lockfile from live system state.
//!
//! Order of operations is the error taxonomy: the manifest check precedes
//! any query, queries precede reconciliation, and the output file is written
//! only after the whole document exists in memory.

use crate::cli::LockArgs;
use crate::error::{BrewlockError, Result};
use crate::lock::{LockDocument, Reconciler, RunContext};
use crate::manifest::Manifest;
use crate::shell::SystemRunner;
use crate::ui::Reporter;
use std::fs;

pub fn run(args: &LockArgs, reporter: &Reporter) -> Result<()> {
    if !args.manifest.exists() {
        return Err(BrewlockError::ManifestNotFound {
            path: args.manifest.clone(),
        });
    }

    let text = fs::read_to_string(&args.manifest)?;
    let manifest = Manifest::parse(&text);
    reporter.detail(&format!(
        "{}: {} declarations ({} taps, {} formulae, {} casks, {} store apps, {} extensions)",
        args.manifest.display(),
        manifest.declaration_count(),
        manifest.taps.len(),
        manifest.formulae.len(),
        manifest.casks.len(),
        manifest.store_apps.len(),
        manifest.extensions.len(),
    ));

    let runner = SystemRunner;
    let context = RunContext::capture(&runner)?;
    let entries = Reconciler::new(&runner, reporter).reconcile(&manifest)?;
    let document = LockDocument::assemble(context, entries);

    fs::write(&args.output, document.to_json()?)?;
    reporter.success(&format!(
        "Wrote {} ({} entries)",
        args.output.display(),
        document.entries.len(),
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::OutputMode;
    use std::path::PathBuf;

    #[test]
    fn missing_manifest_fails_before_any_query() {
        let args = LockArgs {
            manifest: PathBuf::from("/nonexistent/Brewfile"),
            output: PathBuf::from("/nonexistent/Brewfile.lock.json"),
        };
        let reporter = Reporter::new(OutputMode::Quiet);

        let err = run(&args, &reporter).unwrap_err();
        assert!(matches!(err, BrewlockError::ManifestNotFound { .. }));
    }
}
