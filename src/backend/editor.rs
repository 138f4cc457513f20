//! Editor extension inventory.
//!
//! VS Code forks share one CLI surface; the candidates are tried in a fixed
//! order and the first one that responds supplies the whole extension table.
//! `--list-extensions --show-versions` prints one `identifier@version` line
//! per installed extension.

use crate::error::{BrewlockError, Result};
use crate::shell::CommandRunner;
use std::collections::HashMap;

/// Editor CLIs to try, in preference order.
pub const EDITOR_CLIS: [&str; 4] = ["code", "cursor", "codium", "code-insiders"];

/// Build the extension resolution table from the first responding editor CLI.
///
/// A candidate that fails to spawn or exits non-zero is skipped; only when
/// every candidate fails is the run aborted. Lines without an `@` separator
/// are ignored.
pub fn installed_extensions(runner: &dyn CommandRunner) -> Result<HashMap<String, String>> {
    for cli in EDITOR_CLIS {
        let raw = match runner.run(cli, &["--list-extensions", "--show-versions"]) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::debug!("editor CLI '{cli}' unavailable: {err}");
                continue;
            }
        };

        let mut extensions = HashMap::new();
        for line in raw.lines() {
            let Some((identifier, version)) = line.trim().split_once('@') else {
                continue;
            };
            extensions.insert(identifier.to_string(), version.to_string());
        }

        tracing::debug!("indexed {} extensions via '{cli}'", extensions.len());
        return Ok(extensions);
    }

    Err(BrewlockError::NoEditorCli)
}
