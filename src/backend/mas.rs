//! Mac App Store inventory.
//!
//! One `mas list` round-trip. Output is line-oriented:
//!
//! ```text
//! 497799835  Xcode         (15.4)
//! 1295203466 Microsoft Remote Desktop (10.9.5)
//! ```
//!
//! The table is keyed by the numeric store ID as a string — app names are
//! not guaranteed unique, IDs are. Lines that do not match the expected
//! shape are skipped; `mas` prints warnings on stdout in some setups.

use crate::error::Result;
use crate::shell::CommandRunner;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static RE_APP_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\s+(.+?)\s+\(([^)]+)\)$").unwrap());

/// Installed App Store app: display name and version, looked up by ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreAppRecord {
    pub name: String,
    pub version: String,
}

/// Build the store-app resolution table from `mas list`.
pub fn installed_apps(runner: &dyn CommandRunner) -> Result<HashMap<String, StoreAppRecord>> {
    let raw = runner.run("mas", &["list"])?;

    let mut apps = HashMap::new();
    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let Some(caps) = RE_APP_LINE.captures(line) else {
            tracing::debug!("skipping unrecognized mas list line: {line}");
            continue;
        };
        apps.insert(
            caps[1].to_string(),
            StoreAppRecord {
                name: caps[2].to_string(),
                version: caps[3].to_string(),
            },
        );
    }

    tracing::debug!("indexed {} App Store apps", apps.len());
    Ok(apps)
}
