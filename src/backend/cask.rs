//! Installed-cask inventory.
//!
//! One `brew info --json=v2 --cask --installed` round-trip. Casks are keyed
//! by token only. The installed version has reshaped across Homebrew
//! releases — sometimes a list of installed versions, sometimes a single
//! string — so resolution applies a fixed precedence: most recent entry of a
//! non-empty list, else a non-empty scalar, else the cask's nominal version.

use crate::backend::ResolvedPackage;
use crate::error::{BrewlockError, Result};
use crate::shell::{command_line, CommandRunner};
use serde::Deserialize;
use std::collections::HashMap;

const QUERY: [&str; 4] = ["info", "--json=v2", "--cask", "--installed"];

#[derive(Debug, Deserialize)]
struct Inventory {
    #[serde(default)]
    casks: Vec<Cask>,
}

#[derive(Debug, Deserialize)]
struct Cask {
    token: Option<String>,
    tap: Option<String>,
    /// Nominal (declared) version, the fallback when no installed-version
    /// data exists.
    version: Option<String>,
    #[serde(default)]
    installed: Option<InstalledVersions>,
}

/// The `installed` field as emitted by different Homebrew versions.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InstalledVersions {
    Many(Vec<String>),
    One(String),
}

impl Cask {
    fn resolved_version(&self) -> Option<String> {
        match &self.installed {
            Some(InstalledVersions::Many(versions)) => {
                versions.last().cloned().or_else(|| self.version.clone())
            }
            Some(InstalledVersions::One(version)) if !version.is_empty() => {
                Some(version.clone())
            }
            _ => self.version.clone(),
        }
    }
}

/// Build the cask resolution table from the live inventory.
///
/// Casks missing a token or resolving to no version at all are left out of
/// the table; declaring one becomes an unresolved-declaration failure.
pub fn installed_map(runner: &dyn CommandRunner) -> Result<HashMap<String, ResolvedPackage>> {
    let raw = runner.run("brew", &QUERY)?;
    let inventory: Inventory =
        serde_json::from_str(&raw).map_err(|source| BrewlockError::MalformedResponse {
            command: command_line("brew", &QUERY),
            source,
        })?;

    let mut map = HashMap::new();
    for cask in &inventory.casks {
        let (Some(token), Some(version)) = (cask.token.clone(), cask.resolved_version()) else {
            continue;
        };
        map.insert(
            token,
            ResolvedPackage {
                version,
                tap: cask.tap.clone(),
            },
        );
    }

    tracing::debug!("indexed {} casks", map.len());
    Ok(map)
}
