//! Installed-formula inventory.
//!
//! One `brew info --json=v2 --installed` round-trip covers every installed
//! formula. The resolution table is keyed by every identity Homebrew
//! recognizes for a formula — short name, fully-qualified name, and all
//! aliases — so a manifest may declare any of them. When the same alias is
//! reported for two formulae the later one wins silently.

use crate::backend::ResolvedPackage;
use crate::error::{BrewlockError, Result};
use crate::shell::{command_line, CommandRunner};
use serde::Deserialize;
use std::collections::HashMap;

const QUERY: [&str; 3] = ["info", "--json=v2", "--installed"];

#[derive(Debug, Deserialize)]
struct Inventory {
    #[serde(default)]
    formulae: Vec<Formula>,
}

#[derive(Debug, Deserialize)]
struct Formula {
    name: Option<String>,
    full_name: Option<String>,
    #[serde(default)]
    aliases: Vec<String>,
    tap: Option<String>,
    #[serde(default)]
    installed: Vec<InstallReceipt>,
}

/// One install record; a formula upgraded in place accumulates several.
#[derive(Debug, Deserialize)]
struct InstallReceipt {
    version: Option<String>,
    /// Install timestamp (epoch seconds). Absent on receipts written by old
    /// Homebrew versions; those sort as oldest.
    time: Option<i64>,
}

impl Formula {
    /// Every identity this formula can be declared under, empty names dropped.
    fn identities(&self) -> impl Iterator<Item = String> + '_ {
        self.name
            .iter()
            .chain(self.full_name.iter())
            .chain(self.aliases.iter())
            .filter(|identity| !identity.is_empty())
            .cloned()
    }
}

/// Build the formula resolution table from the live inventory.
///
/// Version selection when multiple install receipts exist: the receipt with
/// the latest install timestamp wins, ties broken by encounter order (the
/// sort is stable). Formulae with no versioned receipt are left out of the
/// table — declaring one is then an unresolved-declaration failure, not a
/// query failure.
pub fn installed_map(runner: &dyn CommandRunner) -> Result<HashMap<String, ResolvedPackage>> {
    let raw = runner.run("brew", &QUERY)?;
    let inventory: Inventory =
        serde_json::from_str(&raw).map_err(|source| BrewlockError::MalformedResponse {
            command: command_line("brew", &QUERY),
            source,
        })?;

    let mut map = HashMap::new();
    for formula in &inventory.formulae {
        let mut receipts: Vec<&InstallReceipt> = formula.installed.iter().collect();
        receipts.sort_by_key(|receipt| receipt.time.unwrap_or(0));

        let Some(version) = receipts.last().and_then(|receipt| receipt.version.clone()) else {
            continue;
        };

        let resolved = ResolvedPackage {
            version,
            tap: formula.tap.clone(),
        };
        for identity in formula.identities() {
            map.insert(identity, resolved.clone());
        }
    }

    tracing::debug!(
        "indexed {} formulae under {} identities",
        inventory.formulae.len(),
        map.len(),
    );
    Ok(map)
}
