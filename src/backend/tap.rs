//! Tap revision lookup.
//!
//! There is no bulk tap-listing query, so each declared tap costs one
//! `brew tap-info --json <tap>` round-trip. A tap whose info carries no HEAD
//! revision fails the run immediately — a lockfile cannot pin a tap it
//! cannot identify a revision for.

use crate::error::{BrewlockError, Result};
use crate::shell::{command_line, CommandRunner};
use serde::Deserialize;
use std::collections::HashMap;

/// The slice of `brew tap-info --json` output we care about.
///
/// Homebrew has emitted the revision under both `HEAD` and `head` across
/// versions; accept either spelling.
#[derive(Debug, Deserialize)]
struct TapInfo {
    #[serde(alias = "HEAD")]
    head: Option<String>,
}

/// Resolve the HEAD revision of every declared tap.
///
/// Taps are resolved independently, in declaration order; the first tap with
/// a missing revision aborts without querying the rest.
pub fn revisions(
    runner: &dyn CommandRunner,
    taps: &[String],
) -> Result<HashMap<String, String>> {
    let mut revisions = HashMap::new();

    for tap in taps {
        let args = ["tap-info", "--json", tap.as_str()];
        let raw = runner.run("brew", &args)?;
        let info: Vec<TapInfo> =
            serde_json::from_str(&raw).map_err(|source| BrewlockError::MalformedResponse {
                command: command_line("brew", &args),
                source,
            })?;

        let head = info
            .first()
            .and_then(|tap_info| tap_info.head.clone())
            .filter(|head| !head.is_empty());

        match head {
            Some(head) => {
                tracing::debug!("tap {tap} at revision {head}");
                revisions.insert(tap.clone(), head);
            }
            None => {
                return Err(BrewlockError::MissingTapRevision { tap: tap.clone() });
            }
        }
    }

    Ok(revisions)
}
