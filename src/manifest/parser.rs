//! Manifest line recognition.
//!
//! Each declaration form is a leading keyword plus a double-quoted identity.
//! Patterns are anchored at the start of the (trimmed) line only, so trailing
//! Brewfile arguments such as `, restart_service: true` or `, args: [...]`
//! never interfere with recognition.

use regex::Regex;
use std::sync::LazyLock;

macro_rules! manifest_regex {
    ($name:ident, $pattern:expr) => {
        static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($pattern).unwrap());
    };
}

manifest_regex!(RE_TAP, r#"^tap\s+"([^"]+)""#);
manifest_regex!(RE_BREW, r#"^brew\s+"([^"]+)""#);
manifest_regex!(RE_CASK, r#"^cask\s+"([^"]+)""#);
manifest_regex!(RE_MAS, r#"^mas\s+"([^"]+)"\s*,\s*id:\s*(\d+)"#);
manifest_regex!(RE_VSCODE, r#"^vscode\s+"([^"]+)""#);

/// A declared Mac App Store app: display name plus numeric store ID.
///
/// The ID is kept as a string end to end; store IDs are identifiers, not
/// numbers, and the lock document records them as strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreApp {
    pub name: String,
    pub id: String,
}

/// Parsed manifest: declared identities grouped by kind, in manifest order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    /// `tap "owner/repo"` declarations.
    pub taps: Vec<String>,
    /// `brew "name"` declarations.
    pub formulae: Vec<String>,
    /// `cask "token"` declarations.
    pub casks: Vec<String>,
    /// `mas "Name", id: 12345` declarations.
    pub store_apps: Vec<StoreApp>,
    /// `vscode "publisher.extension"` declarations.
    pub extensions: Vec<String>,
}

impl Manifest {
    /// Parse manifest text into per-kind declaration lists.
    ///
    /// Blank lines and `#` comments are skipped; lines matching none of the
    /// five declaration forms are ignored. This never fails — only a missing
    /// installed record at reconciliation time does.
    pub fn parse(text: &str) -> Self {
        let mut manifest = Self::default();

        for raw_line in text.lines() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some(caps) = RE_TAP.captures(line) {
                manifest.taps.push(caps[1].to_string());
                continue;
            }
            if let Some(caps) = RE_BREW.captures(line) {
                manifest.formulae.push(caps[1].to_string());
                continue;
            }
            if let Some(caps) = RE_CASK.captures(line) {
                manifest.casks.push(caps[1].to_string());
                continue;
            }
            if let Some(caps) = RE_MAS.captures(line) {
                manifest.store_apps.push(StoreApp {
                    name: caps[1].to_string(),
                    id: caps[2].to_string(),
                });
                continue;
            }
            if let Some(caps) = RE_VSCODE.captures(line) {
                manifest.extensions.push(caps[1].to_string());
                continue;
            }
            tracing::debug!("ignoring unrecognized manifest line: {line}");
        }

        tracing::debug!(
            "parsed manifest: {} taps, {} formulae, {} casks, {} store apps, {} extensions",
            manifest.taps.len(),
            manifest.formulae.len(),
            manifest.casks.len(),
            manifest.store_apps.len(),
            manifest.extensions.len(),
        );

        manifest
    }

    /// Total number of declarations across all kinds.
    pub fn declaration_count(&self) -> usize {
        self.taps.len()
            + self.formulae.len()
            + self.casks.len()
            + self.store_apps.len()
            + self.extensions.len()
    }
}
