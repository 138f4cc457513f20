//! Host system introspection.
//!
//! The lock document records which machine produced it: macOS product and
//! build version from `sw_vers`, CPU architecture from `uname -m`. Captured
//! once per run, at run start, and threaded through as plain data so nothing
//! downstream reaches for ambient host state.

use crate::error::Result;
use crate::shell::CommandRunner;
use serde::Serialize;

/// macOS version identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MacosVersion {
    /// Product version, e.g. `14.5`.
    pub product: String,
    /// Build version, e.g. `23F79`.
    pub build: String,
}

/// Host metadata embedded in the lock document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemInfo {
    pub macos: MacosVersion,
    /// CPU architecture, e.g. `arm64`.
    pub architecture: String,
}

/// Snapshot the host's OS version and architecture.
pub fn snapshot(runner: &dyn CommandRunner) -> Result<SystemInfo> {
    let product = runner.run("sw_vers", &["-productVersion"])?.trim().to_string();
    let build = runner.run("sw_vers", &["-buildVersion"])?.trim().to_string();
    let architecture = runner.run("uname", &["-m"])?.trim().to_string();

    Ok(SystemInfo {
        macos: MacosVersion { product, build },
        architecture,
    })
}
