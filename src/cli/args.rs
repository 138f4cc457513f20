//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// brewlock - Snapshot installed packages into a lockfile.
#[derive(Debug, Parser)]
#[command(name = "brewlock")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Rebuild the lockfile from live system state (default)
    Lock(LockArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `lock` command.
#[derive(Debug, Clone, clap::Args)]
pub struct LockArgs {
    /// Path to the manifest
    #[arg(short, long, default_value = "Brewfile")]
    pub manifest: PathBuf,

    /// Path to the lockfile to write
    #[arg(short, long, default_value = "Brewfile.lock.json")]
    pub output: PathBuf,
}

impl Default for LockArgs {
    fn default() -> Self {
        Self {
            manifest: PathBuf::from("Brewfile"),
            output: PathBuf::from("Brewfile.lock.json"),
        }
    }
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
