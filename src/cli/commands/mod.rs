//! CLI command implementations.
//!
//! [`dispatch`] routes parsed arguments to a command; a bare `brewlock`
//! invocation runs `lock` with default paths.

pub mod completions;
pub mod lock;

use crate::cli::{Cli, Commands, LockArgs};
use crate::error::Result;
use crate::ui::Reporter;

/// Route the parsed CLI to its command.
pub fn dispatch(cli: &Cli, reporter: &Reporter) -> Result<()> {
    match &cli.command {
        Some(Commands::Lock(args)) => lock::run(args, reporter),
        Some(Commands::Completions(args)) => completions::run(args),
        None => lock::run(&LockArgs::default(), reporter),
    }
}
