//! Shell completions generation.
//!
//! The `brewlock completions` command generates shell completion scripts.

use crate::cli::{Cli, CompletionsArgs};
use crate::error::Result;
use clap::CommandFactory;

pub fn run(args: &CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(args.shell, &mut cmd, "brewlock", &mut std::io::stdout());
    Ok(())
}
