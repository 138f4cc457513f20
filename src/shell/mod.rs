//! External command execution.
//!
//! Every backend query goes through the [`CommandRunner`] capability so the
//! reconciliation engine never talks to `std::process` directly. Tests
//! substitute a scripted implementation.

pub mod command;

pub use command::{command_line, CommandRunner, SystemRunner};

#[cfg(test)]
pub(crate) use command::ScriptedRunner;
