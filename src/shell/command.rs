//! Command execution through a swappable capability.
//!
//! Backend inventories (`brew`, `mas`, editor CLIs) and host introspection
//! (`sw_vers`, `uname`) are all plain child processes whose stdout we parse.
//! [`CommandRunner`] is the seam between adapters and the operating system:
//! production code uses [`SystemRunner`], tests script responses per command
//! line without spawning anything.

use crate::error::{BrewlockError, Result};
use std::process::Command;

/// Render a program and its arguments as a single display string.
///
/// Used in error messages so a failing query names the exact invocation.
pub fn command_line(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}

/// Capability for running an external program and capturing its stdout.
///
/// A non-zero exit or spawn failure is a query failure; callers never see
/// partial output. Queries are synchronous and unbounded: whatever timeout
/// semantics exist belong to the child process itself.
pub trait CommandRunner {
    /// Run `program` with `args`, returning captured stdout on success.
    fn run(&self, program: &str, args: &[&str]) -> Result<String>;
}

/// [`CommandRunner`] backed by `std::process::Command`.
///
/// Programs are resolved through `PATH`; stdout and stderr are captured,
/// stderr is discarded (backend diagnostics are not part of any inventory
/// format we parse).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String> {
        tracing::debug!("running: {}", command_line(program, args));

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|_| BrewlockError::CommandFailed {
                command: command_line(program, args),
                code: None,
            })?;

        if !output.status.success() {
            return Err(BrewlockError::CommandFailed {
                command: command_line(program, args),
                code: output.status.code(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Scripted [`CommandRunner`] for tests.
///
/// Responses are keyed by the rendered command line. Unscripted commands fail
/// the way a missing executable would, and every invocation is recorded so
/// tests can assert that lazily-gated adapters were never queried.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct ScriptedRunner {
    responses: std::collections::HashMap<String, std::result::Result<String, i32>>,
    calls: std::cell::RefCell<Vec<String>>,
}

#[cfg(test)]
impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a successful response for a command line.
    pub fn respond(mut self, command: &str, stdout: &str) -> Self {
        self.responses
            .insert(command.to_string(), Ok(stdout.to_string()));
        self
    }

    /// Script a non-zero exit for a command line.
    pub fn fail(mut self, command: &str, code: i32) -> Self {
        self.responses.insert(command.to_string(), Err(code));
        self
    }

    /// Every command line run so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

#[cfg(test)]
impl CommandRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String> {
        let command = command_line(program, args);
        self.calls.borrow_mut().push(command.clone());
        match self.responses.get(&command) {
            Some(Ok(stdout)) => Ok(stdout.clone()),
            Some(Err(code)) => Err(BrewlockError::CommandFailed {
                command,
                code: Some(*code),
            }),
            None => Err(BrewlockError::CommandFailed {
                command,
                code: None,
            }),
        }
    }
}
