//! External process execution
//!
//! Every build tool is an opaque subprocess. [`CommandRunner`] is the seam
//! between planning and execution; [`SystemRunner`] is the real thing.

use std::path::Path;
use std::process::Command;

use crate::core::build_env::BuildEnvironment;
use crate::core::protocol::Invocation;
use crate::error::BuildError;

/// Runs a single invocation to completion
pub trait CommandRunner {
    /// Run `invocation` in `cwd` with `env` applied.
    ///
    /// Returns an error if the process cannot be started or exits non-zero.
    fn run(
        &mut self,
        invocation: &Invocation,
        cwd: &Path,
        env: &BuildEnvironment,
    ) -> Result<(), BuildError>;
}

/// Runs invocations as real child processes.
///
/// The command line is echoed to stdout before the process starts. Output
/// of the child goes straight to the terminal.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl SystemRunner {
    /// Create a new runner
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn run(
        &mut self,
        invocation: &Invocation,
        cwd: &Path,
        env: &BuildEnvironment,
    ) -> Result<(), BuildError> {
        let command = invocation.to_string();
        println!("{command}");
        tracing::debug!("Running in {}: {command}", cwd.display());

        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(cwd)
            .envs(env.to_env_map())
            .status()
            .map_err(|e| BuildError::SpawnFailed {
                command: command.clone(),
                error: e.to_string(),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(BuildError::CommandFailed {
                command,
                status: status.to_string(),
            })
        }
    }
}
