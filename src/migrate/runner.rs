use crate::error::{MigrateError, Result};
use std::fmt;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

/// A program plus arguments, ready to be run in a project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl PackageCommand {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for PackageCommand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Runs external commands on behalf of the migration.
///
/// Returns the exit code, or `None` if the process was killed by a signal.
/// Tests substitute a recording fake so no package manager is invoked.
pub trait CommandRunner {
    fn run(&self, command: &PackageCommand, cwd: &Path) -> Result<Option<i32>>;
}

/// Spawns real processes with the terminal's stdio inherited.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, command: &PackageCommand, cwd: &Path) -> Result<Option<i32>> {
        debug!(command = %command, cwd = %cwd.display(), "spawning");

        let status = Command::new(&command.program)
            .args(&command.args)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| MigrateError::Spawn {
                command: command.to_string(),
                source,
            })?;

        debug!(command = %command, code = ?status.code(), "finished");
        Ok(status.code())
    }
}

/// Run `command` and turn anything other than a zero exit into an error.
pub fn run_checked<R>(runner: &R, command: &PackageCommand, cwd: &Path) -> Result<()>
where
    R: CommandRunner + ?Sized,
{
    match runner.run(command, cwd)? {
        Some(0) => Ok(()),
        code => Err(MigrateError::command_failed(command.to_string(), code)),
    }
}
