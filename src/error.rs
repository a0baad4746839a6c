use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by individual migration steps.
///
/// The engine decides per step whether an error aborts the run or only
/// degrades the final report; nothing in here carries that policy.
#[derive(Debug, Error)]
pub enum MigrateError {
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to serialize {}: {source}", .path.display())]
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{} does not contain a JSON object", .path.display())]
    NotAnObject { path: PathBuf },

    #[error("failed to run `{command}`: {source}")]
    Spawn { command: String, source: io::Error },

    #[error("`{command}` {status}")]
    CommandFailed { command: String, status: String },

    #[error("git: {0}")]
    Git(#[from] git2::Error),
}

impl MigrateError {
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Build a failure for a child process that ran but did not succeed.
    /// `code` is `None` when the process was terminated by a signal.
    pub fn command_failed(command: impl Into<String>, code: Option<i32>) -> Self {
        let status = match code {
            Some(code) => format!("exited with status {}", code),
            None => "was terminated by a signal".to_string(),
        };
        Self::CommandFailed {
            command: command.into(),
            status,
        }
    }
}

pub type Result<T> = std::result::Result<T, MigrateError>;
