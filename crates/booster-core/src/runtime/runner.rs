//! Shell command execution
//!
//! Every external effect of the pipeline goes through a [`CommandRunner`].
//! Each call blocks the pipeline until the child exits.

use crate::error::ScaffoldError;
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command as TokioCommand;

/// Runs one shell command to completion
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run `command` through the shell; any unsuccessful exit is an error
    async fn run(&mut self, command: &str) -> Result<(), ScaffoldError>;
}

/// Runs commands through the system shell with inherited stdio
///
/// There is no timeout: a hanging generator or install blocks until the operator
/// interrupts it.
#[derive(Debug, Clone)]
pub struct ShellRunner {
    workdir: PathBuf,
}

impl ShellRunner {
    /// Create a runner whose commands start in `workdir`
    pub fn new(workdir: impl AsRef<Path>) -> Self {
        Self {
            workdir: workdir.as_ref().to_path_buf(),
        }
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    fn shell(command: &str) -> TokioCommand {
        if cfg!(windows) {
            let mut cmd = TokioCommand::new("cmd");
            cmd.arg("/C").arg(command);
            cmd
        } else {
            let mut cmd = TokioCommand::new("sh");
            cmd.arg("-c").arg(command);
            cmd
        }
    }
}

impl CommandRunner for ShellRunner {
    async fn run(&mut self, command: &str) -> Result<(), ScaffoldError> {
        println!("{} {}", "Running:".dimmed(), command.yellow());

        let status = Self::shell(command)
            .current_dir(&self.workdir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|source| ScaffoldError::Spawn {
                command: command.to_string(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(ScaffoldError::CommandFailed {
                command: command.to_string(),
                code: status.code(),
            })
        }
    }
}

/// Records commands instead of running them
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingRunner {
    pub commands: Vec<String>,
    /// Zero-based invocation that exits non-zero
    pub fail_at: Option<usize>,
}

#[cfg(test)]
impl RecordingRunner {
    pub fn failing_at(index: usize) -> Self {
        Self {
            commands: Vec::new(),
            fail_at: Some(index),
        }
    }
}

#[cfg(test)]
impl CommandRunner for RecordingRunner {
    async fn run(&mut self, command: &str) -> Result<(), ScaffoldError> {
        let index = self.commands.len();
        self.commands.push(command.to_string());
        if self.fail_at == Some(index) {
            return Err(ScaffoldError::CommandFailed {
                command: command.to_string(),
                code: Some(1),
            });
        }
        Ok(())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_successful_command() {
        let dir = tempfile::tempdir().unwrap();
        let mut runner = ShellRunner::new(dir.path());

        runner.run("mkdir made-here").await.unwrap();
        assert!(dir.path().join("made-here").is_dir());
    }

    #[tokio::test]
    async fn test_non_zero_exit_is_reported_with_command() {
        let dir = tempfile::tempdir().unwrap();
        let mut runner = ShellRunner::new(dir.path());

        let err = runner.run("exit 3").await.unwrap_err();
        match err {
            ScaffoldError::CommandFailed { command, code } => {
                assert_eq!(command, "exit 3");
                assert_eq!(code, Some(3));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_workdir_is_a_spawn_failure() {
        let dir = tempfile::tempdir().unwrap();
        let mut runner = ShellRunner::new(dir.path().join("gone"));

        let err = runner.run("true").await.unwrap_err();
        assert!(matches!(err, ScaffoldError::Spawn { .. }));
        assert_eq!(err.exit_code(), 1);
    }
}
