//! Environment and process abstractions for testability
//!
//! The production implementations read the real process environment and run
//! commands with tokio, inheriting the terminal so interactive steps work.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::error::{RefreshError, Result};

/// Source of environment variables
#[cfg_attr(test, mockall::automock)]
pub trait EnvSource: Send + Sync {
    /// Value of the variable, if set
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads the environment of the current process
#[derive(Debug, Default, Clone)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// A command line to run as one pipeline step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepCommand {
    /// Name used in logs and errors, e.g. "migrate auth"
    pub label: String,
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: Option<PathBuf>,
}

impl std::fmt::Display for StepCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Runs a step to completion
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run the command and return its exit code
    ///
    /// A process killed by a signal reports -1.
    async fn run(&self, command: &StepCommand) -> Result<i32>;
}

/// Tokio implementation of CommandRunner
#[derive(Debug, Default, Clone)]
pub struct TokioCommandRunner;

impl TokioCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandRunner for TokioCommandRunner {
    async fn run(&self, command: &StepCommand) -> Result<i32> {
        debug!("Spawning: {}", command);

        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args)
            .stdin(std::process::Stdio::inherit())
            .stdout(std::process::Stdio::inherit())
            .stderr(std::process::Stdio::inherit());
        if let Some(dir) = &command.working_dir {
            cmd.current_dir(dir);
        }

        let status = cmd.status().await.map_err(|e| RefreshError::Spawn {
            step: command.label.clone(),
            message: format!("{}: {}", command.program, e),
        })?;

        debug!("{} exited with {}", command.label, status);
        Ok(status.code().unwrap_or(-1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(program: &str, args: &[&str]) -> StepCommand {
        StepCommand {
            label: "test".to_string(),
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            working_dir: None,
        }
    }

    #[test]
    fn display_joins_program_and_args() {
        let cmd = command("python", &["manage.py", "migrate", "auth"]);
        assert_eq!(cmd.to_string(), "python manage.py migrate auth");
    }

    #[test]
    fn process_env_reads_real_environment() {
        let env = ProcessEnv;
        assert!(env.var("PATH").is_some());
        assert!(env.var("DEV_REFRESH_SURELY_UNSET_VARIABLE").is_none());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn runner_reports_exit_codes() {
        let runner = TokioCommandRunner::new();
        assert_eq!(runner.run(&command("true", &[])).await.unwrap(), 0);
        assert_eq!(runner.run(&command("sh", &["-c", "exit 7"])).await.unwrap(), 7);
    }

    #[tokio::test]
    async fn runner_reports_spawn_failure() {
        let runner = TokioCommandRunner::new();
        let err = runner
            .run(&command("/nonexistent/dev-refresh-python", &[]))
            .await
            .unwrap_err();
        match err {
            RefreshError::Spawn { step, message } => {
                assert_eq!(step, "test");
                assert!(message.starts_with("/nonexistent/dev-refresh-python"), "{message}");
            }
            other => panic!("expected RefreshError::Spawn, got {other:?}"),
        }
    }
}
