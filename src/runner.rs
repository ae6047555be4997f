//! Command Runner
//!
//! Executes external commands and reports per-step success or failure.
//! The `CommandRunner` trait lives in `types`; `LocalRunner` is the real
//! implementation backed by `tokio::process`.

use anyhow::{Context, Result};
use async_trait::async_trait;
use colored::Colorize;
use tokio::process::Command;
use tracing::debug;

use crate::types::{CommandRunner, ExecResult};

/// Runs commands as child processes on the local machine, blocking on each
/// until it exits.
pub struct LocalRunner;

#[async_trait]
impl CommandRunner for LocalRunner {
    async fn exec(&self, command: &str, shell: bool) -> Result<ExecResult> {
        let output = if shell {
            shell_command(command)
                .output()
                .await
                .with_context(|| format!("Failed to spawn shell for `{}`", command))?
        } else {
            let mut parts = command.split_whitespace();
            let program = parts.next().context("Empty command line")?;
            Command::new(program)
                .args(parts)
                .output()
                .await
                .with_context(|| format!("Failed to spawn `{}`", program))?
        };

        Ok(ExecResult {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            // A status without a code means the child died on a signal.
            exit_code: output.status.code().unwrap_or(-1),
        })
    }
}

/// Wrap a command line in the platform shell. Used for the one step whose
/// arguments carry quoting (the kernel display name).
fn shell_command(command: &str) -> Command {
    if cfg!(windows) {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", command]);
        cmd
    } else {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", command]);
        cmd
    }
}

/// Run one setup command and print a labeled success or failure line.
///
/// Returns `true` on exit code 0. Every failure mode -- non-zero exit,
/// failure to even launch the command -- is converted into a printed
/// failure line plus `false`; this helper never returns an error.
pub async fn run_command(
    runner: &dyn CommandRunner,
    command: &str,
    description: &str,
    shell: bool,
) -> bool {
    println!();
    println!(
        "  {} {}",
        "\u{2192}".cyan(),
        format!("{}...", description).white()
    );
    debug!(command, shell, "executing external command");

    match runner.exec(command, shell).await {
        Ok(result) if result.success() => {
            debug!(exit_code = result.exit_code, "command succeeded");
            println!(
                "{}",
                format!("  {} completed successfully.", description).green()
            );
            true
        }
        Ok(result) => {
            debug!(exit_code = result.exit_code, "command failed");
            let detail = if result.stderr.trim().is_empty() {
                result.stdout.trim().to_string()
            } else {
                result.stderr.trim().to_string()
            };
            if detail.is_empty() {
                println!(
                    "{}",
                    format!("  {} failed (exit code {}).", description, result.exit_code).red()
                );
            } else {
                println!("{}", format!("  {} failed: {}", description, detail).red());
            }
            false
        }
        Err(e) => {
            println!("{}", format!("  {} failed: {:#}", description, e).red());
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;

    struct FailingRunner;

    #[async_trait]
    impl CommandRunner for FailingRunner {
        async fn exec(&self, _command: &str, _shell: bool) -> Result<ExecResult> {
            bail!("no such program");
        }
    }

    struct StaticRunner {
        result: ExecResult,
    }

    #[async_trait]
    impl CommandRunner for StaticRunner {
        async fn exec(&self, _command: &str, _shell: bool) -> Result<ExecResult> {
            Ok(self.result.clone())
        }
    }

    #[tokio::test]
    async fn test_run_command_converts_runner_errors_to_false() {
        let ok = run_command(&FailingRunner, "definitely-not-a-program", "Doing nothing", false)
            .await;
        assert!(!ok);
    }

    #[tokio::test]
    async fn test_run_command_true_on_zero_exit() {
        let runner = StaticRunner {
            result: ExecResult::default(),
        };
        assert!(run_command(&runner, "true", "Succeeding", false).await);
    }

    #[tokio::test]
    async fn test_run_command_false_on_nonzero_exit() {
        let runner = StaticRunner {
            result: ExecResult {
                stdout: String::new(),
                stderr: "boom".to_string(),
                exit_code: 2,
            },
        };
        assert!(!run_command(&runner, "false", "Failing", false).await);
    }

    #[tokio::test]
    async fn test_local_runner_rejects_empty_command() {
        assert!(LocalRunner.exec("", false).await.is_err());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_local_runner_captures_stdout() {
        let result = LocalRunner.exec("echo hello", false).await.unwrap();
        assert_eq!(result.exit_code, 0);
        assert_eq!(result.stdout.trim(), "hello");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_local_runner_shell_mode_expands_quoting() {
        let result = LocalRunner.exec("echo \"a b\"", true).await.unwrap();
        assert_eq!(result.stdout.trim(), "a b");
    }
}
