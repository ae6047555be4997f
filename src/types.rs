//! Workshop Setup - Type Definitions
//!
//! Shared types for the environment setup orchestrator.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ─── Configuration ───────────────────────────────────────────────

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SetupConfig {
    /// Directory name of the virtual environment created in the working
    /// directory.
    pub env_name: String,
    /// Display name shown in the Jupyter kernel picker.
    pub kernel_display_name: String,
    /// Path to the requirements manifest. May start with `~`.
    pub requirements_file: String,
    /// Notebook the next-steps panel tells the attendee to open.
    pub notebook_file: String,
    /// Interpreter used to create the environment. Defaults to the
    /// platform interpreter (`python` on Windows, `python3` elsewhere).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub python_command: Option<String>,
}

impl Default for SetupConfig {
    fn default() -> Self {
        default_config()
    }
}

/// Returns the built-in `SetupConfig` used when no config file overrides
/// anything: the workshop environment name, kernel label, and manifest path.
pub fn default_config() -> SetupConfig {
    SetupConfig {
        env_name: "data_analytics_env".to_string(),
        kernel_display_name: "Data Analytics Workshop".to_string(),
        requirements_file: "requirements.txt".to_string(),
        notebook_file: "financial_analysis_workshop.ipynb".to_string(),
        python_command: None,
    }
}

// ─── Command Execution ───────────────────────────────────────────

/// Seam for executing external commands. The real implementation spawns
/// child processes; tests substitute a scripted runner.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Execute `command` and capture its output. With `shell` set, the
    /// command line goes through the platform shell (needed when an
    /// argument carries quoting); otherwise it is split on whitespace.
    async fn exec(&self, command: &str, shell: bool) -> anyhow::Result<ExecResult>;
}

/// Captured result of a single command invocation.
#[derive(Clone, Debug, Default)]
pub struct ExecResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl ExecResult {
    /// A zero exit code is the sole success criterion, matching the tools
    /// being invoked. Warnings on stderr with exit 0 count as success.
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

// ─── Errors ──────────────────────────────────────────────────────

/// Fatal setup failures. Non-fatal step failures are reported on the
/// console and never surface as errors.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("could not run `{command}`; is Python installed and on PATH?")]
    PythonNotFound { command: String },

    #[error("Python {found} is too old; Python {min} or newer is required")]
    UnsupportedPython { found: String, min: String },

    #[error("{step} failed")]
    StepFailed { step: String },
}
