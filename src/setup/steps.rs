//! Setup Steps
//!
//! The setup orchestrator: a fixed sequence of external commands that
//! creates the workshop virtual environment, installs the dependencies,
//! and registers the Jupyter kernel. Fatal steps abort the run with a
//! remediation hint; non-fatal steps report the failure and continue.

use colored::Colorize;

use crate::config::resolve_path;
use crate::platform::Platform;
use crate::runner::run_command;
use crate::types::{CommandRunner, SetupConfig, SetupError};

use super::banner::{show_banner, show_next_steps};
use super::version::{probe_python_version, MIN_PYTHON};

/// Interpreter used for the version probe and environment creation: the
/// configured override, or the platform default.
fn python_command<'a>(platform: Platform, config: &'a SetupConfig) -> &'a str {
    config
        .python_command
        .as_deref()
        .unwrap_or_else(|| platform.python_command())
}

fn venv_command(platform: Platform, config: &SetupConfig) -> String {
    format!(
        "{} -m venv {}",
        python_command(platform, config),
        config.env_name
    )
}

fn pip_upgrade_command(platform: Platform, config: &SetupConfig) -> String {
    format!(
        "{} -m pip install --upgrade pip",
        platform.venv_python(&config.env_name)
    )
}

fn install_command(platform: Platform, config: &SetupConfig) -> String {
    format!(
        "{} install -r {}",
        platform.venv_pip(&config.env_name),
        resolve_path(&config.requirements_file)
    )
}

fn kernel_command(platform: Platform, config: &SetupConfig) -> String {
    format!(
        "{} -m ipykernel install --user --name={} --display-name=\"{}\"",
        platform.venv_python(&config.env_name),
        config.env_name,
        config.kernel_display_name
    )
}

/// Run the whole setup sequence.
///
/// Fatal failures (unusable Python, environment creation, package install)
/// return an error after printing a remediation hint; the upgrade and
/// kernel-registration steps only report and continue. Nothing created by
/// earlier steps is rolled back on failure.
pub async fn run_setup(
    runner: &dyn CommandRunner,
    platform: Platform,
    config: &SetupConfig,
) -> Result<(), SetupError> {
    show_banner();

    // ---- 1. Python version gate ---------------------------------------------
    println!("{}", "  [1/6] Checking Python".cyan());

    let python = python_command(platform, config);
    let version = match probe_python_version(runner, python).await {
        Ok(v) => v,
        Err(e) => {
            println!("{}", format!("  Could not detect Python: {:#}", e).red());
            println!(
                "{}",
                format!(
                    "  Install Python {}+ and make sure `{}` is on your PATH.",
                    MIN_PYTHON, python
                )
                .red()
            );
            return Err(SetupError::PythonNotFound {
                command: python.to_string(),
            });
        }
    };

    if version < MIN_PYTHON {
        println!(
            "{}",
            format!(
                "  Python {}+ is required. Current version: {}",
                MIN_PYTHON, version
            )
            .red()
        );
        return Err(SetupError::UnsupportedPython {
            found: version.to_string(),
            min: MIN_PYTHON.to_string(),
        });
    }

    println!("{}", format!("  Python {} detected", version).green());
    println!(
        "{}",
        format!("  Operating system: {}", platform.label()).dimmed()
    );

    // ---- 2. Create virtual environment --------------------------------------
    println!();
    println!("{}", "  [2/6] Virtual environment".cyan());

    if !run_command(
        runner,
        &venv_command(platform, config),
        "Creating virtual environment",
        false,
    )
    .await
    {
        println!(
            "{}",
            "  Failed to create the virtual environment. Please check your Python installation."
                .red()
        );
        return Err(SetupError::StepFailed {
            step: "Virtual environment creation".to_string(),
        });
    }

    // ---- 3. Upgrade pip (non-fatal) -----------------------------------------
    println!();
    println!("{}", "  [3/6] Package installer".cyan());

    if !run_command(
        runner,
        &pip_upgrade_command(platform, config),
        "Upgrading pip in virtual environment",
        false,
    )
    .await
    {
        println!("{}", "  Continuing with the bundled pip.".yellow());
    }

    // ---- 4. Install requirements --------------------------------------------
    println!();
    println!("{}", "  [4/6] Workshop dependencies".cyan());

    if !run_command(
        runner,
        &install_command(platform, config),
        "Installing required packages",
        false,
    )
    .await
    {
        println!(
            "{}",
            format!(
                "  Failed to install packages. Check that {} exists.",
                config.requirements_file
            )
            .red()
        );
        return Err(SetupError::StepFailed {
            step: "Package installation".to_string(),
        });
    }

    // ---- 5. Register Jupyter kernel (non-fatal) -----------------------------
    println!();
    println!("{}", "  [5/6] Jupyter kernel".cyan());

    // The display name is quoted, so this one goes through the shell.
    if !run_command(
        runner,
        &kernel_command(platform, config),
        "Installing Jupyter kernel",
        true,
    )
    .await
    {
        println!(
            "{}",
            "  You can register the kernel later from inside the environment:".yellow()
        );
        println!(
            "{}",
            format!(
                "    python -m ipykernel install --user --name={}",
                config.env_name
            )
            .yellow()
        );
    }

    // ---- 6. Done ------------------------------------------------------------
    println!();
    println!("{}", "  [6/6] Setup completed successfully!".green().bold());
    println!();
    show_next_steps(platform, config);

    Ok(())
}
