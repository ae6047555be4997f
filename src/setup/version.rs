//! Python Version Gate
//!
//! Probe the host Python interpreter and enforce the minimum supported
//! version before any setup command runs.

use std::fmt;

use anyhow::{anyhow, Result};
use regex::Regex;

use crate::types::CommandRunner;

/// Oldest Python the workshop packages support.
pub const MIN_PYTHON: PythonVersion = PythonVersion { major: 3, minor: 8 };

/// A `major.minor` interpreter version. Ordering is derived in field
/// order, so comparisons are lexicographic on (major, minor).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct PythonVersion {
    pub major: u32,
    pub minor: u32,
}

impl fmt::Display for PythonVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Parse `Python X.Y[.Z]` out of interpreter output.
pub fn parse_python_version(output: &str) -> Option<PythonVersion> {
    let re = Regex::new(r"Python\s+(\d+)\.(\d+)").ok()?;
    let caps = re.captures(output)?;
    let major = caps[1].parse().ok()?;
    let minor = caps[2].parse().ok()?;
    Some(PythonVersion { major, minor })
}

/// Run `{python} --version` and parse the reported version.
///
/// Interpreters before 3.4 printed the version banner to stderr, so both
/// streams are checked.
pub async fn probe_python_version(
    runner: &dyn CommandRunner,
    python_cmd: &str,
) -> Result<PythonVersion> {
    let result = runner
        .exec(&format!("{} --version", python_cmd), false)
        .await?;

    if !result.success() {
        return Err(anyhow!(
            "`{} --version` exited with code {}: {}",
            python_cmd,
            result.exit_code,
            result.stderr.trim()
        ));
    }

    parse_python_version(&result.stdout)
        .or_else(|| parse_python_version(&result.stderr))
        .ok_or_else(|| {
            anyhow!(
                "could not parse a Python version out of `{}`",
                result.stdout.trim()
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_version() {
        assert_eq!(
            parse_python_version("Python 3.11.4"),
            Some(PythonVersion {
                major: 3,
                minor: 11
            })
        );
    }

    #[test]
    fn test_parse_version_without_micro() {
        assert_eq!(
            parse_python_version("Python 3.8"),
            Some(PythonVersion { major: 3, minor: 8 })
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_python_version("zsh: command not found"), None);
        assert_eq!(parse_python_version(""), None);
    }

    #[test]
    fn test_minimum_version_ordering() {
        assert!(PythonVersion { major: 3, minor: 7 } < MIN_PYTHON);
        assert!(PythonVersion { major: 2, minor: 7 } < MIN_PYTHON);
        assert!(PythonVersion { major: 3, minor: 8 } >= MIN_PYTHON);
        assert!(
            PythonVersion {
                major: 3,
                minor: 12
            } >= MIN_PYTHON
        );
        assert!(PythonVersion { major: 4, minor: 0 } >= MIN_PYTHON);
    }

    #[test]
    fn test_version_display() {
        assert_eq!(
            PythonVersion {
                major: 3,
                minor: 10
            }
            .to_string(),
            "3.10"
        );
    }
}
