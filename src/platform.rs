//! Platform Detection
//!
//! Resolve the host operating system once at startup and derive the
//! platform-specific interpreter name, path separators, and virtual
//! environment layout used by the setup steps.

/// Host platform families the setup tool distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOS,
    Linux,
    Unix, // Generic Unix
}

impl Platform {
    /// Detect the current platform.
    pub fn current() -> Self {
        #[cfg(target_os = "windows")]
        return Platform::Windows;

        #[cfg(target_os = "macos")]
        return Platform::MacOS;

        #[cfg(target_os = "linux")]
        return Platform::Linux;

        #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
        return Platform::Unix;
    }

    /// Check if this is Windows.
    pub fn is_windows(&self) -> bool {
        matches!(self, Platform::Windows)
    }

    /// Human-readable platform name for console output.
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Windows => "Windows",
            Platform::MacOS => "macOS",
            Platform::Linux => "Linux",
            Platform::Unix => "Unix",
        }
    }

    /// Get the path separator for this platform.
    pub fn path_separator(&self) -> char {
        match self {
            Platform::Windows => '\\',
            _ => '/',
        }
    }

    /// Interpreter command used to create the virtual environment.
    /// The Windows launcher installs `python`; everywhere else the
    /// unversioned name may still be Python 2, so `python3` is used.
    pub fn python_command(&self) -> &'static str {
        match self {
            Platform::Windows => "python",
            _ => "python3",
        }
    }

    /// Path of the Python interpreter inside the virtual environment.
    pub fn venv_python(&self, env_name: &str) -> String {
        match self {
            Platform::Windows => format!("{}\\Scripts\\python.exe", env_name),
            _ => format!("{}/bin/python", env_name),
        }
    }

    /// Path of the pip binary inside the virtual environment.
    pub fn venv_pip(&self, env_name: &str) -> String {
        match self {
            Platform::Windows => format!("{}\\Scripts\\pip.exe", env_name),
            _ => format!("{}/bin/pip", env_name),
        }
    }

    /// The activation command shown to the attendee after setup.
    pub fn activate_command(&self, env_name: &str) -> String {
        match self {
            Platform::Windows => format!("{}\\Scripts\\activate", env_name),
            _ => format!("source {}/bin/activate", env_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_venv_paths_use_scripts_layout() {
        let p = Platform::Windows;
        assert_eq!(p.venv_python("env"), "env\\Scripts\\python.exe");
        assert_eq!(p.venv_pip("env"), "env\\Scripts\\pip.exe");
        assert_eq!(p.activate_command("env"), "env\\Scripts\\activate");
        assert_eq!(p.path_separator(), '\\');
        assert_eq!(p.python_command(), "python");
    }

    #[test]
    fn test_unix_venv_paths_use_bin_layout() {
        for p in [Platform::MacOS, Platform::Linux, Platform::Unix] {
            assert_eq!(p.venv_python("env"), "env/bin/python");
            assert_eq!(p.venv_pip("env"), "env/bin/pip");
            assert_eq!(p.activate_command("env"), "source env/bin/activate");
            assert_eq!(p.path_separator(), '/');
            assert_eq!(p.python_command(), "python3");
        }
    }

    #[test]
    fn test_current_platform_resolves() {
        let p = Platform::current();
        assert!(!p.label().is_empty());
    }
}
