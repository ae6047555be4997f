//! Setup Configuration
//!
//! Loads the optional `workshop-setup.json` from the working directory and
//! merges it with the built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::types::{default_config, SetupConfig};

/// Config file name looked up in the working directory.
pub const CONFIG_FILENAME: &str = "workshop-setup.json";

/// Load the setup config from the working directory.
///
/// Returns `None` if the config file does not exist or cannot be parsed,
/// in which case the caller falls back to the defaults.
pub fn load_config() -> Option<SetupConfig> {
    load_config_from(Path::new(CONFIG_FILENAME))
}

/// Load the setup config from an explicit path, merging unset fields with
/// defaults.
pub fn load_config_from(path: &Path) -> Option<SetupConfig> {
    if !path.exists() {
        return None;
    }

    let contents = fs::read_to_string(path).ok()?;
    let mut config: SetupConfig = match serde_json::from_str(&contents) {
        Ok(c) => c,
        Err(e) => {
            debug!(error = %e, "ignoring unparseable config file");
            return None;
        }
    };

    // Merge defaults for fields left empty
    let defaults = default_config();

    if config.env_name.is_empty() {
        config.env_name = defaults.env_name;
    }
    if config.kernel_display_name.is_empty() {
        config.kernel_display_name = defaults.kernel_display_name;
    }
    if config.requirements_file.is_empty() {
        config.requirements_file = defaults.requirements_file;
    }
    if config.notebook_file.is_empty() {
        config.notebook_file = defaults.notebook_file;
    }

    info!(path = %path.display(), "loaded setup configuration");
    Some(config)
}

/// Resolve a path that may start with `~` to an absolute path.
///
/// If the path starts with `~`, the tilde is replaced with the user's home
/// directory. Otherwise the path is returned as-is.
pub fn resolve_path(p: &str) -> String {
    if let Some(rest) = p.strip_prefix('~') {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        let rest = rest.strip_prefix('/').unwrap_or(rest);
        home.join(rest).to_string_lossy().to_string()
    } else {
        p.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_missing_file_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config_from(&dir.path().join("workshop-setup.json")).is_none());
    }

    #[test]
    fn test_load_config_unparseable_file_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("workshop-setup.json");
        fs::write(&path, "not json").unwrap();
        assert!(load_config_from(&path).is_none());
    }

    #[test]
    fn test_load_config_merges_defaults_for_unset_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("workshop-setup.json");
        fs::write(&path, r#"{"envName": "custom_env", "requirementsFile": ""}"#).unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.env_name, "custom_env");
        assert_eq!(config.requirements_file, "requirements.txt");
        assert_eq!(config.kernel_display_name, "Data Analytics Workshop");
        assert!(config.python_command.is_none());
    }

    #[test]
    fn test_resolve_path_with_tilde() {
        let resolved = resolve_path("~/some/path");
        assert!(!resolved.starts_with('~'));
        assert!(resolved.ends_with("some/path"));
    }

    #[test]
    fn test_resolve_path_without_tilde() {
        let path = "/absolute/path/to/file";
        assert_eq!(resolve_path(path), path);
    }
}
