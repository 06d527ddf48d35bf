//! Configuration file discovery and loading.
//!
//! Resolution order, first match wins:
//! 1. An explicit path (`--config` or `TAKEOUT_INSTALLER_CONFIG`)
//! 2. The user config at `~/.takeout-installer/config.yml`
//! 3. Built-in defaults

use crate::config::schema::BootstrapConfig;
use crate::error::{InstallerError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory under the home directory holding the user config.
pub const CONFIG_DIR: &str = ".takeout-installer";

/// File name of the user config.
pub const CONFIG_FILE: &str = "config.yml";

/// Where the effective configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Loaded from a file.
    File(PathBuf),
    /// No file; built-in defaults.
    Defaults,
}

/// Path of the user config, whether or not it exists.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load a single config file and parse it into [`BootstrapConfig`].
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<BootstrapConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            InstallerError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            InstallerError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into [`BootstrapConfig`].
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<BootstrapConfig> {
    if content.trim().is_empty() {
        return Ok(BootstrapConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| InstallerError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config with optional path override.
///
/// An explicit path must exist. Without one, the user config is used when
/// present, otherwise the defaults.
pub fn load_config(config_override: Option<&Path>) -> Result<(BootstrapConfig, ConfigSource)> {
    load_config_from(config_override, user_config_path().as_deref())
}

/// [`load_config`] with the user config location supplied by the caller.
pub fn load_config_from(
    config_override: Option<&Path>,
    user_config: Option<&Path>,
) -> Result<(BootstrapConfig, ConfigSource)> {
    if let Some(path) = config_override {
        let config = load_config_file(path)?;
        tracing::debug!("Loaded config from {}", path.display());
        return Ok((config, ConfigSource::File(path.to_path_buf())));
    }

    if let Some(path) = user_config.filter(|p| p.exists()) {
        let config = load_config_file(path)?;
        tracing::debug!("Loaded user config from {}", path.display());
        return Ok((config, ConfigSource::File(path.to_path_buf())));
    }

    tracing::debug!("No config file found, using defaults");
    Ok((BootstrapConfig::default(), ConfigSource::Defaults))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn explicit_missing_path_is_not_found() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.yml");

        let err = load_config_from(Some(&missing), None).unwrap_err();
        assert!(matches!(err, InstallerError::ConfigNotFound { .. }));
    }

    #[test]
    fn explicit_path_is_loaded() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        fs::write(&path, "packages: [vendor/tool]\n").unwrap();

        let (config, source) = load_config_from(Some(&path), None).unwrap();
        assert_eq!(config.packages, vec!["vendor/tool".to_string()]);
        assert_eq!(source, ConfigSource::File(path));
    }

    #[test]
    fn explicit_path_wins_over_user_config() {
        let temp = TempDir::new().unwrap();
        let explicit = temp.path().join("explicit.yml");
        let user = temp.path().join("user.yml");
        fs::write(&explicit, "packages: [from/explicit]\n").unwrap();
        fs::write(&user, "packages: [from/user]\n").unwrap();

        let (config, _) = load_config_from(Some(&explicit), Some(&user)).unwrap();
        assert_eq!(config.packages, vec!["from/explicit".to_string()]);
    }

    #[test]
    fn user_config_used_when_present() {
        let temp = TempDir::new().unwrap();
        let user = temp.path().join("user.yml");
        fs::write(&user, "runtime:\n  minimum_version: \"8.2\"\n").unwrap();

        let (config, source) = load_config_from(None, Some(&user)).unwrap();
        assert_eq!(config.runtime.minimum_version, "8.2");
        assert_eq!(source, ConfigSource::File(user));
    }

    #[test]
    fn defaults_when_nothing_exists() {
        let temp = TempDir::new().unwrap();
        let user = temp.path().join("absent.yml");

        let (config, source) = load_config_from(None, Some(&user)).unwrap();
        assert_eq!(source, ConfigSource::Defaults);
        assert_eq!(config.dependency_manager.command, "composer");
    }

    #[test]
    fn invalid_yaml_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        fs::write(&path, "packages: [unclosed\n").unwrap();

        let err = load_config_file(&path).unwrap_err();
        match err {
            InstallerError::ConfigParseError { path: p, .. } => assert_eq!(p, path),
            other => panic!("Expected ConfigParseError, got {other:?}"),
        }
    }

    #[test]
    fn empty_file_yields_defaults() {
        let config = parse_config("   \n", Path::new("config.yml")).unwrap();
        assert_eq!(config.packages.len(), 2);
    }

    #[test]
    fn user_config_path_ends_with_file_name() {
        if let Some(path) = user_config_path() {
            assert!(path.ends_with(Path::new(CONFIG_DIR).join(CONFIG_FILE)));
        }
    }
}
