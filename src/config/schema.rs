//! Configuration schema definitions.
//!
//! Every field has a default, so an empty file (or no file at all) yields
//! the stock PHP + Composer + Takeout setup.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for `config.yml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Global settings
    pub settings: Settings,

    /// Base language runtime that must already be installed
    pub runtime: RuntimeConfig,

    /// Dependency manager installed from a verified payload
    pub dependency_manager: DependencyManagerConfig,

    /// Packages ensured globally through the dependency manager
    pub packages: Vec<String>,

    /// Documentation links for the container runtime
    pub containers: ContainerDocs,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            settings: Settings::default(),
            runtime: RuntimeConfig::default(),
            dependency_manager: DependencyManagerConfig::default(),
            packages: strings(&["tightenco/takeout", "laravel/installer"]),
            containers: ContainerDocs::default(),
        }
    }
}

/// Global settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Output mode used when no `--verbose`/`--quiet` flag is given
    pub default_output: OutputMode,
}

/// Output mode options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Verbose,
    #[default]
    Normal,
    Quiet,
}

/// Base runtime requirement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Display name
    pub name: String,

    /// Executable to look for on PATH
    pub command: String,

    /// Arguments that make the runtime print its version
    pub version_args: Vec<String>,

    /// Lowest acceptable version (dotted numeric)
    pub minimum_version: String,

    /// Shown when the runtime is missing
    pub install_hint: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            name: "PHP".to_string(),
            command: "php".to_string(),
            version_args: vec!["--version".to_string()],
            minimum_version: "7.0.0".to_string(),
            install_hint: "Install PHP 7.0 or newer (https://www.php.net/manual/en/install.php) \
                           and run this installer again."
                .to_string(),
        }
    }
}

/// Dependency manager bootstrap and package commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DependencyManagerConfig {
    /// Display name
    pub name: String,

    /// Executable name once installed
    pub command: String,

    /// URL of the installer payload
    pub installer_url: String,

    /// URL of the payload's published checksum
    pub checksum_url: String,

    /// Hash algorithm the checksum was produced with
    pub hash_algorithm: String,

    /// Extra arguments passed when running the payload through the runtime
    pub installer_args: Vec<String>,

    /// File the payload leaves in its working directory
    pub artifact: String,

    /// Directory the artifact is installed into
    pub install_dir: PathBuf,

    /// Arguments listing globally installed packages
    pub list_args: Vec<String>,

    /// Arguments installing a package globally (package id is appended)
    pub install_args: Vec<String>,

    /// Arguments printing the global binary directory
    pub bin_dir_args: Vec<String>,
}

impl Default for DependencyManagerConfig {
    fn default() -> Self {
        Self {
            name: "Composer".to_string(),
            command: "composer".to_string(),
            installer_url: "https://getcomposer.org/installer".to_string(),
            checksum_url: "https://composer.github.io/installer.sig".to_string(),
            hash_algorithm: "sha384".to_string(),
            installer_args: vec!["--quiet".to_string()],
            artifact: "composer.phar".to_string(),
            install_dir: PathBuf::from("/usr/local/bin"),
            list_args: strings(&["global", "show"]),
            install_args: strings(&["global", "require", "--quiet"]),
            bin_dir_args: strings(&["global", "config", "bin-dir", "--absolute", "--quiet"]),
        }
    }
}

impl DependencyManagerConfig {
    /// Full path the installed executable ends up at.
    pub fn install_path(&self) -> PathBuf {
        self.install_dir.join(&self.command)
    }
}

/// Container runtime documentation links, one per OS family.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerDocs {
    /// Display name
    pub name: String,

    /// Linux install guide
    pub linux: String,

    /// macOS install guide
    pub macos: String,

    /// Anything else
    pub other: String,
}

impl Default for ContainerDocs {
    fn default() -> Self {
        Self {
            name: "Docker".to_string(),
            linux: "https://docs.docker.com/engine/install/".to_string(),
            macos: "https://docs.docker.com/docker-for-mac/install/".to_string(),
            other: "https://docs.docker.com/get-docker/".to_string(),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
