//! Library integration tests.

use std::path::Path;

use takeout_installer::config::{parse_config, validate, BootstrapConfig};
use takeout_installer::environment::OperatingSystem;
use takeout_installer::error::{EXIT_FAILURE, EXIT_INTEGRITY};
use takeout_installer::requirements::{extract_version, is_acceptable, Version};
use takeout_installer::InstallerError;

fn v(s: &str) -> Version {
    s.parse().unwrap()
}

#[test]
fn error_types_are_public() {
    let err = InstallerError::VersionTooLow {
        tool: "PHP".into(),
        required: "7.0.0".into(),
        found: "5.6.40".into(),
    };
    assert!(err.to_string().contains("7.0.0"));
    assert!(err.to_string().contains("5.6.40"));
    assert_eq!(err.exit_code(), EXIT_FAILURE);
}

#[test]
fn integrity_errors_have_their_own_exit_code() {
    let err = InstallerError::IntegrityMismatch {
        url: "https://getcomposer.org/installer".into(),
        expected: "aa".into(),
        actual: "bb".into(),
    };
    assert_eq!(err.exit_code(), EXIT_INTEGRITY);
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> takeout_installer::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn version_comparison_is_numeric() {
    assert!(is_acceptable(&v("7.0.0"), &v("7.0.0")));
    assert!(!is_acceptable(&v("6.9.9"), &v("7.0.0")));
    assert!(is_acceptable(&v("7.10.0"), &v("7.9.0")));
}

#[test]
fn version_is_taken_from_noisy_output() {
    let found = extract_version("PHP 8.3.4 (cli) (built: Mar 16 2024 00:00:00) (NTS)").unwrap();
    assert_eq!(found, v("8.3.4"));
}

#[test]
fn kernel_names_map_to_os() {
    assert_eq!(OperatingSystem::from_kernel_name("Linux"), OperatingSystem::Linux);
    assert_eq!(OperatingSystem::from_kernel_name("Darwin"), OperatingSystem::MacOs);
    assert_eq!(
        OperatingSystem::from_kernel_name("SomethingElse"),
        OperatingSystem::Unknown("SomethingElse".to_string())
    );
}

#[test]
fn partial_config_keeps_other_defaults() {
    let config = parse_config(
        "runtime:\n  minimum_version: 8.1.0\npackages: [laravel/installer]\n",
        Path::new("config.yml"),
    )
    .unwrap();
    validate(&config).unwrap();

    let defaults = BootstrapConfig::default();
    assert_eq!(config.runtime.minimum_version, "8.1.0");
    assert_eq!(config.runtime.command, defaults.runtime.command);
    assert_eq!(config.packages, vec!["laravel/installer".to_string()]);
    assert_eq!(
        config.dependency_manager.installer_url,
        defaults.dependency_manager.installer_url
    );
}
