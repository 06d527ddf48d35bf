//! Configuration validation rules.
//!
//! - The minimum runtime version must parse as a dotted number
//! - Download URLs must be http(s)
//! - The hash algorithm and commands must not be blank
//! - Package ids must be non-empty and contain no whitespace
//! - The install directory must be absolute

use crate::config::schema::BootstrapConfig;
use crate::error::{InstallerError, Result};
use crate::requirements::Version;

/// Validation error with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field
    pub field: String,
    /// Human-readable error message
    pub message: String,
}

/// Validate a configuration and return all errors.
///
/// Collects every problem rather than stopping at the first one.
pub fn validate_config(config: &BootstrapConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let runtime = &config.runtime;
    require_non_blank(&mut errors, "runtime.command", &runtime.command);
    if let Err(message) = runtime.minimum_version.parse::<Version>() {
        errors.push(ValidationError {
            field: "runtime.minimum_version".to_string(),
            message,
        });
    }

    let manager = &config.dependency_manager;
    require_non_blank(&mut errors, "dependency_manager.command", &manager.command);
    require_non_blank(&mut errors, "dependency_manager.artifact", &manager.artifact);
    require_non_blank(
        &mut errors,
        "dependency_manager.hash_algorithm",
        &manager.hash_algorithm,
    );
    require_http_url(
        &mut errors,
        "dependency_manager.installer_url",
        &manager.installer_url,
    );
    require_http_url(
        &mut errors,
        "dependency_manager.checksum_url",
        &manager.checksum_url,
    );
    if !manager.install_dir.is_absolute() {
        errors.push(ValidationError {
            field: "dependency_manager.install_dir".to_string(),
            message: format!(
                "'{}' must be an absolute path",
                manager.install_dir.display()
            ),
        });
    }

    for (index, package) in config.packages.iter().enumerate() {
        if package.is_empty() || package.chars().any(char::is_whitespace) {
            errors.push(ValidationError {
                field: format!("packages[{}]", index),
                message: format!("'{}' is not a valid package id", package),
            });
        }
    }

    errors
}

/// Validate a configuration, failing with every problem in one message.
pub fn validate(config: &BootstrapConfig) -> Result<()> {
    let errors = validate_config(config);
    if errors.is_empty() {
        return Ok(());
    }

    let message = errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ");
    Err(InstallerError::ConfigValidationError { message })
}

fn require_non_blank(errors: &mut Vec<ValidationError>, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(ValidationError {
            field: field.to_string(),
            message: "must not be empty".to_string(),
        });
    }
}

fn require_http_url(errors: &mut Vec<ValidationError>, field: &str, value: &str) {
    if !(value.starts_with("https://") || value.starts_with("http://")) {
        errors.push(ValidationError {
            field: field.to_string(),
            message: format!("'{}' is not an http(s) URL", value),
        });
    }
}
