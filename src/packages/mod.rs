//! Globally installed packages managed by the dependency manager.
//!
//! Presence is decided by a substring match against the manager's global
//! listing, so `vendor/name` is also "present" when the listing contains
//! `vendor/name-extra`.

use std::fmt;
use std::path::PathBuf;

use crate::config::DependencyManagerConfig;
use crate::error::{InstallerError, Result};
use crate::shell::{CommandOptions, CommandRunner};

/// An opaque package identifier such as `tightenco/takeout`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageId(String);

impl PackageId {
    /// Wrap a non-blank identifier.
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(InstallerError::ConfigValidationError {
                message: "package identifier must not be empty".to_string(),
            });
        }
        Ok(Self(id.trim().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this identifier occurs anywhere in `listing`.
    pub fn appears_in(&self, listing: &str) -> bool {
        listing.contains(self.as_str())
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What [`PackageEnsurer::ensure`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnsureOutcome {
    AlreadyInstalled,
    Installed,
}

/// Queries and installs global packages through the dependency manager.
pub struct PackageEnsurer<'a> {
    program: String,
    config: &'a DependencyManagerConfig,
    runner: &'a dyn CommandRunner,
}

impl<'a> PackageEnsurer<'a> {
    /// `program` is the dependency manager executable to invoke.
    pub fn new(
        program: impl Into<String>,
        config: &'a DependencyManagerConfig,
        runner: &'a dyn CommandRunner,
    ) -> Self {
        Self {
            program: program.into(),
            config,
            runner,
        }
    }

    /// The global package listing.
    ///
    /// A listing that cannot be produced (for example, nothing has been
    /// installed globally yet) counts as empty.
    pub fn global_listing(&self) -> String {
        match self
            .runner
            .run(&self.program, &self.config.list_args, &CommandOptions::captured())
        {
            Ok(result) if result.success => result.stdout,
            Ok(result) => {
                tracing::debug!(
                    "Global listing exited with {:?}, treating as empty",
                    result.exit_code
                );
                String::new()
            }
            Err(e) => {
                tracing::debug!("Global listing failed: {}, treating as empty", e);
                String::new()
            }
        }
    }

    /// Install `id` globally unless it is already listed.
    pub fn ensure(&self, id: &PackageId) -> Result<EnsureOutcome> {
        if id.appears_in(&self.global_listing()) {
            tracing::debug!("{} already installed", id);
            return Ok(EnsureOutcome::AlreadyInstalled);
        }

        let mut args = self.config.install_args.clone();
        args.push(id.as_str().to_string());
        tracing::debug!("Installing {}", id);
        self.runner
            .run_checked(&self.program, &args, &CommandOptions::captured())?;
        Ok(EnsureOutcome::Installed)
    }

    /// Absolute directory where globally installed binaries land.
    pub fn global_bin_dir(&self) -> Option<PathBuf> {
        let result = self
            .runner
            .run(
                &self.program,
                &self.config.bin_dir_args,
                &CommandOptions::captured(),
            )
            .ok()?;
        if !result.success {
            return None;
        }
        let dir = result.stdout.lines().map(str::trim).find(|l| !l.is_empty())?;
        Some(PathBuf::from(dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::MockRunner;

    const LISTING: &str = "Changed current directory to /home/u/.composer\n\
        laravel/installer  v4.2.0  Laravel application installer.\n";

    fn ensurer<'a>(
        config: &'a DependencyManagerConfig,
        runner: &'a MockRunner,
    ) -> PackageEnsurer<'a> {
        PackageEnsurer::new("composer", config, runner)
    }

    #[test]
    fn package_id_rejects_blank() {
        assert!(PackageId::new("  ").is_err());
        assert_eq!(PackageId::new(" a/b ").unwrap().as_str(), "a/b");
    }

    #[test]
    fn listed_package_is_skipped() {
        let config = DependencyManagerConfig::default();
        let runner = MockRunner::new();
        runner.respond_ok("composer global show", LISTING);

        let outcome = ensurer(&config, &runner)
            .ensure(&PackageId::new("laravel/installer").unwrap())
            .unwrap();

        assert_eq!(outcome, EnsureOutcome::AlreadyInstalled);
        assert!(!runner.was_called("composer global require"));
    }

    #[test]
    fn missing_package_is_installed_quietly() {
        let config = DependencyManagerConfig::default();
        let runner = MockRunner::new();
        runner.respond_ok("composer global show", LISTING);
        runner.respond_ok("composer global require", "");

        let outcome = ensurer(&config, &runner)
            .ensure(&PackageId::new("tightenco/takeout").unwrap())
            .unwrap();

        assert_eq!(outcome, EnsureOutcome::Installed);
        assert!(runner.was_called("composer global require --quiet tightenco/takeout"));
    }

    #[test]
    fn substring_of_listed_name_counts_as_present() {
        let config = DependencyManagerConfig::default();
        let runner = MockRunner::new();
        runner.respond_ok("composer global show", "vendor/name-extra 1.0.0\n");

        let outcome = ensurer(&config, &runner)
            .ensure(&PackageId::new("vendor/name").unwrap())
            .unwrap();

        assert_eq!(outcome, EnsureOutcome::AlreadyInstalled);
    }

    #[test]
    fn failed_listing_counts_as_empty() {
        let config = DependencyManagerConfig::default();
        let runner = MockRunner::new();
        runner.respond_fail("composer global show", 1, "no global packages");
        runner.respond_ok("composer global require", "");

        let outcome = ensurer(&config, &runner)
            .ensure(&PackageId::new("tightenco/takeout").unwrap())
            .unwrap();

        assert_eq!(outcome, EnsureOutcome::Installed);
    }

    #[test]
    fn failed_install_propagates() {
        let config = DependencyManagerConfig::default();
        let runner = MockRunner::new();
        runner.respond_ok("composer global show", "");
        runner.respond_fail("composer global require", 2, "network down");

        let err = ensurer(&config, &runner)
            .ensure(&PackageId::new("tightenco/takeout").unwrap())
            .unwrap_err();

        assert!(matches!(
            err,
            InstallerError::CommandFailed { code: Some(2), .. }
        ));
    }

    #[test]
    fn global_bin_dir_reads_first_line() {
        let config = DependencyManagerConfig::default();
        let runner = MockRunner::new();
        runner.respond_ok(
            "composer global config bin-dir",
            "/home/u/.composer/vendor/bin\n",
        );

        let dir = ensurer(&config, &runner).global_bin_dir();
        assert_eq!(dir, Some(PathBuf::from("/home/u/.composer/vendor/bin")));
    }

    #[test]
    fn global_bin_dir_none_on_failure() {
        let config = DependencyManagerConfig::default();
        let runner = MockRunner::new();
        assert_eq!(ensurer(&config, &runner).global_bin_dir(), None);
    }
}
