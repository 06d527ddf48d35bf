//! Everything a step needs, built once per run.

use std::path::PathBuf;

use crate::config::BootstrapConfig;
use crate::environment::OperatingSystem;
use crate::fetch::HttpFetcher;
use crate::requirements::{is_executable, ToolProbe};
use crate::shell::CommandRunner;

/// Immutable per-run context passed to every step.
pub struct RunContext<'a> {
    /// Effective configuration.
    pub config: BootstrapConfig,
    /// Host operating system, detected once.
    pub os: OperatingSystem,
    /// Executable lookup on the run's PATH.
    pub probe: ToolProbe,
    /// Runs external programs.
    pub runner: &'a dyn CommandRunner,
    /// Downloads installer payloads and checksums.
    pub fetcher: HttpFetcher,
}

impl<'a> RunContext<'a> {
    pub fn new(
        config: BootstrapConfig,
        os: OperatingSystem,
        probe: ToolProbe,
        runner: &'a dyn CommandRunner,
        fetcher: HttpFetcher,
    ) -> Self {
        Self {
            config,
            os,
            probe,
            runner,
            fetcher,
        }
    }

    /// Where the dependency manager is already installed, if anywhere.
    ///
    /// Checks PATH first, then the configured install location, which
    /// need not be on PATH.
    pub fn installed_dependency_manager(&self) -> Option<PathBuf> {
        let manager = &self.config.dependency_manager;
        if let Some(path) = self.probe.resolve(&manager.command) {
            return Some(path);
        }
        let installed = manager.install_path();
        (installed.is_file() && is_executable(&installed)).then_some(installed)
    }

    /// The dependency manager executable to invoke.
    ///
    /// Falls back to the bare command name when it is not installed yet.
    pub fn dependency_manager_program(&self) -> String {
        self.installed_dependency_manager()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| self.config.dependency_manager.command.clone())
    }
}
