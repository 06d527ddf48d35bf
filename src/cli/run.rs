//! The default command: load config, then bootstrap.

use crate::config::{load_config, validate, BootstrapConfig, ConfigSource};
use crate::environment::detect_os;
use crate::error::{Result, EXIT_SUCCESS};
use crate::fetch::HttpFetcher;
use crate::requirements::ToolProbe;
use crate::runner::{run_bootstrap, RunContext};
use crate::shell::{CommandRunner, SystemRunner};
use crate::ui::{create_ui, should_use_colors, OutputMode, UserInterface};

use super::Cli;

/// Output mode from flags, falling back to the config file's setting.
pub fn resolve_output_mode(cli: &Cli, config: Option<&BootstrapConfig>) -> OutputMode {
    if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        config
            .map(|c| OutputMode::from(c.settings.default_output))
            .unwrap_or_default()
    }
}

/// Load and validate the effective configuration.
pub fn load_effective_config(cli: &Cli) -> Result<(BootstrapConfig, ConfigSource)> {
    let (config, source) = load_config(cli.config.as_deref())?;
    validate(&config)?;
    match &source {
        ConfigSource::File(path) => tracing::debug!("Using config {}", path.display()),
        ConfigSource::Defaults => tracing::debug!("Using built-in defaults"),
    }
    Ok((config, source))
}

/// Run the installer and return the process exit code.
pub fn run(cli: &Cli) -> u8 {
    let colors = !cli.no_color && should_use_colors();

    let config = match load_effective_config(cli) {
        Ok((config, _)) => config,
        Err(e) => {
            let mut ui = create_ui(resolve_output_mode(cli, None), colors);
            ui.error(&e.to_string());
            return e.exit_code();
        }
    };

    let mut ui = create_ui(resolve_output_mode(cli, Some(&config)), colors);
    let runner = SystemRunner;

    match install(config, &runner, ui.as_mut()) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            ui.error(&e.to_string());
            e.exit_code()
        }
    }
}

/// Build the run context against the real host and bootstrap it.
pub fn install(
    config: BootstrapConfig,
    runner: &dyn CommandRunner,
    ui: &mut dyn UserInterface,
) -> Result<()> {
    let os = detect_os(runner);
    tracing::debug!("Detected OS: {}", os);

    let ctx = RunContext::new(config, os, ToolProbe::from_env(), runner, HttpFetcher::new()?);
    let report = run_bootstrap(&ctx, ui)?;
    ui.success(&report.summary());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{OutputMode as ConfigOutputMode, Settings};
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["takeout-installer"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn flags_override_config_output() {
        let config = BootstrapConfig {
            settings: Settings {
                default_output: ConfigOutputMode::Verbose,
            },
            ..Default::default()
        };
        assert_eq!(
            resolve_output_mode(&cli(&["--quiet"]), Some(&config)),
            OutputMode::Quiet
        );
        assert_eq!(
            resolve_output_mode(&cli(&[]), Some(&config)),
            OutputMode::Verbose
        );
        assert_eq!(resolve_output_mode(&cli(&[]), None), OutputMode::Normal);
    }
}
