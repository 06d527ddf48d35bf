//! Output verbosity.

use crate::config::schema;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Status output plus the commands being run.
    Verbose,
    /// Step titles, spinners and status.
    #[default]
    Normal,
    /// Warnings and errors only.
    Quiet,
}

impl From<schema::OutputMode> for OutputMode {
    fn from(config_mode: schema::OutputMode) -> Self {
        match config_mode {
            schema::OutputMode::Verbose => Self::Verbose,
            schema::OutputMode::Normal => Self::Normal,
            schema::OutputMode::Quiet => Self::Quiet,
        }
    }
}

impl OutputMode {
    /// Check if this mode shows the commands being run.
    pub fn shows_command_output(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows progress spinners.
    pub fn shows_spinners(&self) -> bool {
        !matches!(self, Self::Quiet)
    }

    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}
