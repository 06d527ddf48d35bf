//! User-facing output.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI/headless environments
//! - [`MockUI`] for tests
//!
//! The installer core only ever writes to a `UserInterface`; it never
//! reads anything back from it.
//!
//! # Example
//!
//! ```
//! use takeout_installer::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_step_title("Checking PHP");
//! ui.success("PHP 8.2.1");
//! assert!(ui.has_success("8.2.1"));
//! ```

pub mod banner;
pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use banner::{container_docs_url, follow_up_instructions, path_export_line, LOGO};
pub use mock::{MockSpinner, MockUI};
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use spinner::ProgressSpinner;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, InstallerTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message on the error stream.
    fn error(&mut self, msg: &str);

    /// Show a step title with an underline.
    fn show_step_title(&mut self, title: &str);

    /// Show the closing banner.
    fn show_banner(&mut self, banner: &str);

    /// Start a spinner for an operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Mark the operation as successful.
    fn finish_success(&mut self, msg: &str);

    /// Mark the operation as failed.
    fn finish_error(&mut self, msg: &str);

    /// Mark as skipped.
    fn finish_skipped(&mut self, msg: &str);
}

/// Create the UI for the current terminal.
///
/// A TTY gets [`TerminalUI`]; CI and piped output get [`NonInteractiveUI`].
pub fn create_ui(mode: OutputMode, colors: bool) -> Box<dyn UserInterface> {
    if console::Term::stdout().is_term() && !crate::shell::is_ci() {
        Box::new(TerminalUI::new(mode, colors))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
