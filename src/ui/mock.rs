//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use takeout_installer::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Starting setup");
//! ui.success("Done!");
//!
//! assert!(ui.messages().contains(&"Starting setup".to_string()));
//! assert!(ui.successes().contains(&"Done!".to_string()));
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use super::{OutputMode, SpinnerHandle, UserInterface};

/// How a spinner started through [`MockUI`] ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpinnerEnd {
    Success(String),
    Error(String),
    Skipped(String),
}

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    step_titles: Vec<String>,
    banners: Vec<String>,
    spinners: Vec<String>,
    spinner_ends: Rc<RefCell<Vec<SpinnerEnd>>>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all step titles, in order.
    pub fn step_titles(&self) -> &[String] {
        &self.step_titles
    }

    /// Get all banners shown.
    pub fn banners(&self) -> &[String] {
        &self.banners
    }

    /// Get all spinner messages that were started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Get how each spinner finished, in order.
    pub fn spinner_ends(&self) -> Vec<SpinnerEnd> {
        self.spinner_ends.borrow().clone()
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check if any spinner was finished as skipped with `msg`.
    pub fn has_skipped(&self, msg: &str) -> bool {
        self.spinner_ends
            .borrow()
            .iter()
            .any(|end| matches!(end, SpinnerEnd::Skipped(m) if m.contains(msg)))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_step_title(&mut self, title: &str) {
        self.step_titles.push(title.to_string());
    }

    fn show_banner(&mut self, banner: &str) {
        self.banners.push(banner.to_string());
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner {
            ends: Rc::clone(&self.spinner_ends),
        })
    }
}

/// Spinner returned by [`MockUI`]; records how it finished.
pub struct MockSpinner {
    ends: Rc<RefCell<Vec<SpinnerEnd>>>,
}

impl SpinnerHandle for MockSpinner {
    fn finish_success(&mut self, msg: &str) {
        self.ends
            .borrow_mut()
            .push(SpinnerEnd::Success(msg.to_string()));
    }

    fn finish_error(&mut self, msg: &str) {
        self.ends.borrow_mut().push(SpinnerEnd::Error(msg.to_string()));
    }

    fn finish_skipped(&mut self, msg: &str) {
        self.ends
            .borrow_mut()
            .push(SpinnerEnd::Skipped(msg.to_string()));
    }
}
