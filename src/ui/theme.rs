//! Visual theme and styling.

use console::{measure_text_width, Style};

/// Colors used by the installer's terminal output.
#[derive(Debug, Clone)]
pub struct InstallerTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for step titles (yellow bold).
    pub step_title: Style,
    /// Style for the banner logo (magenta bold).
    pub header: Style,
    /// indicatif template for a running spinner.
    pub spinner_template: &'static str,
}

impl Default for InstallerTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl InstallerTheme {
    /// Create the colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            step_title: Style::new().yellow().bold(),
            header: Style::new().bold().magenta(),
            spinner_template: "{spinner:.magenta} {msg}",
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            step_title: Style::new(),
            header: Style::new(),
            spinner_template: "{spinner} {msg}",
        }
    }

    /// Pick the colored or plain theme.
    pub fn for_colors(colors: bool) -> Self {
        if colors {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a skipped message (icon + text in dim).
    pub fn format_skipped(&self, msg: &str) -> String {
        format!("{}", self.dim.apply_to(format!("○ {}", msg)))
    }

    /// Format a step title with an underline of the same width.
    pub fn format_step_title(&self, title: &str) -> String {
        let underline = "-".repeat(measure_text_width(title));
        format!(
            "{}\n{}",
            self.step_title.apply_to(title),
            self.step_title.apply_to(underline)
        )
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_status_icons() {
        let theme = InstallerTheme::plain();
        assert_eq!(theme.format_success("Complete"), "✓ Complete");
        assert_eq!(theme.format_warning("Caution"), "⚠ Caution");
        assert_eq!(theme.format_error("Failed"), "✗ Failed");
        assert_eq!(theme.format_skipped("Skipped"), "○ Skipped");
    }

    #[test]
    fn step_title_is_underlined_to_width() {
        let theme = InstallerTheme::plain();
        assert_eq!(
            theme.format_step_title("Installing Composer"),
            "Installing Composer\n-------------------"
        );
    }

    #[test]
    fn for_colors_false_is_plain() {
        let theme = InstallerTheme::for_colors(false);
        assert_eq!(theme.format_success("ok"), "✓ ok");
        assert_eq!(theme.spinner_template, "{spinner} {msg}");
    }

    #[test]
    fn colored_spinner_is_magenta() {
        assert!(InstallerTheme::for_colors(true)
            .spinner_template
            .contains(":.magenta"));
    }
}
