//! Visual theme and styling.

use console::Style;

/// Styles used when rendering probe output on a terminal.
#[derive(Debug, Clone)]
pub struct ProbeTheme {
    /// Style for present paths and successful loads (green).
    pub success: Style,
    /// Style for missing paths and load failures (orange).
    pub warning: Style,
    /// Style for fatal errors (red bold).
    pub error: Style,
    /// Style for highlighted text (bold).
    pub highlight: Style,
    /// Style for headers (magenta bold).
    pub header: Style,
}

impl Default for ProbeTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl ProbeTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            highlight: Style::new().bold(),
            header: Style::new().bold().magenta(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
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

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!(
            "{} {}",
            self.header.apply_to("▸"),
            self.highlight.apply_to(title)
        )
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let theme = ProbeTheme::plain();
        let msg = theme.format_success("exists");
        assert_eq!(msg, "✓ exists");
    }

    #[test]
    fn theme_formats_warning() {
        let theme = ProbeTheme::plain();
        let msg = theme.format_warning("missing");
        assert_eq!(msg, "⚠ missing");
    }

    #[test]
    fn theme_formats_error() {
        let theme = ProbeTheme::plain();
        let msg = theme.format_error("Failed");
        assert_eq!(msg, "✗ Failed");
    }

    #[test]
    fn theme_formats_header() {
        let theme = ProbeTheme::plain();
        let msg = theme.format_header("my-extension");
        assert!(msg.contains("my-extension"));
        assert!(msg.contains("▸"));
    }

    #[test]
    fn default_impl_matches_new() {
        let default = ProbeTheme::default();
        let new = ProbeTheme::new();
        assert_eq!(default.format_success("test"), new.format_success("test"));
    }
}
