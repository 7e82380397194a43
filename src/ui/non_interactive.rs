//! Plain-text UI for pipes, CI logs and redirected output.

use super::{OutputMode, UserInterface};

/// UI implementation used when stdout is not a terminal.
///
/// Lines carry the same icons as the terminal UI but no styling, so the
/// output stays readable when captured to a file.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_messages() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_messages() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        println!("⚠ {}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn document(&mut self, text: &str) {
        println!("{}", text);
    }

    fn show_header(&mut self, title: &str) {
        println!("\n{}", title);
    }

    fn is_interactive(&self) -> bool {
        false
    }
}
