//! User interface abstraction.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for styled terminal output
//! - [`NonInteractiveUI`] for pipes, CI logs and redirected output
//! - [`MockUI`] for capturing output in tests
//!
//! # Example
//!
//! ```
//! use extprobe::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_header("my-extension");
//! ui.success("exists");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, ProbeTheme};

/// Trait for user interface interactions.
///
/// Probe observations are written through this trait so that the same
/// rendering code drives the terminal, plain output and tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a plain observation.
    fn message(&mut self, msg: &str);

    /// Display a positive observation (path exists, module loaded).
    fn success(&mut self, msg: &str);

    /// Display a negative but non-fatal observation.
    fn warning(&mut self, msg: &str);

    /// Display a fatal error. Always written to stderr.
    fn error(&mut self, msg: &str);

    /// Write a machine-readable document (such as JSON) to stdout.
    ///
    /// Unlike observations, documents are never filtered by the output mode.
    fn document(&mut self, text: &str);

    /// Show a section header.
    fn show_header(&mut self, title: &str);

    /// Check if running attached to a terminal.
    fn is_interactive(&self) -> bool;
}
