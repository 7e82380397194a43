//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }
}

/// Dispatches CLI commands to their implementations.
#[derive(Debug, Default)]
pub struct CommandDispatcher;

impl CommandDispatcher {
    /// Create a new dispatcher.
    pub fn new() -> Self {
        Self
    }

    /// Dispatch and execute a command.
    ///
    /// With no subcommand, runs `probe` with the top-level probe flags.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Probe(args)) => {
                let cmd = super::probe::ProbeCommand::new(args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                let cmd = super::probe::ProbeCommand::new(cli.probe.clone());
                cmd.execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn dispatches_probe_command() {
        let temp = TempDir::new().unwrap();
        let custom = temp.path().join("missing");
        let cli = Cli::parse_from([
            "extprobe",
            "probe",
            "--env-var",
            "EXTPROBE_TEST_UNSET_VARIABLE",
            "--custom-dir",
            custom.to_str().unwrap(),
        ]);
        let mut ui = MockUI::new();

        let result = CommandDispatcher::new().dispatch(&cli, &mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_warning("Custom directory does not exist"));
    }

    #[test]
    fn default_command_uses_top_level_probe_flags() {
        let temp = TempDir::new().unwrap();
        let cli = Cli::parse_from([
            "extprobe",
            "--json",
            "--no-load",
            "--env-var",
            "EXTPROBE_TEST_UNSET_VARIABLE",
            "--custom-dir",
            temp.path().to_str().unwrap(),
        ]);
        let mut ui = MockUI::new();

        let result = CommandDispatcher::new().dispatch(&cli, &mut ui).unwrap();

        assert!(result.success);
        assert_eq!(ui.documents().len(), 1);
        let json: serde_json::Value = serde_json::from_str(&ui.documents()[0]).unwrap();
        assert_eq!(json["env_var"], "EXTPROBE_TEST_UNSET_VARIABLE");
    }
}
