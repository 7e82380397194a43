//! Command-line interface for extprobe.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs, ProbeArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
