//! Child process execution and executable lookup.

pub mod command;
pub mod path;

pub use command::{execute_program, CommandOptions, CommandResult};
pub use path::{executable_name, is_executable, parse_system_path, resolve_tool_path};
