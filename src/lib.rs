//! extprobe - Diagnose custom extension directories and module loading.
//!
//! extprobe checks the layout an extension host expects under
//! `~/.n8n/custom`: for every extension named in `N8N_CUSTOM_EXTENSIONS` it
//! walks `<extension>/dist/nodes/Ventriloquist/`, reports what exists, and
//! tries to load `Ventriloquist.node.js` to list its exports.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Resolution of the environment, home directory and flags
//! - [`error`] - Error types and result aliases
//! - [`loader`] - Capability-checked module loading
//! - [`probe`] - Directory walking, reports and rendering
//! - [`shell`] - Child process execution and PATH lookup
//! - [`ui`] - Terminal, plain and mock output
//!
//! # Example
//!
//! ```
//! use extprobe::config::ProbeConfig;
//! use extprobe::loader::DisabledLoader;
//! use extprobe::probe::DirectoryProber;
//!
//! let config = ProbeConfig {
//!     env_var: "N8N_CUSTOM_EXTENSIONS".to_string(),
//!     raw_value: String::new(),
//!     extensions: vec![],
//!     custom_dir: "/nonexistent/.n8n/custom".into(),
//!     module: "Ventriloquist".to_string(),
//!     node: None,
//!     load_enabled: false,
//! };
//! let report = DirectoryProber::new(&config, &DisabledLoader).run();
//! assert!(!report.custom_dir_exists());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod probe;
pub mod shell;
pub mod ui;

pub use error::{ProbeError, Result};
