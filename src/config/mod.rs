//! Probe configuration.
//!
//! Resolves what a probe run looks at from three places, highest priority
//! first:
//!
//! 1. Command-line flags ([`ProbeArgs`](crate::cli::ProbeArgs))
//! 2. Environment variables
//! 3. Built-in defaults
//!
//! # Example
//!
//! ```
//! use std::ffi::OsString;
//! use std::path::PathBuf;
//! use extprobe::cli::ProbeArgs;
//! use extprobe::config::ProbeConfig;
//!
//! let env = |key: &str| match key {
//!     "N8N_CUSTOM_EXTENSIONS" => Some(OsString::from(" my-ext ")),
//!     _ => None,
//! };
//! let config = ProbeConfig::resolve_with(
//!     &ProbeArgs::default(),
//!     &env,
//!     Some(PathBuf::from("/home/me")),
//! )
//! .unwrap();
//!
//! assert_eq!(config.extensions, vec!["my-ext"]);
//! assert_eq!(config.custom_dir, PathBuf::from("/home/me/.n8n/custom"));
//! ```

mod probe;

pub use probe::{
    ProbeConfig, CUSTOM_DIR_SEGMENTS, DEFAULT_ENV_VAR, DEFAULT_MODULE, NODE_OVERRIDE_ENV,
};
