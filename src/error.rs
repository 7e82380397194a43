//! Error types for extprobe operations.
//!
//! This module defines [`ProbeError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Missing directories are observations, not errors; they never reach this type
//! - Module load failures are converted into a reported outcome by the prober
//! - Only conditions that stop the whole run (no home directory, bad CLI
//!   input) propagate out of a command

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for extprobe operations.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The current user's home directory could not be determined.
    #[error("Could not determine the home directory")]
    HomeDirUnavailable,

    /// No JavaScript runtime is available to load modules with.
    #[error("Module loading unsupported: {reason}")]
    RuntimeNotFound { reason: String },

    /// The runtime loaded the file but the module threw or failed to resolve.
    #[error("Failed to load {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// The runtime replied with something that is not a loader reply.
    #[error("Malformed loader reply: {message}")]
    MalformedReply { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for extprobe operations.
pub type Result<T> = std::result::Result<T, ProbeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_dir_unavailable_displays_message() {
        let err = ProbeError::HomeDirUnavailable;
        assert!(err.to_string().contains("home directory"));
    }

    #[test]
    fn runtime_not_found_displays_reason() {
        let err = ProbeError::RuntimeNotFound {
            reason: "node not found on PATH".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("unsupported"));
        assert!(msg.contains("node not found on PATH"));
    }

    #[test]
    fn load_failed_displays_path_and_message() {
        let err = ProbeError::LoadFailed {
            path: PathBuf::from("/x/Ventriloquist.node.js"),
            message: "SyntaxError: Unexpected token".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/x/Ventriloquist.node.js"));
        assert!(msg.contains("SyntaxError"));
    }

    #[test]
    fn malformed_reply_displays_message() {
        let err = ProbeError::MalformedReply {
            message: "empty output".into(),
        };
        assert!(err.to_string().contains("empty output"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: ProbeError = io_err.into();
        assert!(matches!(err, ProbeError::Io(_)));
    }

    #[test]
    fn json_error_converts_from_serde() {
        let json_err = serde_json::from_str::<Vec<String>>("not json").unwrap_err();
        let err: ProbeError = json_err.into();
        assert!(matches!(err, ProbeError::Json(_)));
    }
}
