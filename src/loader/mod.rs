//! Dynamic module loading.
//!
//! A [`ModuleLoader`] takes a path to a JavaScript module file and reports
//! which members it exports. Loading is capability-checked: when no
//! runtime is available the outcome is [`LoadOutcome::Unsupported`] and no
//! load is attempted.
//!
//! - [`NodeModuleLoader`] runs the file through a Node.js runtime
//! - [`DisabledLoader`] never loads anything

pub mod disabled;
pub mod node;

pub use disabled::DisabledLoader;
pub use node::NodeModuleLoader;

use serde::Serialize;
use std::path::Path;

/// Outcome of one load attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LoadOutcome {
    /// The module loaded; its exported member names.
    Loaded { exports: Vec<String> },
    /// The module was attempted and failed.
    Failed { error: String },
    /// No load was attempted because loading is not available.
    Unsupported { reason: String },
}

/// Something that can load a module file and list its exports.
pub trait ModuleLoader {
    /// Attempt to load the module at `path`.
    ///
    /// Never panics and never returns an error: every failure is folded
    /// into the outcome so the caller can keep going.
    fn load(&self, path: &Path) -> LoadOutcome;

    /// One-line description of how modules will be loaded.
    fn describe(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_serializes_with_status_tag() {
        let json = serde_json::to_value(LoadOutcome::Loaded {
            exports: vec!["Ventriloquist".into()],
        })
        .unwrap();
        assert_eq!(json["status"], "loaded");
        assert_eq!(json["exports"][0], "Ventriloquist");

        let json = serde_json::to_value(LoadOutcome::Failed {
            error: "boom".into(),
        })
        .unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["error"], "boom");
    }
}
