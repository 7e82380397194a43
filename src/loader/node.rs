//! Module loading through a Node.js runtime.
//!
//! The target file is `require`d by a short bootstrap script run with
//! `node -e`. The bootstrap writes a single marker-prefixed JSON reply line
//! to stdout, either `{"exports": [...]}` or `{"error": "..."}`, so that
//! anything the module itself prints while loading is ignored.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{ProbeError, Result};
use crate::shell::{execute_program, parse_system_path, resolve_tool_path, CommandOptions};

use super::{LoadOutcome, ModuleLoader};

/// Environment variable carrying the absolute target path to the bootstrap.
const TARGET_ENV: &str = "EXTPROBE_TARGET";

/// Prefix of the reply line written by the bootstrap.
const REPLY_MARKER: &str = "__EXTPROBE_REPLY__";

const BOOTSTRAP: &str = r#"
const fs = require('fs');
const path = require('path');
const reply = (value, code) => {
  fs.writeSync(1, '\n__EXTPROBE_REPLY__' + JSON.stringify(value) + '\n');
  process.exit(code);
};
let loaded;
try {
  loaded = require(path.resolve(process.env.EXTPROBE_TARGET));
} catch (err) {
  reply({ error: String(err) }, 1);
}
reply({ exports: Object.keys(Object(loaded)) }, 0);
"#;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NodeReply {
    Exports { exports: Vec<String> },
    Error { error: String },
}

/// Loads modules by running them through Node.js.
///
/// The runtime is located once, when the loader is created. If none is
/// found every load reports [`LoadOutcome::Unsupported`].
#[derive(Debug, Clone)]
pub struct NodeModuleLoader {
    runtime: std::result::Result<PathBuf, String>,
}

impl NodeModuleLoader {
    /// Locate a runtime: `explicit` if given, otherwise `node` on PATH.
    pub fn detect(explicit: Option<PathBuf>) -> Self {
        Self::detect_in(explicit, &parse_system_path())
    }

    /// Locate a runtime, searching the given PATH entries.
    pub fn detect_in(explicit: Option<PathBuf>, path_entries: &[PathBuf]) -> Self {
        let runtime = match explicit {
            Some(path) if path.is_file() => Ok(path),
            Some(path) => Err(format!("Node.js runtime not found at {}", path.display())),
            None => resolve_tool_path("node", path_entries)
                .ok_or_else(|| "no Node.js runtime found on PATH".to_string()),
        };

        match &runtime {
            Ok(path) => tracing::debug!("Using Node.js runtime at {}", path.display()),
            Err(reason) => tracing::debug!("Module loading unavailable: {}", reason),
        }

        Self { runtime }
    }

    /// Use a specific runtime without checking it.
    pub fn with_runtime(path: PathBuf) -> Self {
        Self { runtime: Ok(path) }
    }

    /// The runtime that will be used, if one was found.
    pub fn runtime(&self) -> Option<&Path> {
        self.runtime.as_ref().ok().map(PathBuf::as_path)
    }

    fn try_load(&self, path: &Path) -> Result<Vec<String>> {
        let runtime = self
            .runtime
            .as_ref()
            .map_err(|reason| ProbeError::RuntimeNotFound {
                reason: reason.clone(),
            })?;

        let target = std::path::absolute(path)?;
        let mut env = HashMap::new();
        env.insert(
            TARGET_ENV.to_string(),
            target.to_string_lossy().into_owned(),
        );
        let options = CommandOptions { env };

        let result = execute_program(runtime, ["-e", BOOTSTRAP], &options)?;
        tracing::debug!(
            "Runtime exited with {:?} after {:?}",
            result.exit_code,
            result.duration
        );

        match parse_reply(&result.stdout) {
            Some(Ok(NodeReply::Exports { exports })) => Ok(exports),
            Some(Ok(NodeReply::Error { error })) => Err(ProbeError::LoadFailed {
                path: target,
                message: error,
            }),
            Some(Err(e)) => Err(ProbeError::MalformedReply {
                message: e.to_string(),
            }),
            None if !result.success => {
                let stderr = result.stderr.trim();
                let message = if stderr.is_empty() {
                    format!("runtime exited with code {:?}", result.exit_code)
                } else {
                    stderr.to_string()
                };
                Err(ProbeError::LoadFailed {
                    path: target,
                    message,
                })
            }
            None => Err(ProbeError::MalformedReply {
                message: "runtime produced no reply".to_string(),
            }),
        }
    }
}

impl ModuleLoader for NodeModuleLoader {
    fn load(&self, path: &Path) -> LoadOutcome {
        match self.try_load(path) {
            Ok(exports) => LoadOutcome::Loaded { exports },
            Err(ProbeError::RuntimeNotFound { reason }) => LoadOutcome::Unsupported { reason },
            Err(ProbeError::LoadFailed { message, .. }) => LoadOutcome::Failed { error: message },
            Err(e) => LoadOutcome::Failed {
                error: e.to_string(),
            },
        }
    }

    fn describe(&self) -> String {
        match &self.runtime {
            Ok(path) => format!("Node.js runtime: {}", path.display()),
            Err(reason) => format!("Module loading unavailable: {}", reason),
        }
    }
}

fn parse_reply(stdout: &str) -> Option<serde_json::Result<NodeReply>> {
    stdout
        .lines()
        .rev()
        .find_map(|line| line.strip_prefix(REPLY_MARKER))
        .map(serde_json::from_str)
}
