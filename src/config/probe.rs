use std::ffi::OsString;
use std::path::PathBuf;

use crate::cli::ProbeArgs;
use crate::error::{ProbeError, Result};
use crate::probe::parse_extension_list;

/// Environment variable holding the comma-separated extension list.
pub const DEFAULT_ENV_VAR: &str = "N8N_CUSTOM_EXTENSIONS";

/// Module directory (and file stem) probed inside `dist/nodes`.
pub const DEFAULT_MODULE: &str = "Ventriloquist";

/// Environment variable that may point at a Node.js runtime.
pub const NODE_OVERRIDE_ENV: &str = "EXTPROBE_NODE";

/// Path segments of the custom directory below the home directory.
pub const CUSTOM_DIR_SEGMENTS: [&str; 2] = [".n8n", "custom"];

/// Fully resolved inputs for one probe run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Name of the variable the extension list is read from.
    pub env_var: String,
    /// Raw value of that variable; empty when unset, lossily decoded
    /// when not valid UTF-8.
    pub raw_value: String,
    /// Parsed extension names.
    pub extensions: Vec<String>,
    /// Base directory the extensions live in.
    pub custom_dir: PathBuf,
    /// Module directory name inside `dist/nodes`.
    pub module: String,
    /// Explicit Node.js runtime, if one was given.
    pub node: Option<PathBuf>,
    /// Whether the module file should be loaded at all.
    pub load_enabled: bool,
}

impl ProbeConfig {
    /// Resolve against the real process environment and home directory.
    pub fn resolve(args: &ProbeArgs) -> Result<Self> {
        Self::resolve_with(args, &|key: &str| std::env::var_os(key), dirs::home_dir())
    }

    /// Resolve with an injected environment lookup and home directory.
    ///
    /// `home` is only required when `args.custom_dir` is not set.
    pub fn resolve_with<F>(args: &ProbeArgs, env_fn: &F, home: Option<PathBuf>) -> Result<Self>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let env_var = args
            .env_var
            .clone()
            .unwrap_or_else(|| DEFAULT_ENV_VAR.to_string());
        let raw_value = env_fn(&env_var)
            .map(|value| value.to_string_lossy().into_owned())
            .unwrap_or_default();
        let extensions = parse_extension_list(&raw_value);

        let custom_dir = match &args.custom_dir {
            Some(dir) => dir.clone(),
            None => {
                let home = home.ok_or(ProbeError::HomeDirUnavailable)?;
                CUSTOM_DIR_SEGMENTS
                    .iter()
                    .fold(home, |path, segment| path.join(segment))
            }
        };

        let node = args.node.clone().or_else(|| {
            env_fn(NODE_OVERRIDE_ENV)
                .filter(|v| !v.to_string_lossy().trim().is_empty())
                .map(PathBuf::from)
        });

        let config = Self {
            env_var,
            raw_value,
            extensions,
            custom_dir,
            module: args
                .module
                .clone()
                .unwrap_or_else(|| DEFAULT_MODULE.to_string()),
            node,
            load_enabled: !args.no_load,
        };
        tracing::debug!("Resolved probe config: {:?}", config);
        Ok(config)
    }
}
