//! Loader that never loads.

use std::path::Path;

use super::{LoadOutcome, ModuleLoader};

/// A loader used when module loading has been switched off.
#[derive(Debug, Clone, Default)]
pub struct DisabledLoader;

impl ModuleLoader for DisabledLoader {
    fn load(&self, path: &Path) -> LoadOutcome {
        tracing::debug!("Module loading disabled, skipping {}", path.display());
        LoadOutcome::Unsupported {
            reason: "module loading disabled".to_string(),
        }
    }

    fn describe(&self) -> String {
        "Module loading disabled".to_string()
    }
}
