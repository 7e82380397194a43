//! The fixed build-output layout expected inside an extension.
//!
//! ```text
//! <custom>/<extension>/dist/nodes/<Module>/<Module>.node.js
//! ```

use std::path::{Path, PathBuf};

use super::report::Level;

/// Name of the build output directory inside an extension.
pub const DIST_DIR: &str = "dist";

/// Name of the node directory inside `dist`.
pub const NODES_DIR: &str = "nodes";

/// Suffix of the module file inside the module directory.
pub const MODULE_FILE_SUFFIX: &str = ".node.js";

/// Paths probed for a single extension.
///
/// Built purely by joining; nothing here touches the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionLayout {
    root: PathBuf,
    dist: PathBuf,
    nodes: PathBuf,
    module_dir: PathBuf,
    module_file: PathBuf,
}

impl ExtensionLayout {
    /// Compute the layout for `extension` under `custom_dir`.
    ///
    /// `module` is the module directory name. It is never derived from the
    /// extension name.
    pub fn new(custom_dir: &Path, extension: &str, module: &str) -> Self {
        let root = custom_dir.join(extension);
        let dist = root.join(DIST_DIR);
        let nodes = dist.join(NODES_DIR);
        let module_dir = nodes.join(module);
        let module_file = module_dir.join(format!("{}{}", module, MODULE_FILE_SUFFIX));

        Self {
            root,
            dist,
            nodes,
            module_dir,
            module_file,
        }
    }

    /// The extension directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The module file to load.
    pub fn module_file(&self) -> &Path {
        &self.module_file
    }

    /// Directory levels in the order they are checked.
    pub fn levels(&self) -> [(Level, &Path); 4] {
        [
            (Level::Extension, self.root.as_path()),
            (Level::Dist, self.dist.as_path()),
            (Level::Nodes, self.nodes.as_path()),
            (Level::Module, self.module_dir.as_path()),
        ]
    }
}
