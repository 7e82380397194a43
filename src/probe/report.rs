//! Observations gathered by a probe run.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::loader::LoadOutcome;

/// A directory level in the extension layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    /// `<custom>/<extension>`
    Extension,
    /// `<extension>/dist`
    Dist,
    /// `<dist>/nodes`
    Nodes,
    /// `<nodes>/<Module>`
    Module,
}

impl Level {
    /// Human-readable name of the level.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Extension => "Extension directory",
            Self::Dist => "dist directory",
            Self::Nodes => "nodes directory",
            Self::Module => "Module directory",
        }
    }

    /// Whether the entries of this level are listed once it is found.
    pub fn lists_entries(&self) -> bool {
        matches!(self, Self::Nodes | Self::Module)
    }
}

/// Contents of a directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Listing {
    /// Entry names, sorted.
    Entries(Vec<String>),
    /// The directory exists but could not be read.
    Unreadable(String),
}

impl Listing {
    /// Read the immediate entries of a directory.
    pub fn read(path: &Path) -> Self {
        let read_dir = match fs::read_dir(path) {
            Ok(rd) => rd,
            Err(e) => return Self::Unreadable(e.to_string()),
        };

        let mut names = Vec::new();
        for entry in read_dir {
            match entry {
                Ok(entry) => names.push(entry.file_name().to_string_lossy().into_owned()),
                Err(e) => return Self::Unreadable(e.to_string()),
            }
        }
        names.sort();
        Self::Entries(names)
    }
}

/// Result of checking one directory level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelCheck {
    pub level: Level,
    pub path: PathBuf,
    pub exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listing: Option<Listing>,
}

/// Result of checking the module file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileCheck {
    pub path: PathBuf,
    pub exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

/// Everything observed for one configured extension name.
///
/// `levels` stops at the first missing level, so a missing level is always
/// the last entry. `module_file` is only set once every level exists and
/// `load` only once the file exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtensionReport {
    pub name: String,
    pub levels: Vec<LevelCheck>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module_file: Option<FileCheck>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load: Option<LoadOutcome>,
}

impl ExtensionReport {
    /// Create an empty report for an extension name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            levels: Vec::new(),
            module_file: None,
            load: None,
        }
    }

    /// The deepest level that was found missing, if any.
    pub fn missing_level(&self) -> Option<Level> {
        self.levels.iter().find(|c| !c.exists).map(|c| c.level)
    }
}

/// A full probe run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeReport {
    /// Name of the environment variable the extension list came from.
    pub env_var: String,
    /// Raw value of that variable (empty if unset).
    pub raw_value: String,
    /// Resolved custom extensions directory.
    pub custom_dir: PathBuf,
    /// Listing of the custom directory; `None` when it does not exist.
    pub custom_dir_listing: Option<Listing>,
    pub extensions: Vec<ExtensionReport>,
}

impl ProbeReport {
    /// Whether the custom directory was found.
    pub fn custom_dir_exists(&self) -> bool {
        self.custom_dir_listing.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn listing_reads_sorted_entries() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("zeta")).unwrap();
        fs::write(temp.path().join("alpha.txt"), "").unwrap();

        assert_eq!(
            Listing::read(temp.path()),
            Listing::Entries(vec!["alpha.txt".to_string(), "zeta".to_string()])
        );
    }

    #[test]
    fn listing_of_empty_directory() {
        let temp = TempDir::new().unwrap();
        assert_eq!(Listing::read(temp.path()), Listing::Entries(vec![]));
    }

    #[test]
    fn listing_of_file_is_unreadable() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("plain");
        fs::write(&file, "x").unwrap();

        assert!(matches!(Listing::read(&file), Listing::Unreadable(_)));
    }

    #[test]
    fn only_nodes_and_module_levels_list_entries() {
        assert!(!Level::Extension.lists_entries());
        assert!(!Level::Dist.lists_entries());
        assert!(Level::Nodes.lists_entries());
        assert!(Level::Module.lists_entries());
    }

    #[test]
    fn missing_level_finds_first_absent() {
        let mut report = ExtensionReport::new("ext");
        report.levels.push(LevelCheck {
            level: Level::Extension,
            path: PathBuf::from("/c/ext"),
            exists: true,
            listing: None,
        });
        report.levels.push(LevelCheck {
            level: Level::Dist,
            path: PathBuf::from("/c/ext/dist"),
            exists: false,
            listing: None,
        });

        assert_eq!(report.missing_level(), Some(Level::Dist));
    }

    #[test]
    fn report_serializes_to_json() {
        let report = ProbeReport {
            env_var: "N8N_CUSTOM_EXTENSIONS".into(),
            raw_value: String::new(),
            custom_dir: PathBuf::from("/home/me/.n8n/custom"),
            custom_dir_listing: None,
            extensions: vec![],
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["env_var"], "N8N_CUSTOM_EXTENSIONS");
        assert_eq!(json["custom_dir"], "/home/me/.n8n/custom");
        assert!(json["custom_dir_listing"].is_null());
        assert!(!report.custom_dir_exists());
    }

    #[test]
    fn level_serializes_snake_case() {
        assert_eq!(serde_json::to_value(Level::Nodes).unwrap(), "nodes");
    }
}
