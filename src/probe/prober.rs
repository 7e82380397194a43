//! Walks the custom directory and records what it finds.

use std::fs;
use std::path::Path;

use crate::config::ProbeConfig;
use crate::loader::ModuleLoader;

use super::layout::ExtensionLayout;
use super::report::{ExtensionReport, FileCheck, LevelCheck, Listing, ProbeReport};

/// Gathers a [`ProbeReport`] for a configuration.
///
/// The prober only reads the filesystem and asks its loader to load
/// module files; rendering is left to [`render_report`](super::render_report).
pub struct DirectoryProber<'a> {
    config: &'a ProbeConfig,
    loader: &'a dyn ModuleLoader,
}

impl<'a> DirectoryProber<'a> {
    /// Create a prober.
    pub fn new(config: &'a ProbeConfig, loader: &'a dyn ModuleLoader) -> Self {
        Self { config, loader }
    }

    /// Run every check.
    ///
    /// Stops after the custom directory if it is missing. Otherwise each
    /// configured extension is probed in order; a missing level or failed
    /// load only ends that extension's checks.
    pub fn run(&self) -> ProbeReport {
        let custom_dir = &self.config.custom_dir;
        let mut report = ProbeReport {
            env_var: self.config.env_var.clone(),
            raw_value: self.config.raw_value.clone(),
            custom_dir: custom_dir.clone(),
            custom_dir_listing: None,
            extensions: Vec::new(),
        };

        if !custom_dir.exists() {
            tracing::debug!("Custom directory missing: {}", custom_dir.display());
            return report;
        }
        report.custom_dir_listing = Some(Listing::read(custom_dir));

        for name in &self.config.extensions {
            report.extensions.push(self.probe_extension(name));
        }

        report
    }

    fn probe_extension(&self, name: &str) -> ExtensionReport {
        let layout = ExtensionLayout::new(&self.config.custom_dir, name, &self.config.module);
        let mut report = ExtensionReport::new(name);

        for (level, path) in layout.levels() {
            let exists = path.exists();
            tracing::debug!("{} {}: exists={}", name, path.display(), exists);

            let listing = (exists && level.lists_entries()).then(|| Listing::read(path));
            report.levels.push(LevelCheck {
                level,
                path: path.to_path_buf(),
                exists,
                listing,
            });

            if !exists {
                return report;
            }
        }

        let file = check_file(layout.module_file());
        let exists = file.exists;
        report.module_file = Some(file);

        if exists {
            tracing::debug!("Loading {}", layout.module_file().display());
            report.load = Some(self.loader.load(layout.module_file()));
        }

        report
    }
}

fn check_file(path: &Path) -> FileCheck {
    let size = fs::metadata(path).ok().map(|m| m.len());
    FileCheck {
        path: path.to_path_buf(),
        exists: size.is_some(),
        size,
    }
}
