//! Probe command implementation.
//!
//! The `extprobe probe` command checks the custom extensions directory,
//! walks each configured extension's build output and tries to load its
//! module. Missing directories and failed loads are reported, never fatal:
//! the command exits 0 whenever it runs to completion.

use crate::cli::args::ProbeArgs;
use crate::config::ProbeConfig;
use crate::error::Result;
use crate::loader::{DisabledLoader, ModuleLoader, NodeModuleLoader};
use crate::probe::{render_report, DirectoryProber};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The probe command implementation.
pub struct ProbeCommand {
    args: ProbeArgs,
}

impl ProbeCommand {
    /// Create a new probe command.
    pub fn new(args: ProbeArgs) -> Self {
        Self { args }
    }

    /// Run with an already resolved config and a specific loader.
    pub fn execute_with(
        &self,
        config: &ProbeConfig,
        loader: &dyn ModuleLoader,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let report = DirectoryProber::new(config, loader).run();

        if self.args.json {
            let output = serde_json::to_string_pretty(&report)?;
            ui.document(&output);
        } else {
            render_report(&report, ui);
            if ui.output_mode().shows_details() {
                ui.message("");
                ui.message(&loader.describe());
            }
        }

        Ok(CommandResult::success())
    }
}

impl Command for ProbeCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = ProbeConfig::resolve(&self.args)?;

        let loader: Box<dyn ModuleLoader> = if config.load_enabled {
            Box::new(NodeModuleLoader::detect(config.node.clone()))
        } else {
            Box::new(DisabledLoader)
        };

        self.execute_with(&config, loader.as_ref(), ui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::LoadOutcome;
    use crate::ui::{MockUI, OutputMode};
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    struct FixedLoader(LoadOutcome);

    impl ModuleLoader for FixedLoader {
        fn load(&self, _path: &Path) -> LoadOutcome {
            self.0.clone()
        }

        fn describe(&self) -> String {
            "Fixed test loader".to_string()
        }
    }

    fn config(custom_dir: PathBuf, raw: &str) -> ProbeConfig {
        ProbeConfig {
            env_var: "N8N_CUSTOM_EXTENSIONS".to_string(),
            raw_value: raw.to_string(),
            extensions: crate::probe::parse_extension_list(raw),
            custom_dir,
            module: "Ventriloquist".to_string(),
            node: None,
            load_enabled: true,
        }
    }

    fn make_extension(custom: &Path, name: &str) {
        let module_dir = custom.join(name).join("dist/nodes/Ventriloquist");
        fs::create_dir_all(&module_dir).unwrap();
        fs::write(module_dir.join("Ventriloquist.node.js"), "module.exports = {};").unwrap();
    }

    #[test]
    fn missing_custom_dir_succeeds_with_two_lines() {
        let temp = TempDir::new().unwrap();
        let cfg = config(temp.path().join("nope"), "ext");
        let cmd = ProbeCommand::new(ProbeArgs::default());
        let mut ui = MockUI::new();

        let result = cmd
            .execute_with(&cfg, &FixedLoader(LoadOutcome::Loaded { exports: vec![] }), &mut ui)
            .unwrap();

        assert!(result.success);
        assert_eq!(ui.lines().len(), 2);
    }

    #[test]
    fn load_failure_still_succeeds() {
        let temp = TempDir::new().unwrap();
        make_extension(temp.path(), "a");
        make_extension(temp.path(), "b");
        let cfg = config(temp.path().to_path_buf(), "a,b");
        let cmd = ProbeCommand::new(ProbeArgs::default());
        let loader = FixedLoader(LoadOutcome::Failed {
            error: "ReferenceError: x is not defined".to_string(),
        });
        let mut ui = MockUI::new();

        let result = cmd.execute_with(&cfg, &loader, &mut ui).unwrap();

        assert!(result.success);
        assert_eq!(ui.headers(), &["Extension: a", "Extension: b"]);
        assert_eq!(
            ui.warnings()
                .iter()
                .filter(|w| w.contains("ReferenceError"))
                .count(),
            2
        );
    }

    #[test]
    fn verbose_mode_describes_loader() {
        let temp = TempDir::new().unwrap();
        let cfg = config(temp.path().to_path_buf(), "");
        let cmd = ProbeCommand::new(ProbeArgs::default());
        let loader = FixedLoader(LoadOutcome::Loaded { exports: vec![] });

        let mut ui = MockUI::with_mode(OutputMode::Verbose);
        cmd.execute_with(&cfg, &loader, &mut ui).unwrap();
        assert_eq!(ui.lines().last().unwrap(), "Fixed test loader");

        let mut ui = MockUI::new();
        cmd.execute_with(&cfg, &loader, &mut ui).unwrap();
        assert!(!ui.has_line("Fixed test loader"));
    }

    #[test]
    fn json_output_is_a_single_document() {
        let temp = TempDir::new().unwrap();
        make_extension(temp.path(), "ext");
        let cfg = config(temp.path().to_path_buf(), "ext");
        let cmd = ProbeCommand::new(ProbeArgs {
            json: true,
            ..Default::default()
        });
        let loader = FixedLoader(LoadOutcome::Loaded {
            exports: vec!["Ventriloquist".to_string()],
        });
        let mut ui = MockUI::with_mode(OutputMode::Verbose);

        cmd.execute_with(&cfg, &loader, &mut ui).unwrap();

        assert_eq!(ui.lines().len(), 1);
        assert_eq!(ui.documents().len(), 1);
        let json: serde_json::Value = serde_json::from_str(&ui.documents()[0]).unwrap();
        assert_eq!(json["raw_value"], "ext");
        assert_eq!(json["extensions"][0]["name"], "ext");
        assert_eq!(json["extensions"][0]["load"]["status"], "loaded");
        assert_eq!(json["extensions"][0]["load"]["exports"][0], "Ventriloquist");
    }
}
