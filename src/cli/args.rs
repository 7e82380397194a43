//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// extprobe - Diagnose custom extension directories and module loading.
#[derive(Debug, Parser)]
#[command(name = "extprobe")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only show problems
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(flatten)]
    pub probe: ProbeArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Probe the custom extensions directory (default if no command specified)
    Probe(ProbeArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `probe` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ProbeArgs {
    /// Environment variable holding the comma-separated extension list
    /// [default: N8N_CUSTOM_EXTENSIONS]
    #[arg(long, value_name = "NAME")]
    pub env_var: Option<String>,

    /// Custom extensions directory (overrides ~/.n8n/custom)
    #[arg(long, value_name = "PATH")]
    pub custom_dir: Option<PathBuf>,

    /// Module directory to look for inside dist/nodes [default: Ventriloquist]
    #[arg(long, value_name = "NAME")]
    pub module: Option<String>,

    /// Node.js runtime used to load the module (defaults to `node` on PATH)
    #[arg(long, value_name = "PATH")]
    pub node: Option<PathBuf>,

    /// Check the layout without loading the module
    #[arg(long)]
    pub no_load: bool,

    /// Output the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_command_parses() {
        let cli = Cli::parse_from(["extprobe"]);
        assert!(cli.command.is_none());
        assert!(!cli.probe.no_load);
        assert!(!cli.probe.json);
    }

    #[test]
    fn probe_flags_without_subcommand() {
        let cli = Cli::parse_from([
            "extprobe",
            "--no-load",
            "--json",
            "--env-var",
            "MY_EXTS",
            "--custom-dir",
            "/srv/custom",
            "--quiet",
        ]);

        assert!(cli.command.is_none());
        assert!(cli.probe.no_load);
        assert!(cli.probe.json);
        assert_eq!(cli.probe.env_var.as_deref(), Some("MY_EXTS"));
        assert_eq!(cli.probe.custom_dir, Some(PathBuf::from("/srv/custom")));
        assert!(cli.quiet);
    }

    #[test]
    fn top_level_probe_flags_conflict_with_subcommand() {
        let result = Cli::try_parse_from(["extprobe", "--no-load", "completions", "bash"]);
        assert!(result.is_err());
    }

    #[test]
    fn probe_flags_parse() {
        let cli = Cli::parse_from([
            "extprobe",
            "probe",
            "--env-var",
            "MY_EXTS",
            "--custom-dir",
            "/srv/custom",
            "--module",
            "Puppeteer",
            "--node",
            "/usr/bin/node",
            "--no-load",
            "--json",
        ]);

        let Some(Commands::Probe(args)) = cli.command else {
            panic!("Expected Probe command");
        };
        assert_eq!(args.env_var.as_deref(), Some("MY_EXTS"));
        assert_eq!(args.custom_dir, Some(PathBuf::from("/srv/custom")));
        assert_eq!(args.module.as_deref(), Some("Puppeteer"));
        assert_eq!(args.node, Some(PathBuf::from("/usr/bin/node")));
        assert!(args.no_load);
        assert!(args.json);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["extprobe", "probe", "--quiet", "--debug"]);
        assert!(cli.quiet);
        assert!(cli.debug);
    }
}
