//! CLI argument parsing for markgate.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::report::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Markgate: CI gate for confidentiality and region marker comments.
///
/// Every contiguous block of added lines in a unified diff must start with
/// the confidentiality marker, and `Arista Begin` / `Arista End` comments
/// written in the file's own comment syntax must pair up.
#[derive(Parser, Debug)]
#[command(name = "markgate")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log filter directive (tracing-subscriber EnvFilter syntax).
    #[arg(
        long,
        env = "MARKGATE_LOG",
        default_value = "warn",
        global = true,
        hide_env = true
    )]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for markgate.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a unified diff.
    ///
    /// Exits 0 when the diff passes and 1 when violations are found.
    Check(CheckArgs),

    /// Show the comment syntax resolved for file paths.
    Syntax(SyntaxArgs),

    /// Write a default config file.
    Init(InitArgs),
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Diff file to validate. Reads stdin when omitted or `-`.
    pub diff: Option<PathBuf>,

    /// Config file. Defaults to `.markgate.yaml` in the working directory, if present.
    #[arg(long, env = "MARKGATE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print the raw diff before the validation result.
    #[arg(long)]
    pub echo_diff: bool,

    /// Close an open Begin region at every file header.
    #[arg(long)]
    pub reset_region_per_file: bool,
}

/// Arguments for the `syntax` command.
#[derive(Parser, Debug)]
pub struct SyntaxArgs {
    /// File paths to resolve.
    #[arg(required = true)]
    pub paths: Vec<String>,

    /// Config file providing comment syntax overrides.
    #[arg(long, env = "MARKGATE_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Arguments for the `init` command.
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Where to write the config.
    #[arg(long, default_value = ".markgate.yaml")]
    pub path: PathBuf,

    /// Overwrite an existing file.
    #[arg(long)]
    pub force: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_check_defaults() {
        let cli = Cli::try_parse_from(["markgate", "check"]).unwrap();
        assert_eq!(cli.log_level, "warn");
        if let Command::Check(args) = cli.command {
            assert!(args.diff.is_none());
            assert_eq!(args.format, OutputFormat::Text);
            assert!(!args.echo_diff);
            assert!(!args.reset_region_per_file);
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn parse_check_with_options() {
        let cli = Cli::try_parse_from([
            "markgate",
            "check",
            "pr.diff",
            "--config",
            "gate.yaml",
            "--format",
            "json",
            "--echo-diff",
            "--reset-region-per-file",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(cli.log_level, "debug");
        if let Command::Check(args) = cli.command {
            assert_eq!(args.diff, Some(PathBuf::from("pr.diff")));
            assert_eq!(args.config, Some(PathBuf::from("gate.yaml")));
            assert_eq!(args.format, OutputFormat::Json);
            assert!(args.echo_diff);
            assert!(args.reset_region_per_file);
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn parse_check_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["markgate", "check", "--format", "xml"]).is_err());
    }

    #[test]
    fn parse_syntax_requires_paths() {
        assert!(Cli::try_parse_from(["markgate", "syntax"]).is_err());

        let cli = Cli::try_parse_from(["markgate", "syntax", "a.py", "b.rs"]).unwrap();
        if let Command::Syntax(args) = cli.command {
            assert_eq!(args.paths, vec!["a.py", "b.rs"]);
        } else {
            panic!("Expected Syntax command");
        }
    }

    #[test]
    fn parse_init_defaults() {
        let cli = Cli::try_parse_from(["markgate", "init"]).unwrap();
        if let Command::Init(args) = cli.command {
            assert_eq!(args.path, PathBuf::from(".markgate.yaml"));
            assert!(!args.force);
        } else {
            panic!("Expected Init command");
        }
    }
}
