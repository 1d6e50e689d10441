//! Command-line arguments.

use ag_core::settings::{DEFAULT_OUTPUT_FILE, DEFAULT_SERVICES_FILE, DEFAULT_TEMPLATE_FILE};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Generate a secrets-agent config from a service list.
#[derive(Parser, Debug)]
#[command(name = "agent-gen", version, about, args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub generate: GenerateArgs,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a starter config.yaml and config.yaml.tmpl
    Init(InitArgs),
}

/// Arguments for the default generate run.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Service list file
    #[arg(
        long,
        value_name = "PATH",
        env = "AGENT_GEN_SERVICES",
        default_value = DEFAULT_SERVICES_FILE
    )]
    pub services: PathBuf,

    /// Template file
    #[arg(
        long,
        value_name = "PATH",
        env = "AGENT_GEN_TEMPLATE",
        default_value = DEFAULT_TEMPLATE_FILE
    )]
    pub template: PathBuf,

    /// Output file
    #[arg(
        long,
        value_name = "PATH",
        env = "AGENT_GEN_OUTPUT",
        default_value = DEFAULT_OUTPUT_FILE
    )]
    pub output: PathBuf,

    /// Agent directory name used in the printed symlink commands
    /// (defaults to the directory containing this executable)
    #[arg(long, value_name = "NAME")]
    pub agent_dir: Option<String>,

    /// Print the rendered config to stdout instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write the starter files into
    #[arg(long, value_name = "PATH", default_value = ".")]
    pub dir: PathBuf,

    /// Overwrite existing files
    #[arg(long)]
    pub force: bool,
}
