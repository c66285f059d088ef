//! CLI structure and command definitions.

use crate::commands::{
    BasenameCommand, CompletionsCommand, DirnameCommand, ExpandCommand, ExtensionCommand,
    FromNativeCommand, PrefixesCommand, ToNativeCommand, ValidateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use vpath::StyleKind;

/// Translate virtual paths to native paths and back.
#[derive(Parser)]
#[command(name = "vpath")]
#[command(
    version,
    about = "Translate virtual paths to native paths and back",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Directory holding the user config.yaml
    #[arg(long, value_name = "PATH", global = true, env = "VPATH_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Native path style
    #[arg(long, value_enum, global = true)]
    pub style: Option<StyleKind>,

    /// Name of the boot volume
    #[arg(long, value_name = "NAME", global = true)]
    pub boot_volume: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert a virtual path to a native path
    ToNative(ToNativeCommand),

    /// Convert a native path to a virtual path
    FromNative(FromNativeCommand),

    /// Expand prefixes and ascent in a virtual path
    Expand(ExpandCommand),

    /// Print the parent directory of a virtual path
    Dirname(DirnameCommand),

    /// Print the last segment of a virtual path
    Basename(BasenameCommand),

    /// Print or replace the extension of a virtual path
    Extension(ExtensionCommand),

    /// List the prefix table
    Prefixes(PrefixesCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
