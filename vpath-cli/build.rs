//! Build script for vpath-cli.
//!
//! Renders the `vpath.1` man page into `OUT_DIR/man` with clap_mangen.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! tree is restated here.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Keep in sync with src/cli.rs.
fn build_cli() -> Command {
    Command::new("vpath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Translate virtual paths to native paths and back")
        .long_about(
            "Resolve colon-delimited virtual paths through a prefix table and convert \
             them to and from the native path syntax of Darwin, Unix or Windows",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config-dir")
                .long("config-dir")
                .help("Directory holding the user config.yaml")
                .value_name("PATH")
                .global(true)
                .env("VPATH_CONFIG_DIR"),
        )
        .arg(
            Arg::new("style")
                .long("style")
                .help("Native path style (darwin, unix, windows)")
                .value_name("STYLE")
                .global(true),
        )
        .arg(
            Arg::new("boot-volume")
                .long("boot-volume")
                .help("Name of the boot volume")
                .value_name("NAME")
                .global(true),
        )
        .subcommands(vec![
            Command::new("to-native")
                .about("Convert a virtual path to a native path")
                .long_about("Expand a virtual path and render it in the native style"),
            Command::new("from-native")
                .about("Convert a native path to a virtual path")
                .long_about("Parse a native path into colon-delimited virtual notation"),
            Command::new("expand")
                .about("Expand prefixes and ascent in a virtual path")
                .long_about("Resolve the leading prefix and period segments of a virtual path"),
            Command::new("dirname")
                .about("Print the parent directory of a virtual path"),
            Command::new("basename")
                .about("Print the last segment of a virtual path"),
            Command::new("extension")
                .about("Print or replace the extension of a virtual path"),
            Command::new("prefixes")
                .about("List the prefix table")
                .long_about("Show every populated prefix slot and its native rendering"),
            Command::new("validate")
                .about("Validate a configuration file")
                .long_about("Check a vpath configuration file for errors"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").unwrap_or_default());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;
    fs::write(man_dir.join("vpath.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
