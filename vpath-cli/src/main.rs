//! Entry point for the `vpath` command-line tool.

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    let logger = vpath::init_logger(cli.verbose, cli.quiet);
    logger.install();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config_dir: cli.config_dir,
        style: cli.style,
        boot_volume: cli.boot_volume,
    };

    let result = match cli.command {
        cli::Command::ToNative(cmd) => cmd.execute(&global),
        cli::Command::FromNative(cmd) => cmd.execute(&global),
        cli::Command::Expand(cmd) => cmd.execute(&global),
        cli::Command::Dirname(cmd) => cmd.execute(&global),
        cli::Command::Basename(cmd) => cmd.execute(&global),
        cli::Command::Extension(cmd) => cmd.execute(&global),
        cli::Command::Prefixes(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            if !global.quiet {
                eprintln!("Error: {e}");
            }
            std::process::exit(e.exit_code());
        }
    }
}
