//! Shell completion generation command.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

const BIN_NAME: &str = "vpath";

/// Generate shell completion scripts.
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        if !global.quiet {
            eprintln!("# Generating {} completion script", self.shell);
            match self.shell {
                Shell::Bash => {
                    eprintln!("#   vpath completions bash > ~/.local/share/bash-completion/completions/vpath");
                }
                Shell::Zsh => {
                    eprintln!("#   vpath completions zsh > ~/.zsh/completions/_vpath");
                }
                Shell::Fish => {
                    eprintln!("#   vpath completions fish > ~/.config/fish/completions/vpath.fish");
                }
                Shell::PowerShell => {
                    eprintln!("#   vpath completions powershell | Out-String | Invoke-Expression");
                }
                _ => {}
            }
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());
        Ok(())
    }
}
