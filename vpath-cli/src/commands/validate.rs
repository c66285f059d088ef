//! Command to validate a vpath configuration file.

use crate::error::CliError;
use crate::utils::{shorten_path, GlobalOptions};
use clap::Args;
use std::path::PathBuf;
use vpath::config::{ConfigLoader, ConfigValidator};
use vpath::PathContext;

/// Validate a vpath configuration file.
#[derive(Args)]
pub struct ValidateCommand {
    /// Configuration file to validate
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: PathBuf,
}

impl ValidateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if !self.config_path.exists() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                self.config_path.display()
            )));
        }

        let config = match ConfigLoader::load_file(&self.config_path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Parse error: {e}");
                return Err(CliError::SemanticFailure(
                    "Configuration file is invalid".to_string(),
                ));
            }
        };

        // Building the context also resolves every prefix entry.
        let checked = ConfigValidator::validate(&config).and_then(|()| {
            let mut isolated = config.clone();
            isolated.host_defaults = Some(false);
            PathContext::from_config(&isolated)
        });

        match checked {
            Ok(_) => {
                if !global.quiet {
                    println!("{} is valid", shorten_path(&self.config_path));
                }
                Ok(())
            }
            Err(e) => {
                eprintln!("Validation error: {e}");
                Err(CliError::SemanticFailure(
                    "Configuration validation failed".to_string(),
                ))
            }
        }
    }
}
