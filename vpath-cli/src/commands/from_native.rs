//! Command to parse a native path into a virtual path.

use crate::error::CliError;
use crate::utils::{load_context, print_conversion, resolve_format, GlobalOptions};
use clap::Args;
use vpath::config::OutputFormat;
use vpath::Filename;

/// Convert a native path to a virtual path.
#[derive(Args)]
pub struct FromNativeCommand {
    /// Native path; empty means the current directory
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,

    /// Expand the result against the prefix table
    #[arg(long)]
    pub expand: bool,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl FromNativeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (config, ctx) = load_context(global)?;
        let mut file = Filename::default();
        file.set_from_native(&self.path, &ctx)?;
        if self.expand {
            file.expand(&ctx)?;
        }
        print_conversion(
            resolve_format(self.format, &config),
            &self.path,
            file.as_str().to_string(),
        )
    }
}
