//! Command to expand a virtual path.

use crate::error::CliError;
use crate::utils::{load_context, print_conversion, resolve_format, GlobalOptions};
use clap::Args;
use vpath::config::OutputFormat;
use vpath::path;

/// Expand prefixes and ascent in a virtual path.
#[derive(Args)]
pub struct ExpandCommand {
    /// Virtual path to expand
    #[arg(value_name = "VPATH")]
    pub path: String,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl ExpandCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (config, ctx) = load_context(global)?;
        let expanded = path::expand(&self.path, ctx.prefixes())?;
        print_conversion(resolve_format(self.format, &config), &self.path, expanded)
    }
}
