//! Command to list the prefix table.

use crate::error::CliError;
use crate::utils::{load_context, resolve_format, GlobalOptions};
use clap::Args;
use vpath::config::OutputFormat;
use vpath::output;

/// List the prefix table.
#[derive(Args)]
pub struct PrefixesCommand {
    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl PrefixesCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (config, ctx) = load_context(global)?;
        let entries = output::prefix_entries(&ctx);
        let formatter = resolve_format(self.format, &config).create_formatter();
        println!("{}", formatter.format_prefixes(&entries)?);
        Ok(())
    }
}
