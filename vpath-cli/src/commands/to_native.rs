//! Command to render a virtual path natively.

use crate::error::CliError;
use crate::utils::{load_context, print_conversion, resolve_format, GlobalOptions};
use clap::Args;
use vpath::config::OutputFormat;
use vpath::Filename;

/// Convert a virtual path to a native path.
#[derive(Args)]
pub struct ToNativeCommand {
    /// Virtual path, e.g. `10:reports:q3.txt`
    #[arg(value_name = "VPATH")]
    pub path: String,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl ToNativeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (config, ctx) = load_context(global)?;
        let mut file = Filename::new(self.path.as_str());
        let native = file.native(&ctx)?.to_string();
        print_conversion(resolve_format(self.format, &config), &self.path, native)
    }
}
