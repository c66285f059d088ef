//! Command to print the last segment of a virtual path.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use vpath::Filename;

/// Print the last segment of a virtual path.
#[derive(Args)]
pub struct BasenameCommand {
    /// Virtual path
    #[arg(value_name = "VPATH")]
    pub path: String,
}

impl BasenameCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        println!("{}", Filename::new(self.path).basename());
        Ok(())
    }
}
