//! Command to print the parent directory of a virtual path.

use crate::error::CliError;
use crate::utils::{load_context, GlobalOptions};
use clap::Args;
use vpath::Filename;

/// Print the parent directory of a virtual path.
#[derive(Args)]
pub struct DirnameCommand {
    /// Virtual path
    #[arg(value_name = "VPATH")]
    pub path: String,

    /// Expand the path first
    #[arg(long)]
    pub expand: bool,

    /// Print the parent as a native path (implies --expand)
    #[arg(long)]
    pub native: bool,
}

impl DirnameCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut file = Filename::new(self.path);
        if !self.expand && !self.native {
            println!("{}", file.dirname_string());
            return Ok(());
        }

        let (_, ctx) = load_context(global)?;
        file.expand(&ctx)?;
        file.dirname();
        if self.native {
            println!("{}", file.native(&ctx)?);
        } else {
            println!("{file}");
        }
        Ok(())
    }
}
