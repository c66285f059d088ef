//! Command to print or replace the extension of a virtual path.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use vpath::Filename;

/// Print or replace the extension of a virtual path.
///
/// Without `--set`, prints the extension and fails with exit code 1 when
/// there is none.
#[derive(Args)]
pub struct ExtensionCommand {
    /// Virtual path
    #[arg(value_name = "VPATH")]
    pub path: String,

    /// New extension; an empty value removes it
    #[arg(long, value_name = "EXT")]
    pub set: Option<String>,
}

impl ExtensionCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let mut file = Filename::new(self.path);

        if let Some(extension) = self.set {
            file.set_file_extension(&extension);
            println!("{file}");
            return Ok(());
        }

        match file.file_extension() {
            "" => Err(CliError::SemanticFailure(format!(
                "'{}' has no extension",
                file.file_name()
            ))),
            extension => {
                println!("{extension}");
                Ok(())
            }
        }
    }
}
