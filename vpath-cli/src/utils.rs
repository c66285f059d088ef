//! Helpers shared by the CLI commands: configuration loading, context
//! construction and output.

use crate::error::CliError;
use std::path::{Path, PathBuf};
use vpath::config::OutputFormat;
use vpath::output::Conversion;
use vpath::{Config, ConfigBuilder, PathContext, StyleKind};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Directory holding the user `config.yaml`.
    pub config_dir: Option<PathBuf>,

    /// Native path style override.
    pub style: Option<StyleKind>,

    /// Boot volume override.
    pub boot_volume: Option<String>,
}

/// Loads layered configuration with the global flags applied on top.
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(dir) = &global.config_dir {
        builder = builder.with_config_dir(dir);
    }

    let flags = Config {
        style: global.style,
        boot_volume: global.boot_volume.clone(),
        ..Config::default()
    };

    builder
        .with_config(flags)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Loads configuration and builds the path context from it.
pub fn load_context(global: &GlobalOptions) -> Result<(Config, PathContext), CliError> {
    let config = load_configuration(global)?;
    let ctx = PathContext::from_config(&config)?;
    if global.verbose {
        eprintln!(
            "Using {} style, boot volume '{}'",
            ctx.style().kind(),
            ctx.boot().name()
        );
    }
    Ok((config, ctx))
}

/// The format flag if given, else the configured format, else human.
pub fn resolve_format(flag: Option<OutputFormat>, config: &Config) -> OutputFormat {
    flag.or(config.output_format).unwrap_or_default()
}

/// Prints one conversion in `format`.
pub fn print_conversion(format: OutputFormat, input: &str, output: String) -> Result<(), CliError> {
    let conversion = Conversion {
        input: input.to_string(),
        output,
    };
    println!("{}", format.create_formatter().format_conversion(&conversion)?);
    Ok(())
}

/// Shortens a path for display, showing the home directory as `~`.
pub fn shorten_path(path: &Path) -> String {
    if let Some(home) = home::home_dir() {
        if let Ok(relative) = path.strip_prefix(&home) {
            return format!("~/{}", relative.display());
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_format_precedence() {
        let mut config = Config::default();
        assert_eq!(resolve_format(None, &config), OutputFormat::Human);

        config.output_format = Some(OutputFormat::Json);
        assert_eq!(resolve_format(None, &config), OutputFormat::Json);
        assert_eq!(
            resolve_format(Some(OutputFormat::Human), &config),
            OutputFormat::Human
        );
    }

    #[test]
    fn test_shorten_path_outside_home() {
        assert_eq!(shorten_path(Path::new("/definitely/not/home")), "/definitely/not/home");
    }
}
