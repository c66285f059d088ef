//! Builder that assembles the final configuration from every layer.

use std::env;
use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::context::PathContext;
use crate::error::Result;

/// Loads, merges, overrides and validates configuration.
///
/// # Examples
///
/// ```
/// use vpath::config::{Config, ConfigBuilder};
/// use vpath::StyleKind;
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         style: Some(StyleKind::Unix),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
/// assert_eq!(config.style, Some(StyleKind::Unix));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    config_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Vec<Config>,
}

impl ConfigBuilder {
    /// Creates a builder that reads files and environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory to start project file discovery from. Defaults to the
    /// current directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Directory holding the user `config.yaml`, replacing `~/.vpath`.
    #[must_use]
    pub fn with_config_dir(mut self, dir: &Path) -> Self {
        self.config_dir = Some(dir.to_path_buf());
        self
    }

    /// Skips user and project configuration files.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Skips `VPATH_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Adds a programmatic layer above everything else. Later calls win.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides.push(config);
        self
    }

    /// Produces the merged, validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed, an environment
    /// variable is malformed, or the merged result fails validation.
    pub fn build(self) -> Result<Config> {
        let mut config = if self.skip_files {
            Config::default()
        } else {
            let working_dir = match self.working_dir {
                Some(dir) => dir,
                None => env::current_dir()?,
            };
            let sources = ConfigLoader::load_all(&working_dir, self.config_dir.as_deref())?;
            for source in &sources {
                log::debug!(
                    "configuration layer {} from {}",
                    source.precedence,
                    source.path.display()
                );
            }
            ConfigMerger::merge(sources)
        };

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        for layer in &self.overrides {
            ConfigMerger::merge_into(&mut config, layer);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }

    /// Builds the configuration and turns it into a [`PathContext`].
    ///
    /// # Errors
    ///
    /// Everything [`build`](Self::build) and
    /// [`PathContext::from_config`] can return.
    pub fn build_context(self) -> Result<PathContext> {
        PathContext::from_config(&self.build()?)
    }
}
