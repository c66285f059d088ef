//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Name of the per-user directory under the home directory.
pub const USER_DIR_NAME: &str = ".vpath";

/// Project configuration file name.
pub const PROJECT_FILE: &str = "vpath.yaml";

/// Private (uncommitted) project configuration file name.
pub const LOCAL_FILE: &str = "vpath.local.yaml";

/// A loaded configuration file and its precedence.
///
/// Lower precedence values are overridden by higher ones.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path the configuration was read from.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Discovers and loads configuration files.
///
/// # Examples
///
/// ```no_run
/// use vpath::config::ConfigLoader;
/// use std::path::Path;
///
/// let sources = ConfigLoader::load_all(Path::new("."), None).unwrap();
/// println!("{} configuration files", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads every configuration file that applies to `working_dir`.
    ///
    /// 1. `config.yaml` in the user directory (precedence 1). The user
    ///    directory is `config_dir` when given, else `~/.vpath`.
    /// 2. `vpath.yaml` (precedence 2) and
    /// 3. `vpath.local.yaml` (precedence 3), from the nearest directory at
    ///    or above `working_dir` holding either.
    ///
    /// The result is ordered from lowest to highest precedence.
    ///
    /// # Errors
    ///
    /// Returns an error if a file exists but cannot be read or parsed.
    pub fn load_all(working_dir: &Path, config_dir: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();
        if let Some(user) = Self::load_user_config(config_dir)? {
            sources.push(user);
        }
        sources.extend(Self::discover_project_configs(working_dir)?);
        sources.sort_by_key(|s| s.precedence);
        Ok(sources)
    }

    fn load_user_config(config_dir: Option<&Path>) -> Result<Option<ConfigSource>> {
        let path = match config_dir {
            Some(dir) => dir.join("config.yaml"),
            None => match Self::user_config_path() {
                Some(path) => path,
                None => {
                    log::debug!("no home directory; skipping user configuration");
                    return Ok(None);
                }
            },
        };
        if !path.exists() {
            return Ok(None);
        }
        let config = Self::load_file(&path)?;
        Ok(Some(ConfigSource {
            path,
            precedence: 1,
            config,
        }))
    }

    /// Walks up from `start_dir` to the first directory holding a project
    /// file and loads the project files found there.
    ///
    /// # Errors
    ///
    /// Returns an error if a discovered file cannot be read or parsed.
    pub fn discover_project_configs(start_dir: &Path) -> Result<Vec<ConfigSource>> {
        let mut configs = Vec::new();
        let mut current = start_dir.to_path_buf();

        loop {
            for (name, precedence) in [(PROJECT_FILE, 2), (LOCAL_FILE, 3)] {
                let path = current.join(name);
                if path.exists() {
                    let config = Self::load_file(&path)?;
                    configs.push(ConfigSource {
                        path,
                        precedence,
                        config,
                    });
                }
            }
            if !configs.is_empty() || !current.pop() {
                break;
            }
        }

        Ok(configs)
    }

    /// Reads and parses one YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if the file cannot be read and
    /// [`Error::Validation`] if its contents are not a valid configuration.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("failed to read configuration file: {e}"),
        })?;
        log::debug!("loading configuration from {}", path.display());

        serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
            field: path.display().to_string(),
            message: format!("invalid configuration: {e}"),
        })
    }

    /// `~/.vpath/config.yaml`, if the home directory is known.
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        home::home_dir().map(|home| home.join(USER_DIR_NAME).join("config.yaml"))
    }
}
