//! Layered YAML configuration.
//!
//! # Configuration Precedence
//!
//! Layers are merged from lowest to highest precedence:
//!
//! 1. Built-in defaults (host style, host boot volume, host prefixes)
//! 2. User config (`~/.vpath/config.yaml`, or `config.yaml` in the
//!    directory given to [`ConfigBuilder::with_config_dir`])
//! 3. Project config (`vpath.yaml`)
//! 4. Private project config (`vpath.local.yaml`)
//! 5. Environment variables (`VPATH_*`, see [`EnvironmentConfig`])
//! 6. Programmatic overrides ([`ConfigBuilder::with_config`])
//!
//! Project files are found by walking up from the working directory to the
//! first directory that has either file.
//!
//! # Examples
//!
//! ```no_run
//! use vpath::config::ConfigBuilder;
//! use vpath::Filename;
//!
//! let ctx = ConfigBuilder::new().build_context().unwrap();
//! let mut file = Filename::new("@:settings.yaml");
//! println!("{}", file.native(&ctx).unwrap());
//! ```
//!
//! A project file:
//!
//! ```yaml
//! style: darwin
//! boot_volume: Macintosh HD
//! volumes:
//!   - name: Data
//!     drive: 3
//! prefixes:
//!   10: "8:build"
//!   "$": ":Macintosh HD:System:"
//! native_prefixes:
//!   11: /Volumes/Data/shared
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, OutputFormat, VolumeEntry};
pub use validator::ConfigValidator;
