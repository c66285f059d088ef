//! `VPATH_*` environment variable overrides.

use std::env;

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};
use crate::native::StyleKind;
use crate::prefix::PrefixId;

/// Applies environment variable overrides on top of file configuration.
///
/// | Variable | Field |
/// |---|---|
/// | `VPATH_STYLE` | `style` |
/// | `VPATH_BOOT_VOLUME` | `boot_volume` |
/// | `VPATH_VOLUME_PREFIX` | `volume_prefix` |
/// | `VPATH_HOST_DEFAULTS` | `host_defaults` |
/// | `VPATH_OUTPUT_FORMAT` | `output_format` |
/// | `VPATH_PREFIX_0` .. `VPATH_PREFIX_31` | `prefixes` entry `0`..`31` |
/// | `VPATH_PREFIX_SYSTEM`, `_BOOT`, `_PREFS` | `prefixes` entry `$`, `*`, `@` |
///
/// # Examples
///
/// ```no_run
/// use vpath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Reads every `VPATH_*` variable and applies it to `config`.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an unknown style, output format or
    /// boolean spelling.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(style) = env::var("VPATH_STYLE") {
            config.style = Some(StyleKind::parse(&style)?);
        }

        if let Ok(boot) = env::var("VPATH_BOOT_VOLUME") {
            config.boot_volume = Some(boot);
        }

        if let Ok(prefix) = env::var("VPATH_VOLUME_PREFIX") {
            config.volume_prefix = Some(prefix);
        }

        if let Ok(val) = env::var("VPATH_HOST_DEFAULTS") {
            config.host_defaults = Some(Self::parse_bool("VPATH_HOST_DEFAULTS", &val)?);
        }

        if let Ok(val) = env::var("VPATH_OUTPUT_FORMAT") {
            config.output_format = Some(Self::parse_output_format(&val)?);
        }

        for id in PrefixId::all() {
            if let Ok(value) = env::var(Self::prefix_var(id)) {
                config
                    .prefixes
                    .get_or_insert_with(Default::default)
                    .insert(id.token(), value);
            }
        }

        Ok(())
    }

    /// Name of the variable that overrides prefix `id`.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::config::EnvironmentConfig;
    /// use vpath::PrefixId;
    ///
    /// assert_eq!(EnvironmentConfig::prefix_var(PrefixId::CURRENT), "VPATH_PREFIX_8");
    /// assert_eq!(EnvironmentConfig::prefix_var(PrefixId::PREFS), "VPATH_PREFIX_PREFS");
    /// ```
    #[must_use]
    pub fn prefix_var(id: PrefixId) -> String {
        let suffix = match id {
            PrefixId::SYSTEM => "SYSTEM".to_string(),
            PrefixId::BOOT => "BOOT".to_string(),
            PrefixId::PREFS => "PREFS".to_string(),
            numeric => numeric.token(),
        };
        format!("VPATH_PREFIX_{suffix}")
    }

    /// Accepts true/1/yes/on and false/0/no/off, ignoring case.
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }

    fn parse_output_format(s: &str) -> Result<OutputFormat> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            _ => Err(Error::Validation {
                field: "VPATH_OUTPUT_FORMAT".into(),
                message: format!("unknown output format '{s}' (expected human or json)"),
            }),
        }
    }
}
