//! Configuration validation.

use std::collections::{BTreeMap, HashSet};

use crate::config::schema::{Config, VolumeEntry};
use crate::error::{Error, Result};
use crate::native::DRIVE_COUNT;
use crate::path;
use crate::prefix::PrefixId;

/// Checks a merged configuration before it is turned into a context.
///
/// # Examples
///
/// ```
/// use vpath::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let bad = Config { boot_volume: Some("a:b".to_string()), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates every field that is set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(boot) = &config.boot_volume {
            Self::validate_volume_name("boot_volume", boot)?;
        }

        if let Some(prefix) = &config.volume_prefix {
            Self::validate_volume_prefix(prefix)?;
        }

        if let Some(volumes) = &config.volumes {
            Self::validate_volumes(volumes)?;
        }

        if let Some(prefixes) = &config.prefixes {
            Self::validate_prefix_map("prefixes", prefixes)?;
            for (token, value) in prefixes {
                path::classify(value).map_err(|e| Error::Validation {
                    field: format!("prefixes.{token}"),
                    message: e.to_string(),
                })?;
            }
        }

        if let Some(native) = &config.native_prefixes {
            Self::validate_prefix_map("native_prefixes", native)?;
        }

        Ok(())
    }

    /// A volume name is non-empty, has no colon and no NUL byte.
    fn validate_volume_name(field: &str, name: &str) -> Result<()> {
        let message = if name.trim().is_empty() {
            "volume name cannot be empty"
        } else if name.contains(':') {
            "volume name cannot contain ':'"
        } else if name.contains('\0') {
            "volume name cannot contain null bytes"
        } else {
            return Ok(());
        };
        Err(Error::Validation {
            field: field.into(),
            message: message.into(),
        })
    }

    fn validate_volume_prefix(prefix: &str) -> Result<()> {
        if !prefix.starts_with('/') {
            return Err(Error::Validation {
                field: "volume_prefix".into(),
                message: format!("'{prefix}' must be an absolute directory"),
            });
        }
        Ok(())
    }

    fn validate_volumes(volumes: &[VolumeEntry]) -> Result<()> {
        let mut names = HashSet::new();
        let mut drives = HashSet::new();

        for (i, volume) in volumes.iter().enumerate() {
            let field = format!("volumes[{i}]");
            Self::validate_volume_name(&field, &volume.name)?;

            if volume.drive >= DRIVE_COUNT {
                return Err(Error::Validation {
                    field,
                    message: format!("drive {} is out of range (0-25)", volume.drive),
                });
            }
            if !names.insert(volume.name.to_ascii_lowercase()) {
                return Err(Error::Validation {
                    field,
                    message: format!("duplicate volume name '{}'", volume.name),
                });
            }
            if !drives.insert(volume.drive) {
                return Err(Error::Validation {
                    field,
                    message: format!("drive {} is assigned twice", volume.drive),
                });
            }
        }

        Ok(())
    }

    fn validate_prefix_map(field: &str, entries: &BTreeMap<String, String>) -> Result<()> {
        for (token, value) in entries {
            PrefixId::from_token(token).map_err(|_| Error::Validation {
                field: field.into(),
                message: format!("'{token}' is not a prefix token (0-31, $, *, @)"),
            })?;

            if value.trim().is_empty() {
                return Err(Error::Validation {
                    field: format!("{field}.{token}"),
                    message: "prefix value cannot be empty".into(),
                });
            }
        }
        Ok(())
    }
}
