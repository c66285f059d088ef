//! Configuration schema definitions.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::native::StyleKind;

/// Complete configuration structure.
///
/// Every field is optional so that layers can be merged; see
/// [`ConfigMerger`](crate::config::ConfigMerger).
///
/// Prefix maps are keyed by prefix token. YAML treats `*` and `@` as
/// syntax, so those keys must be quoted.
///
/// # Examples
///
/// ```
/// use vpath::config::Config;
///
/// let yaml = r#"
/// style: darwin
/// boot_volume: Macintosh HD
/// prefixes:
///   10: ":Macintosh HD:Users:me:src:"
///   "@": ":Macintosh HD:Users:me:Library:Preferences:"
/// "#;
/// let config: Config = serde_yaml::from_str(yaml).unwrap();
/// assert_eq!(config.boot_volume.as_deref(), Some("Macintosh HD"));
/// assert_eq!(config.prefixes.unwrap().len(), 2);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Native path style; `host` picks the compilation target's.
    #[serde(default, deserialize_with = "deserialize_style")]
    pub style: Option<StyleKind>,

    /// Name of the boot volume.
    pub boot_volume: Option<String>,

    /// Directory under which non-boot volumes are mounted (POSIX styles).
    pub volume_prefix: Option<String>,

    /// Mounted volumes and their drive numbers.
    pub volumes: Option<Vec<VolumeEntry>>,

    /// Prefix token to virtual path.
    #[serde(default, deserialize_with = "deserialize_prefix_map")]
    pub prefixes: Option<BTreeMap<String, String>>,

    /// Prefix token to native path, parsed in the configured style.
    #[serde(default, deserialize_with = "deserialize_prefix_map")]
    pub native_prefixes: Option<BTreeMap<String, String>>,

    /// Whether to seed the prefix table from the running host
    /// (current directory, executable, home). Defaults to true.
    pub host_defaults: Option<bool>,

    /// Output format for CLI listings.
    pub output_format: Option<OutputFormat>,
}

/// A mounted volume.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct VolumeEntry {
    /// Volume name, without colons.
    pub name: String,
    /// Drive number, `0` for `A:` through `25` for `Z:`.
    pub drive: u8,
}

/// Output format for CLI listings.
///
/// # Examples
///
/// ```
/// use vpath::config::OutputFormat;
///
/// assert_eq!(OutputFormat::Json.to_string(), "json");
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned, human-readable text.
    #[default]
    Human,
    /// JSON.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
        }
    }
}

fn deserialize_style<'de, D>(deserializer: D) -> Result<Option<StyleKind>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let Some(name) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    StyleKind::parse(&name)
        .map(Some)
        .map_err(|e| D::Error::custom(e.to_string()))
}

/// Accepts bare numbers as well as strings for prefix keys, so that
/// `10: ...` and `"10": ...` are the same entry.
fn deserialize_prefix_map<'de, D>(
    deserializer: D,
) -> Result<Option<BTreeMap<String, String>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize, PartialEq, Eq, PartialOrd, Ord)]
    #[serde(untagged)]
    enum Key {
        Number(u64),
        Text(String),
    }

    let Some(raw) = Option::<BTreeMap<Key, String>>::deserialize(deserializer)? else {
        return Ok(None);
    };
    Ok(Some(
        raw.into_iter()
            .map(|(key, value)| {
                let key = match key {
                    Key::Number(n) => n.to_string(),
                    Key::Text(s) => s,
                };
                (key, value)
            })
            .collect(),
    ))
}
