//! Configuration merging and precedence handling.

use std::collections::BTreeMap;

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration layers according to precedence.
///
/// # Examples
///
/// ```
/// use vpath::config::{Config, ConfigMerger};
///
/// let low = Config { boot_volume: Some("low".to_string()), ..Default::default() };
/// let high = Config { boot_volume: Some("high".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.boot_volume.as_deref(), Some("high"));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Folds `sources`, given lowest precedence first, into one config.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merges `source` over `target`.
    ///
    /// # Merging Rules
    ///
    /// - Scalar fields: `source` wins when set.
    /// - `prefixes`, `native_prefixes`: merged key by key, `source` winning
    ///   per key.
    /// - `volumes`: replaced as a whole, since drive assignments only make
    ///   sense together.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.style.is_some() {
            target.style = source.style;
        }

        if source.boot_volume.is_some() {
            target.boot_volume.clone_from(&source.boot_volume);
        }

        if source.volume_prefix.is_some() {
            target.volume_prefix.clone_from(&source.volume_prefix);
        }

        if source.host_defaults.is_some() {
            target.host_defaults = source.host_defaults;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if source.volumes.is_some() {
            target.volumes.clone_from(&source.volumes);
        }

        Self::merge_map(&mut target.prefixes, source.prefixes.as_ref());
        Self::merge_map(&mut target.native_prefixes, source.native_prefixes.as_ref());
    }

    fn merge_map(
        target: &mut Option<BTreeMap<String, String>>,
        source: Option<&BTreeMap<String, String>>,
    ) {
        let Some(source) = source else {
            return;
        };
        let target = target.get_or_insert_with(BTreeMap::new);
        for (token, value) in source {
            target.insert(token.clone(), value.clone());
        }
    }
}
