//! Property-based tests for configuration merging and validation.

use std::collections::BTreeMap;

use proptest::prelude::*;

use super::merger::ConfigMerger;
use super::schema::Config;
use super::validator::ConfigValidator;
use crate::native::StyleKind;

fn style_strategy() -> impl Strategy<Value = StyleKind> {
    prop_oneof![
        Just(StyleKind::Darwin),
        Just(StyleKind::Unix),
        Just(StyleKind::Windows),
    ]
}

fn token_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u8..=31).prop_map(|n| n.to_string()),
        Just("$".to_string()),
        Just("*".to_string()),
        Just("@".to_string()),
    ]
}

fn prefix_map_strategy() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map(
        token_strategy(),
        "[A-Za-z]{1,8}".prop_map(|v| format!(":{v}:")),
        0..6,
    )
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(style_strategy()),
        prop::option::of("[A-Za-z ]{1,12}"),
        prop::option::of(any::<bool>()),
        prop::option::of(prefix_map_strategy()),
    )
        .prop_map(|(style, boot_volume, host_defaults, prefixes)| Config {
            style,
            boot_volume,
            host_defaults,
            prefixes,
            ..Config::default()
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        prop_assert_eq!(merged.style, high.style.or(low.style));
        prop_assert_eq!(
            merged.boot_volume.as_ref(),
            high.boot_volume.as_ref().or(low.boot_volume.as_ref())
        );
        prop_assert_eq!(merged.host_defaults, high.host_defaults.or(low.host_defaults));
    }

    #[test]
    fn merge_prefix_maps_keep_every_key(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        let merged_prefixes = merged.prefixes.unwrap_or_default();
        for (token, value) in high.prefixes.iter().flatten() {
            prop_assert_eq!(merged_prefixes.get(token), Some(value));
        }
        for token in low.prefixes.iter().flatten().map(|(t, _)| t) {
            prop_assert!(merged_prefixes.contains_key(token));
        }
    }

    #[test]
    fn merge_with_empty_is_identity(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(merged, config);
    }

    #[test]
    fn generated_configs_validate(config in config_strategy()) {
        prop_assume!(config.boot_volume.as_ref().map_or(true, |b| !b.trim().is_empty()));
        prop_assert!(ConfigValidator::validate(&config).is_ok());
    }
}
