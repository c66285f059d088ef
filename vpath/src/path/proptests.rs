//! Property-based tests for expansion and the derived queries.

use super::{append, dirname, expand, file_name};
use crate::prefix::{PrefixId, PrefixTable};
use proptest::prelude::*;

fn segment_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 _-]{1,12}"
}

fn qualified_strategy() -> impl Strategy<Value = String> {
    (segment_strategy(), prop::collection::vec(segment_strategy(), 0..8)).prop_map(
        |(volume, dirs)| {
            let mut path = format!(":{volume}:");
            for dir in dirs {
                path.push_str(&dir);
                path.push(':');
            }
            path
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Expansion always yields a qualified path with a trailing colon
    #[test]
    fn expansion_ends_with_colon(
        current in qualified_strategy(),
        tail in prop::collection::vec(prop_oneof![segment_strategy(), "\\.{1,6}"], 0..6),
    ) {
        let mut table = PrefixTable::new();
        table.set(PrefixId::CURRENT, &current).unwrap();
        let path = format!("8:{}", tail.join(":"));
        let expanded = expand(&path, &table).unwrap();
        prop_assert!(expanded.ends_with(':'));
        prop_assert!(expanded.starts_with(':'));
    }

    // Expanding an expanded path changes nothing
    #[test]
    fn expansion_idempotent_on_qualified(path in qualified_strategy()) {
        let table = PrefixTable::new();
        let once = expand(&path, &table).unwrap();
        let twice = expand(&once, &table).unwrap();
        prop_assert_eq!(once, twice);
    }

    // Ascent never climbs above the volume of the current prefix
    #[test]
    fn ascent_clamped_at_volume(current in qualified_strategy(), dots in 1usize..20) {
        let mut table = PrefixTable::new();
        table.set(PrefixId::CURRENT, &current).unwrap();
        let volume_end = current[1..].find(':').unwrap() + 2;
        let expanded = expand(&".".repeat(dots), &table).unwrap();
        prop_assert!(expanded.starts_with(&current[..volume_end]));
        prop_assert!(current.starts_with(&expanded));
    }

    // dirname(append(p, s)) == p for a qualified directory p
    #[test]
    fn dirname_undoes_append(dir in qualified_strategy(), name in segment_strategy()) {
        let joined = append(&dir, &name);
        prop_assert_eq!(dirname(&joined), dir.as_str());
        prop_assert_eq!(file_name(&joined), name.as_str());
    }
}
