//! Property-based tests for native serialization.

use super::{from_native, to_native, BootVolume, PathStyle};
use crate::context::PathContext;
use crate::path::expand;
use proptest::prelude::*;

fn component_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_-][A-Za-z0-9 ._-]{0,15}"
}

fn absolute_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(component_strategy(), 0..8)
        .prop_filter("not under the mount prefix", |parts| {
            parts.first().map_or(true, |first| first != "Volumes")
        })
        .prop_map(|parts| format!("/{}", parts.join("/")))
}

fn virtual_strategy() -> impl Strategy<Value = String> {
    (
        "[A-Za-z][A-Za-z0-9]{0,10}",
        prop::collection::vec(component_strategy(), 0..6),
    )
        .prop_map(|(volume, parts)| {
            let mut path = format!(":{volume}:");
            for part in parts {
                path.push_str(&part);
                path.push(':');
            }
            path
        })
}

fn darwin() -> PathContext {
    PathContext::builder()
        .style(PathStyle::darwin())
        .boot(BootVolume::new("boot").unwrap())
        .build()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // to_native(from_native(p)) == p for absolute paths off the mount prefix
    #[test]
    fn native_round_trip(native in absolute_strategy()) {
        let ctx = darwin();
        let virtual_path = from_native(&native, &ctx).unwrap();
        let expanded = expand(&virtual_path, ctx.prefixes()).unwrap();
        prop_assert_eq!(to_native(&expanded, &ctx).unwrap(), native);
    }

    // Output never ends in the separator unless it is the root
    #[test]
    fn no_trailing_separator(path in virtual_strategy()) {
        let native = to_native(&path, &darwin()).unwrap();
        prop_assert!(native == "/" || !native.ends_with('/'));
        prop_assert!(native.starts_with('/'));
    }

    // Parsed paths always end in exactly one colon
    #[test]
    fn parsed_paths_end_with_colon(native in absolute_strategy()) {
        let parsed = from_native(&native, &darwin()).unwrap();
        prop_assert!(parsed.ends_with(':'));
        prop_assert!(!parsed.ends_with("::") || native.ends_with("//"));
    }
}
