//! Common test utilities for integration tests.

use vpath::{BootVolume, PathContext, PathStyle, PrefixId, PrefixTable, VolumeTable};

/// Builds a prefix table from `(token, virtual path)` pairs, in order.
#[allow(dead_code)]
pub fn prefixes(pairs: &[(&str, &str)]) -> PrefixTable {
    let mut table = PrefixTable::new();
    for (token, value) in pairs {
        let id = PrefixId::from_token(token).unwrap();
        table.set(id, value).unwrap();
    }
    table
}

/// Darwin context with boot volume `boot` and the given prefixes.
#[allow(dead_code)]
pub fn darwin(pairs: &[(&str, &str)]) -> PathContext {
    PathContext::builder()
        .style(PathStyle::darwin())
        .boot(BootVolume::new("boot").unwrap())
        .prefixes(prefixes(pairs))
        .build()
}

/// Windows context with boot volume `C` and the given volumes.
#[allow(dead_code)]
pub fn windows(volumes: &[(&str, u8)], pairs: &[(&str, &str)]) -> PathContext {
    let mut table = VolumeTable::new();
    for (name, drive) in volumes {
        table.insert(*name, *drive).unwrap();
    }
    PathContext::builder()
        .style(PathStyle::windows())
        .boot(BootVolume::new("C").unwrap())
        .volumes(table)
        .prefixes(prefixes(pairs))
        .build()
}
