//! Prefix identifiers and the prefix table.
//!
//! A virtual path may begin with a prefix token naming a registered root:
//! `"12:Data:"` means "directory `Data` under whatever prefix 12 holds".
//! There are thirty-two numbered prefixes and three symbolic ones:
//!
//! | Token | Slot | Meaning |
//! |-------|------|---------|
//! | `8`   | 8    | current working directory (used when no prefix is given) |
//! | `9`   | 9    | directory of the running executable |
//! | `$`   | 32   | system folder |
//! | `*`   | 33   | boot volume root |
//! | `@`   | 34   | user preferences folder |
//!
//! The table is built once, usually as part of a
//! [`PathContext`](crate::PathContext), and read without synchronization
//! afterwards.

mod id;
mod table;

pub use id::{PrefixId, MAX_NUMERIC_PREFIX};
pub use table::PrefixTable;

pub(crate) use id::is_numeric_token;
