//! Virtual path grammar, expansion, and derived queries.
//!
//! A virtual path is a colon-delimited, platform-independent path:
//!
//! ```text
//! virtual_path := prefix_token ":" segment (":" segment)* ":"?
//! prefix_token := digit{1,2} | "$" | "*" | "@" | ""
//! ```
//!
//! # Leading forms
//!
//! - `:Volume:dir:file` is fully qualified; its first segment names a volume.
//! - `.D2:dir:file` is fully qualified by drive number (`D` in either case).
//! - `12:dir:file` is relative to prefix 12 (see [`crate::prefix`]).
//! - Anything else (`dir:file`, `file.txt`, `..:up`) is relative to
//!   prefix 8, the current directory.
//!
//! # Ascent
//!
//! Directly after the prefix, segments made only of periods climb the
//! tree: `.` stays put, `..` climbs one level, `...` two, and so on.
//! Consecutive ascent segments add up. Climbing stops at the volume root
//! without error. Period-only segments later in the path are ordinary
//! names.
//!
//! ```
//! use vpath::path::expand;
//! use vpath::{PrefixId, PrefixTable};
//!
//! let mut table = PrefixTable::new();
//! table.set(PrefixId::CURRENT, ":Work:src:vpath:").unwrap();
//!
//! assert_eq!(expand("...:docs", &table).unwrap(), ":Work:docs:");
//! assert_eq!(expand("..........:docs", &table).unwrap(), ":Work:docs:");
//! ```

mod expand;
mod query;
mod token;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use expand::expand;
pub use query::{
    append, dirname, file_extension, file_name, is_filename_only, is_full_pathname, prefix_of,
    set_file_extension,
};
pub use token::{classify, Leading};

pub(crate) use token::{drive_number, drive_root_len, qualified_root_len};
