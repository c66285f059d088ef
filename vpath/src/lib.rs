#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # vpath
//!
//! Colon-delimited virtual paths with numbered prefixes, and their
//! translation to and from native OS paths.
//!
//! A virtual path such as `10:reports:q3.txt` starts with a prefix token
//! naming a slot of the [`PrefixTable`]. [`path::expand`] replaces the
//! token with the slot's value and resolves leading period segments
//! (`..:` climbs one directory) to give a fully qualified path like
//! `:Work:reports:q3.txt:`. The [`native`] module renders that for the
//! host (`/Volumes/Work/reports/q3.txt`) and parses native paths back.
//!
//! ## Core Types
//!
//! - [`PrefixId`] and [`PrefixTable`]: prefix slots `0`-`31`, `$`, `*`, `@`
//! - [`PathContext`]: prefixes, boot volume, path style and volume table
//! - [`Filename`]: a virtual path with a cached native rendering
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use vpath::{BootVolume, Filename, PathContext, PathStyle, PrefixId, PrefixTable};
//!
//! let mut prefixes = PrefixTable::new();
//! prefixes.set(PrefixId::new(10).unwrap(), ":Work:").unwrap();
//!
//! let ctx = PathContext::builder()
//!     .style(PathStyle::darwin())
//!     .boot(BootVolume::new("Macintosh HD").unwrap())
//!     .prefixes(prefixes)
//!     .build();
//!
//! let mut file = Filename::new("10:reports:q3.txt");
//! assert_eq!(file.native(&ctx).unwrap(), "/Volumes/Work/reports/q3.txt");
//! file.expand(&ctx).unwrap();
//! assert_eq!(file.as_str(), ":Work:reports:q3.txt:");
//!
//! let mut back = Filename::new("");
//! back.set_from_native("/Users/me/notes", &ctx).unwrap();
//! assert_eq!(back.as_str(), ":Macintosh HD:Users:me:notes:");
//! ```

mod buffer;
pub mod config;
pub mod context;
pub mod error;
pub mod filename;
pub mod logging;
pub mod native;
pub mod output;
pub mod path;
pub mod prefix;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use context::{PathContext, PathContextBuilder};
pub use error::{Error, ErrorKind, Result};
pub use filename::{Filename, FilenameState};
pub use logging::{init_logger, LogLevel, Logger};
pub use native::{
    BootVolume, BootVolumeSource, HostBootVolume, PathStyle, StyleKind, VolumeTable,
};
pub use prefix::{PrefixId, PrefixTable};
