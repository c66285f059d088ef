//! CLI command implementations.
//!
//! - `to_native`: virtual path to native path
//! - `from_native`: native path to virtual path
//! - `expand`: resolve prefixes and ascent
//! - `dirname`, `basename`, `extension`: path component queries
//! - `prefixes`: list the prefix table
//! - `validate`: check a configuration file
//! - `completions`: shell completion scripts

pub mod basename;
pub mod completions;
pub mod dirname;
pub mod expand;
pub mod extension;
pub mod from_native;
pub mod prefixes;
pub mod to_native;
pub mod validate;

pub use basename::BasenameCommand;
pub use completions::CompletionsCommand;
pub use dirname::DirnameCommand;
pub use expand::ExpandCommand;
pub use extension::ExtensionCommand;
pub use from_native::FromNativeCommand;
pub use prefixes::PrefixesCommand;
pub use to_native::ToNativeCommand;
pub use validate::ValidateCommand;
