//! Library exports for vpath-cli, so tests and tooling can reach the
//! command tree.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
