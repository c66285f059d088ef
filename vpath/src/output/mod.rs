//! Output formatting for prefix listings and path conversions.

mod formatters;

use serde::Serialize;

use crate::config::OutputFormat;
use crate::context::PathContext;
use crate::native;
use crate::Result;

pub use formatters::{HumanFormatter, JsonFormatter};

/// One populated prefix slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrefixEntry {
    /// Token used in virtual paths (`8`, `$`, `@`, ...).
    pub token: String,
    /// Slot index.
    pub slot: usize,
    /// Expanded virtual path.
    pub path: String,
    /// The path in the context's native style, if it renders.
    pub native: Option<String>,
}

/// The result of converting one path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    /// What the user passed in.
    pub input: String,
    /// What it converted to.
    pub output: String,
}

/// Formats listings and conversions for display.
pub trait OutputFormatter {
    /// Formats the populated prefix slots.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format_prefixes(&self, entries: &[PrefixEntry]) -> Result<String>;

    /// Formats a single conversion.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format_conversion(&self, conversion: &Conversion) -> Result<String>;
}

impl OutputFormat {
    /// Creates the formatter for this format.
    #[must_use]
    pub fn create_formatter(self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Human => Box::new(HumanFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}

/// Lists the context's populated prefixes in slot order, each with its
/// native rendering.
#[must_use]
pub fn prefix_entries(ctx: &PathContext) -> Vec<PrefixEntry> {
    ctx.prefixes()
        .iter()
        .map(|(id, path)| PrefixEntry {
            token: id.token(),
            slot: id.index(),
            path: path.to_string(),
            native: native::to_native(path, ctx).ok(),
        })
        .collect()
}
