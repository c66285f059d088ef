//! Output formatter implementations.

use serde::Serialize;

use crate::{Error, Result};

use super::{Conversion, OutputFormatter, PrefixEntry};

/// Aligned text for terminals.
pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format_prefixes(&self, entries: &[PrefixEntry]) -> Result<String> {
        if entries.is_empty() {
            return Ok("No prefixes set.".to_string());
        }

        let width = entries.iter().map(|e| e.path.len()).max().unwrap_or(0);
        let lines: Vec<String> = entries
            .iter()
            .map(|entry| {
                let native = entry.native.as_deref().unwrap_or("-");
                format!("{:>2}  {:<width$}  {native}", entry.token, entry.path)
            })
            .collect();
        Ok(lines.join("\n"))
    }

    fn format_conversion(&self, conversion: &Conversion) -> Result<String> {
        Ok(conversion.output.clone())
    }
}

/// Pretty-printed JSON.
pub struct JsonFormatter;

impl JsonFormatter {
    fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
        serde_json::to_string_pretty(value).map_err(|e| Error::Validation {
            field: "json_output".to_string(),
            message: format!("failed to serialize to JSON: {e}"),
        })
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_prefixes(&self, entries: &[PrefixEntry]) -> Result<String> {
        Self::to_json(entries)
    }

    fn format_conversion(&self, conversion: &Conversion) -> Result<String> {
        Self::to_json(conversion)
    }
}
