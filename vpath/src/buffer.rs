//! Fallible string allocation shared by the expander and the native codecs.

use crate::error::{Error, Result};

/// Returns an empty string with room for exactly `len` bytes.
///
/// Callers size `len` with a pre-pass over their input so the fill pass
/// never reallocates.
pub(crate) fn sized(len: usize, context: &'static str) -> Result<String> {
    let mut out = String::new();
    out.try_reserve_exact(len)
        .map_err(Error::out_of_memory(context))?;
    Ok(out)
}
