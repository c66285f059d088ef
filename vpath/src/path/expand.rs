//! Prefix substitution and leading-period ascent.

use crate::buffer;
use crate::error::Result;
use crate::path::token::{classify, qualified_root_len, Leading};
use crate::prefix::{PrefixId, PrefixTable};

/// Expands `path` into a fully qualified virtual path.
///
/// The leading token picks the base: a qualified path is its own base, a
/// prefixed path uses that table entry, and anything else uses the entry
/// for [`PrefixId::CURRENT`]. Leading segments made only of periods then
/// climb out of the base, `n` periods removing `n - 1` directories and
/// stopping at the volume root. Later segments are copied unchanged.
///
/// The result always ends with a colon.
///
/// # Errors
///
/// - [`Error::BadPrefix`](crate::Error::BadPrefix) for a malformed numeric token.
/// - [`Error::UnresolvedPrefix`](crate::Error::UnresolvedPrefix) when the
///   selected slot is empty.
/// - [`Error::OutOfMemory`](crate::Error::OutOfMemory) if the output buffer
///   cannot be allocated.
///
/// # Examples
///
/// ```
/// use vpath::{path::expand, PrefixId, PrefixTable};
///
/// let mut table = PrefixTable::new();
/// table.set(PrefixId::CURRENT, ":boot:current:deep:").unwrap();
///
/// assert_eq!(expand("8:..:PrevDir:File:", &table).unwrap(), ":boot:current:PrevDir:File:");
/// assert_eq!(expand("notes.txt", &table).unwrap(), ":boot:current:deep:notes.txt:");
/// assert_eq!(expand(":Other:x", &table).unwrap(), ":Other:x:");
/// ```
pub fn expand(path: &str, table: &PrefixTable) -> Result<String> {
    let (base, rest) = match classify(path)? {
        Leading::Qualified { root_len } => (&path[..root_len], &path[root_len..]),
        Leading::Prefixed { id, rest } => (table.require(id)?, &path[rest..]),
        Leading::Relative => (table.require(PrefixId::CURRENT)?, path),
    };

    let root_len = qualified_root_len(base).unwrap_or(base.len());
    let root = base[..root_len].strip_suffix(':').unwrap_or(&base[..root_len]);
    let mut dirs = segments(&base[root_len..]);

    let mut tail = segments(rest).into_iter().peekable();
    while let Some(periods) = tail.next_if(|seg| is_ascent(seg)) {
        let pops = periods.len() - 1;
        dirs.truncate(dirs.len().saturating_sub(pops));
    }
    dirs.extend(tail);

    let len = root.len() + 1 + dirs.iter().map(|seg| seg.len() + 1).sum::<usize>();
    let mut out = buffer::sized(len, "expanding a virtual path")?;
    out.push_str(root);
    out.push(':');
    for seg in &dirs {
        out.push_str(seg);
        out.push(':');
    }

    log::trace!("expanded {path:?} to {out:?}");
    Ok(out)
}

/// Splits colon-delimited text into segments, ignoring one trailing colon.
fn segments(text: &str) -> Vec<&str> {
    let body = text.strip_suffix(':').unwrap_or(text);
    if body.is_empty() && text.len() <= 1 {
        return Vec::new();
    }
    body.split(':').collect()
}

/// A segment made only of periods.
fn is_ascent(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b == b'.')
}
