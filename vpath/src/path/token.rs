//! Classification of the leading token of a virtual path.

use crate::error::Result;
use crate::prefix::{is_numeric_token, PrefixId};

/// How a virtual path begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leading {
    /// Already fully qualified. The first `root_len` bytes are the root
    /// segment: `":Volume:"` or a drive-number form such as `".D2:"`.
    Qualified {
        /// Length of the root segment, including its colon when present.
        root_len: usize,
    },
    /// Starts with an explicit prefix token; `rest` is the byte offset just
    /// past the token's colon.
    Prefixed {
        /// The named slot.
        id: PrefixId,
        /// Offset of the text following `token:`.
        rest: usize,
    },
    /// No prefix at all; resolved against [`PrefixId::CURRENT`].
    Relative,
}

/// Classifies the leading token of `path`.
///
/// # Errors
///
/// Returns [`Error::BadPrefix`](crate::Error::BadPrefix) when the text before
/// the first colon is all digits but does not name a slot (`"32:"`, `"123:"`).
///
/// # Examples
///
/// ```
/// use vpath::path::{classify, Leading};
/// use vpath::PrefixId;
///
/// assert_eq!(classify(":boot:tmp:").unwrap(), Leading::Qualified { root_len: 6 });
/// assert_eq!(classify(".D2:foo").unwrap(), Leading::Qualified { root_len: 4 });
/// assert_eq!(
///     classify("@:settings").unwrap(),
///     Leading::Prefixed { id: PrefixId::PREFS, rest: 2 }
/// );
/// assert_eq!(classify("..:up").unwrap(), Leading::Relative);
/// assert!(classify("99:nope").is_err());
/// ```
pub fn classify(path: &str) -> Result<Leading> {
    if let Some(root_len) = qualified_root_len(path) {
        return Ok(Leading::Qualified { root_len });
    }
    let Some(colon) = path.find(':') else {
        return Ok(Leading::Relative);
    };
    let token = &path[..colon];
    if matches!(token, "$" | "*" | "@") || is_numeric_token(token) {
        let id = PrefixId::from_token(token)?;
        return Ok(Leading::Prefixed {
            id,
            rest: colon + 1,
        });
    }
    Ok(Leading::Relative)
}

/// Length of the root segment of a fully qualified path, or `None` if the
/// path is not fully qualified.
pub(crate) fn qualified_root_len(path: &str) -> Option<usize> {
    if let Some(after) = path.strip_prefix(':') {
        return Some(after.find(':').map_or(path.len(), |i| i + 2));
    }
    drive_root_len(path)
}

/// Length of a leading `.Dnn:` segment (case-insensitive `D`, at least one
/// digit), including its colon.
pub(crate) fn drive_root_len(path: &str) -> Option<usize> {
    let bytes = path.as_bytes();
    if bytes.len() < 4 || bytes[0] != b'.' || !bytes[1].eq_ignore_ascii_case(&b'd') {
        return None;
    }
    let digits = bytes[2..].iter().take_while(|b| b.is_ascii_digit()).count();
    let colon = 2 + digits;
    (digits > 0 && bytes.get(colon) == Some(&b':')).then_some(colon + 1)
}

/// Drive number of a `.Dnn:` root segment.
pub(crate) fn drive_number(root: &str) -> Option<u32> {
    let len = drive_root_len(root)?;
    root[2..len - 1].parse().ok()
}
