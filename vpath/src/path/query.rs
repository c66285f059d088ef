//! Derived queries and edits on unexpanded virtual paths.
//!
//! None of these consult a prefix table; they work on the text as written.

use crate::path::token::{classify, qualified_root_len, Leading};
use crate::prefix::PrefixId;

/// Whether `path` begins at a volume (`:Volume:` or `.Dnn:`).
///
/// # Examples
///
/// ```
/// use vpath::path::is_full_pathname;
///
/// assert!(is_full_pathname(":foo:bar"));
/// assert!(is_full_pathname(".d31:foo"));
/// assert!(!is_full_pathname(".d:foo"));
/// assert!(!is_full_pathname("8:foo"));
/// ```
#[must_use]
pub fn is_full_pathname(path: &str) -> bool {
    qualified_root_len(path).is_some()
}

/// Whether `path` carries neither a volume nor a prefix, so it would be
/// resolved against the current directory. Malformed prefixes count as
/// neither.
#[must_use]
pub fn is_filename_only(path: &str) -> bool {
    matches!(classify(path), Ok(Leading::Relative))
}

/// The explicit prefix `path` starts with, if any.
#[must_use]
pub fn prefix_of(path: &str) -> Option<PrefixId> {
    match classify(path) {
        Ok(Leading::Prefixed { id, .. }) => Some(id),
        _ => None,
    }
}

/// The last segment of `path`, ignoring one trailing colon.
///
/// # Examples
///
/// ```
/// use vpath::path::file_name;
///
/// assert_eq!(file_name(":boot:docs:notes.txt:"), "notes.txt");
/// assert_eq!(file_name("plain"), "plain");
/// ```
#[must_use]
pub fn file_name(path: &str) -> &str {
    let body = path.strip_suffix(':').unwrap_or(path);
    body.rfind(':').map_or(body, |i| &body[i + 1..])
}

/// The extension of the last segment, without its period.
///
/// A segment whose only period is its first byte (`.profile`) has no
/// extension.
#[must_use]
pub fn file_extension(path: &str) -> &str {
    let name = file_name(path);
    match name.rfind('.') {
        Some(dot) if dot > 0 => &name[dot + 1..],
        _ => "",
    }
}

/// Replaces (or adds, or with an empty `extension` removes) the extension
/// of the last segment. A leading period on `extension` is ignored. The
/// result ends with a colon.
///
/// # Examples
///
/// ```
/// use vpath::path::set_file_extension;
///
/// assert_eq!(set_file_extension(":a:report.txt:", "md"), ":a:report.md:");
/// assert_eq!(set_file_extension(":a:report", ".tar"), ":a:report.tar:");
/// assert_eq!(set_file_extension(":a:report.txt", ""), ":a:report:");
/// ```
#[must_use]
pub fn set_file_extension(path: &str, extension: &str) -> String {
    let body = path.strip_suffix(':').unwrap_or(path);
    let current = file_extension(body);
    let stem = if current.is_empty() {
        body
    } else {
        &body[..body.len() - current.len() - 1]
    };
    let extension = extension.strip_prefix('.').unwrap_or(extension);

    let mut out = String::with_capacity(stem.len() + extension.len() + 2);
    out.push_str(stem);
    if !extension.is_empty() {
        out.push('.');
        out.push_str(extension);
    }
    out.push(':');
    out
}

/// The parent directory of `path`, always ending with a colon when `path`
/// has one to spare. A volume root is its own parent, and a path with no
/// directory component is returned unchanged.
///
/// # Examples
///
/// ```
/// use vpath::path::dirname;
///
/// assert_eq!(dirname(":foo:bar:"), ":foo:");
/// assert_eq!(dirname(":foo:"), ":foo:");
/// assert_eq!(dirname("one:two"), "one:");
/// assert_eq!(dirname("one"), "one");
/// ```
#[must_use]
pub fn dirname(path: &str) -> &str {
    let body = path.strip_suffix(':').unwrap_or(path);
    let Some(cut) = body.rfind(':') else {
        return path;
    };
    match qualified_root_len(path) {
        Some(root) if cut + 1 < root => &path[..root],
        _ => &path[..=cut],
    }
}

/// Joins `segment` onto `path` with exactly one separating colon and a
/// trailing colon. An empty `segment` leaves `path` as is.
///
/// # Examples
///
/// ```
/// use vpath::path::append;
///
/// assert_eq!(append(":foo:bar", "foo:"), ":foo:bar:foo:");
/// assert_eq!(append(":foo:", "foo"), ":foo:foo:");
/// ```
#[must_use]
pub fn append(path: &str, segment: &str) -> String {
    if segment.is_empty() {
        return path.to_string();
    }
    let mut out = String::with_capacity(path.len() + segment.len() + 2);
    out.push_str(path);
    if !out.is_empty() && !out.ends_with(':') {
        out.push(':');
    }
    out.push_str(segment);
    if !out.ends_with(':') {
        out.push(':');
    }
    out
}
