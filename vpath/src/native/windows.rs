//! Windows path rendering and parsing.
//!
//! Volumes listed in the [`VolumeTable`] render as drive letters, as does
//! the boot volume (on [`BOOT_DRIVE`] unless listed elsewhere). Any other
//! volume name is treated as a server and rendered as a UNC path.

use crate::error::Result;
use crate::native::{assemble, drive_letter, BootVolume, VolumeTable, BOOT_DRIVE};
use crate::path::{drive_number, drive_root_len};

const SEP: char = '\\';

/// Renders an expanded virtual path as a Windows path.
///
/// | Virtual | Native |
/// |---------|--------|
/// | `.D2:foo:` | `C:\foo` |
/// | `.D2:` | `C:\` |
/// | `:Data:x:` (Data on drive 3) | `D:\x` |
/// | `:server:share:x:` | `\\server\share\x` |
///
/// A trailing `\` is trimmed unless the result is a bare drive root.
///
/// # Errors
///
/// Returns [`Error::OutOfMemory`](crate::Error::OutOfMemory) if the output
/// buffer cannot be allocated.
pub fn render(expanded: &str, boot: &BootVolume, volumes: &VolumeTable) -> Result<String> {
    let mut out = if let Some(after) = expanded.strip_prefix(':') {
        let name_end = after.find(':').unwrap_or(after.len());
        let (name, rest) = after.split_at(name_end);
        let drive = volumes
            .drive_of(name)
            .or_else(|| boot.is_named(name).then_some(BOOT_DRIVE))
            .and_then(|drive| drive_letter(u32::from(drive)));
        match drive {
            Some(letter) => assemble(&[drive_root(letter).as_str()], rest, map, CONTEXT)?,
            None => assemble(&["\\\\", name], rest, map, CONTEXT)?,
        }
    } else if let Some(root_len) = drive_root_len(expanded) {
        let rest = &expanded[root_len - 1..];
        match drive_number(expanded).and_then(drive_letter) {
            Some(letter) => assemble(&[drive_root(letter).as_str()], rest, map, CONTEXT)?,
            None => assemble(&["\\\\", &expanded[..root_len - 1]], rest, map, CONTEXT)?,
        }
    } else {
        assemble(&[], expanded, map, CONTEXT)?
    };

    if is_drive_root(&out) {
        if out.len() == 2 {
            out.push(SEP);
        }
    } else if out.ends_with(SEP) && out.len() > 1 {
        out.pop();
    }
    Ok(out)
}

/// Parses a Windows path into a virtual path ending in a colon.
///
/// Both `\` and `/` are accepted as separators.
///
/// - `\\server\share\x` becomes `:server:share:x:`.
/// - `C:\foo` becomes `.D2:foo:`.
/// - A rooted `\foo` is placed on the boot volume.
/// - Relative input (a leading `.\` is dropped) goes under prefix `8:`.
///
/// # Errors
///
/// Returns [`Error::OutOfMemory`](crate::Error::OutOfMemory) if the output
/// buffer cannot be allocated.
///
/// # Examples
///
/// ```
/// use vpath::native::windows;
/// use vpath::BootVolume;
///
/// let boot = BootVolume::new("C").unwrap();
/// assert_eq!(windows::parse("C:\\Users\\me", &boot).unwrap(), ".D2:Users:me:");
/// assert_eq!(windows::parse("\\\\nas\\media", &boot).unwrap(), ":nas:media:");
/// assert_eq!(windows::parse("\\Temp", &boot).unwrap(), ":C:Temp:");
/// assert_eq!(windows::parse("docs\\a.txt", &boot).unwrap(), "8:docs:a.txt:");
/// ```
pub fn parse(native: &str, boot: &BootVolume) -> Result<String> {
    let input = if native.is_empty() { ".\\" } else { native };
    let bytes = input.as_bytes();

    let mut out = if bytes.len() >= 2 && is_sep(bytes[0]) && is_sep(bytes[1]) {
        assemble(&[":"], &input[2..], unmap, PARSE_CONTEXT)?
    } else if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        let drive = (bytes[0].to_ascii_uppercase() - b'A').to_string();
        let rest = &input[2..];
        let rest = rest
            .strip_prefix(|c: char| c == '\\' || c == '/')
            .unwrap_or(rest);
        assemble(&[".D", &drive, ":"], rest, unmap, PARSE_CONTEXT)?
    } else if is_sep(bytes[0]) {
        assemble(&[":", boot.name(), ":"], &input[1..], unmap, PARSE_CONTEXT)?
    } else {
        let rest = input
            .strip_prefix(".\\")
            .or_else(|| input.strip_prefix("./"))
            .unwrap_or(input);
        assemble(&["8:"], rest, unmap, PARSE_CONTEXT)?
    };

    if !out.ends_with(':') {
        out.push(':');
    }
    Ok(out)
}

const CONTEXT: &str = "rendering a Windows path";
const PARSE_CONTEXT: &str = "parsing a Windows path";

fn map(c: char) -> char {
    if c == ':' {
        SEP
    } else {
        c
    }
}

fn unmap(c: char) -> char {
    if c == '\\' || c == '/' {
        ':'
    } else {
        c
    }
}

fn is_sep(b: u8) -> bool {
    b == b'\\' || b == b'/'
}

fn drive_root(letter: char) -> String {
    format!("{letter}:")
}

/// `X:` or `X:\`.
fn is_drive_root(path: &str) -> bool {
    let b = path.as_bytes();
    (b.len() == 2 || (b.len() == 3 && b[2] == b'\\')) && b[0].is_ascii_uppercase() && b[1] == b':'
}
