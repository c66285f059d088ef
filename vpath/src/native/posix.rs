//! Darwin and Unix path rendering and parsing.

use crate::error::Result;
use crate::native::{assemble, BootVolume, PathStyle, VolumeTable};
use crate::path::{drive_number, drive_root_len};

/// Renders an expanded virtual path as a POSIX path.
///
/// - `:boot:a:b:` on the boot volume becomes `/a/b`.
/// - `:Data:a:` on any other volume becomes `<mount prefix>/Data/a`.
/// - `.Dnn:a:` uses the volume mounted at drive `nn`, or the literal
///   segment `<mount prefix>/.Dnn/a` when no volume is listed.
///
/// Exactly one trailing separator is trimmed; the root `/` is kept.
///
/// # Errors
///
/// Returns [`Error::OutOfMemory`](crate::Error::OutOfMemory) if the output
/// buffer cannot be allocated.
pub fn render(
    expanded: &str,
    style: &PathStyle,
    boot: &BootVolume,
    volumes: &VolumeTable,
) -> Result<String> {
    let sep = style.separator();
    let mount = style.mount_prefix();

    let mut out = if let Some(after) = expanded.strip_prefix(':') {
        if boot.starts(after) {
            assemble(&[], &after[boot.len()..], |c| map(c, sep), CONTEXT)?
        } else {
            assemble(&[mount], expanded, |c| map(c, sep), CONTEXT)?
        }
    } else if let Some(root_len) = drive_root_len(expanded) {
        let rest = &expanded[root_len - 1..];
        let volume = drive_number(expanded)
            .and_then(|drive| u8::try_from(drive).ok())
            .and_then(|drive| volumes.name_of(drive));
        match volume {
            Some(name) if boot.is_named(name) => assemble(&[], rest, |c| map(c, sep), CONTEXT)?,
            Some(name) => assemble(&[mount, "/", name], rest, |c| map(c, sep), CONTEXT)?,
            None => assemble(
                &[mount, "/", &expanded[..root_len - 1]],
                rest,
                |c| map(c, sep),
                CONTEXT,
            )?,
        }
    } else {
        assemble(&[], expanded, |c| map(c, sep), CONTEXT)?
    };

    if out.len() > 1 && out.ends_with(sep) {
        out.pop();
    }
    Ok(out)
}

/// Parses a POSIX path into a virtual path ending in a colon.
///
/// - Relative input (a leading `./` is dropped) goes under prefix `8:`.
/// - `<mount prefix>/Data/...` becomes `:Data:...`.
/// - Any other absolute path is placed on the boot volume.
///
/// Empty input is treated as `./`.
///
/// # Errors
///
/// Returns [`Error::OutOfMemory`](crate::Error::OutOfMemory) if the output
/// buffer cannot be allocated.
///
/// # Examples
///
/// ```
/// use vpath::native::posix;
/// use vpath::{BootVolume, PathStyle};
///
/// let boot = BootVolume::new("boot").unwrap();
/// let style = PathStyle::darwin();
///
/// assert_eq!(posix::parse("/usr/bin", &style, &boot).unwrap(), ":boot:usr:bin:");
/// assert_eq!(posix::parse("/Volumes/Data/x", &style, &boot).unwrap(), ":Data:x:");
/// assert_eq!(posix::parse("./src/lib.rs", &style, &boot).unwrap(), "8:src:lib.rs:");
/// assert_eq!(posix::parse("", &style, &boot).unwrap(), "8:");
/// ```
pub fn parse(native: &str, style: &PathStyle, boot: &BootVolume) -> Result<String> {
    let sep = style.separator();
    let input = if native.is_empty() { "./" } else { native };

    let mut out = if !input.starts_with(sep) {
        let body = input.strip_prefix("./").unwrap_or(input);
        assemble(&["8:"], body, |c| unmap(c, sep), PARSE_CONTEXT)?
    } else if let Some(volume_path) = under_mount(input, style.mount_prefix()) {
        assemble(&[":"], volume_path, |c| unmap(c, sep), PARSE_CONTEXT)?
    } else {
        assemble(
            &[":", boot.name(), ":"],
            &input[sep.len_utf8()..],
            |c| unmap(c, sep),
            PARSE_CONTEXT,
        )?
    };

    if !out.ends_with(':') {
        out.push(':');
    }
    Ok(out)
}

const CONTEXT: &str = "rendering a POSIX path";
const PARSE_CONTEXT: &str = "parsing a POSIX path";

fn map(c: char, sep: char) -> char {
    if c == ':' {
        sep
    } else {
        c
    }
}

fn unmap(c: char, sep: char) -> char {
    if c == sep {
        ':'
    } else {
        c
    }
}

/// The text after `<mount>/`, if `input` names something under the mount
/// prefix.
fn under_mount<'a>(input: &'a str, mount: &str) -> Option<&'a str> {
    if mount.is_empty() {
        return None;
    }
    input
        .strip_prefix(mount)?
        .strip_prefix('/')
        .filter(|rest| !rest.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boot() -> BootVolume {
        BootVolume::new("boot").unwrap()
    }

    fn darwin(path: &str) -> String {
        render(path, &PathStyle::darwin(), &boot(), &VolumeTable::new()).unwrap()
    }

    fn darwin_parse(path: &str) -> String {
        parse(path, &PathStyle::darwin(), &boot()).unwrap()
    }

    #[test]
    fn test_boot_volume_rooted() {
        assert_eq!(darwin(":boot:foo:bar.txt:"), "/foo/bar.txt");
        assert_eq!(darwin(":BOOT:foo:"), "/foo");
        assert_eq!(darwin(":boot:"), "/");
    }

    #[test]
    fn test_boot_boundary() {
        assert_eq!(darwin(":bootExtra:file:"), "/Volumes/bootExtra/file");
        assert_eq!(darwin(":boo:file:"), "/Volumes/boo/file");
    }

    #[test]
    fn test_other_volumes() {
        assert_eq!(darwin(":Data:"), "/Volumes/Data");
        assert_eq!(darwin(":Data:a:b:"), "/Volumes/Data/a/b");
        let unix = PathStyle::unix();
        assert_eq!(
            render(":usb:x:", &unix, &boot(), &VolumeTable::new()).unwrap(),
            "/mnt/usb/x"
        );
    }

    #[test]
    fn test_trims_one_trailing_separator() {
        assert_eq!(darwin(":boot:a::"), "/a/");
        assert!(!darwin(":boot:a:").ends_with('/'));
    }

    #[test]
    fn test_drive_roots() {
        let mut volumes = VolumeTable::new();
        volumes.insert("boot", 2).unwrap();
        volumes.insert("Stick", 4).unwrap();
        let style = PathStyle::darwin();
        assert_eq!(
            render(".D2:etc:", &style, &boot(), &volumes).unwrap(),
            "/etc"
        );
        assert_eq!(
            render(".d4:x:", &style, &boot(), &volumes).unwrap(),
            "/Volumes/Stick/x"
        );
        assert_eq!(
            render(".D9:x:", &style, &boot(), &volumes).unwrap(),
            "/Volumes/.D9/x"
        );
    }

    #[test]
    fn test_parse_absolute() {
        assert_eq!(darwin_parse("/"), ":boot:");
        assert_eq!(darwin_parse("/foo/bar.txt"), ":boot:foo:bar.txt:");
        assert_eq!(darwin_parse("/foo/"), ":boot:foo:");
    }

    #[test]
    fn test_parse_volumes() {
        assert_eq!(darwin_parse("/Volumes/boot/foo/bar.txt"), ":boot:foo:bar.txt:");
        assert_eq!(darwin_parse("/Volumes/Data"), ":Data:");
        assert_eq!(darwin_parse("/Volumes/"), ":boot:Volumes:");
        assert_eq!(darwin_parse("/Volumes"), ":boot:Volumes:");
        assert_eq!(darwin_parse("/VolumesX/a"), ":boot:VolumesX:a:");
    }

    #[test]
    fn test_parse_relative() {
        assert_eq!(darwin_parse(""), "8:");
        assert_eq!(darwin_parse("./"), "8:");
        assert_eq!(darwin_parse("."), "8:.:");
        assert_eq!(darwin_parse("src/main.rs"), "8:src:main.rs:");
        assert_eq!(darwin_parse("./src"), "8:src:");
        assert_eq!(darwin_parse("../up"), "8:..:up:");
    }

    #[test]
    fn test_parse_unix_mount_prefix() {
        let style = PathStyle::unix().with_mount_prefix("/media");
        assert_eq!(parse("/media/usb/a", &style, &boot()).unwrap(), ":usb:a:");
        assert_eq!(parse("/mnt/usb/a", &style, &boot()).unwrap(), ":boot:mnt:usb:a:");
    }
}
