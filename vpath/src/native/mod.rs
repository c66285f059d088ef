//! Translation between expanded virtual paths and native OS paths.
//!
//! Both directions share one core: a caller-chosen head is copied verbatim
//! and the body is copied with its delimiter mapped (`:` to the native
//! separator when serializing, native separators to `:` when parsing). The
//! OS backends only decide what the head and body are:
//!
//! - [`posix`] covers Darwin and Unix. The boot volume is rooted at `/` and
//!   every other volume lives under the style's mount prefix
//!   (`/Volumes/Data/...`).
//! - [`windows`] uses drive letters for known volumes and `\\name\...`
//!   network roots for the rest.
//!
//! # Examples
//!
//! ```
//! use vpath::{native, BootVolume, PathContext, PathStyle};
//!
//! let ctx = PathContext::builder()
//!     .style(PathStyle::darwin())
//!     .boot(BootVolume::new("boot").unwrap())
//!     .build();
//!
//! assert_eq!(native::to_native(":boot:foo:bar.txt:", &ctx).unwrap(), "/foo/bar.txt");
//! assert_eq!(native::to_native(":bootExtra:file:", &ctx).unwrap(), "/Volumes/bootExtra/file");
//! assert_eq!(native::from_native("/Volumes/boot/foo/bar.txt", &ctx).unwrap(), ":boot:foo:bar.txt:");
//! ```

pub mod posix;
mod style;
mod volume;
pub mod windows;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use style::{PathStyle, StyleKind};
pub use volume::{BootVolume, BootVolumeSource, HostBootVolume, VolumeTable, BOOT_DRIVE, DRIVE_COUNT};

#[cfg(test)]
pub(crate) use volume::MockBootVolumeSource;

pub(crate) use volume::drive_letter;

use crate::buffer;
use crate::context::PathContext;
use crate::error::Result;

/// Renders an expanded virtual path in the context's native style.
///
/// # Errors
///
/// Returns [`Error::OutOfMemory`](crate::Error::OutOfMemory) if the output
/// buffer cannot be allocated.
pub fn to_native(expanded: &str, ctx: &PathContext) -> Result<String> {
    render_in(expanded, ctx.style(), ctx.boot(), ctx.volumes())
}

/// Parses a native path in the context's style into a virtual path.
///
/// Empty input is the current directory.
///
/// # Errors
///
/// Returns [`Error::OutOfMemory`](crate::Error::OutOfMemory) if the output
/// buffer cannot be allocated.
pub fn from_native(native: &str, ctx: &PathContext) -> Result<String> {
    parse_in(native, ctx.style(), ctx.boot())
}

pub(crate) fn render_in(
    expanded: &str,
    style: &PathStyle,
    boot: &BootVolume,
    volumes: &VolumeTable,
) -> Result<String> {
    let native = match style.kind() {
        StyleKind::Darwin | StyleKind::Unix => posix::render(expanded, style, boot, volumes),
        StyleKind::Windows => windows::render(expanded, boot, volumes),
    }?;
    log::debug!("{expanded:?} -> {native:?}");
    Ok(native)
}

pub(crate) fn parse_in(native: &str, style: &PathStyle, boot: &BootVolume) -> Result<String> {
    let virtual_path = match style.kind() {
        StyleKind::Darwin | StyleKind::Unix => posix::parse(native, style, boot),
        StyleKind::Windows => windows::parse(native, boot),
    }?;
    log::debug!("{native:?} <- {virtual_path:?}");
    Ok(virtual_path)
}

/// Copies `head` verbatim and `body` with `map` applied to every char.
///
/// `map` must send ASCII to ASCII so the pre-computed length holds; one
/// spare byte is reserved for a closing delimiter.
pub(crate) fn assemble(
    head: &[&str],
    body: &str,
    map: impl Fn(char) -> char,
    context: &'static str,
) -> Result<String> {
    let len = head.iter().map(|piece| piece.len()).sum::<usize>() + body.len() + 1;
    let mut out = buffer::sized(len, context)?;
    for piece in head {
        out.push_str(piece);
    }
    out.extend(body.chars().map(map));
    Ok(out)
}
