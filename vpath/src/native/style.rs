//! OS path-style descriptors.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Family of native path syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StyleKind {
    /// macOS and iOS: `/` separated, other volumes under `/Volumes`.
    Darwin,
    /// Linux and other Unix systems: `/` separated, other volumes under a
    /// configurable mount directory.
    Unix,
    /// Windows: `\` separated, drive letters and `\\server` network roots.
    Windows,
}

impl StyleKind {
    /// The style of the target this crate was compiled for.
    #[must_use]
    pub const fn host() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else if cfg!(any(target_os = "macos", target_os = "ios")) {
            Self::Darwin
        } else {
            Self::Unix
        }
    }

    /// Parses a style name. `host` selects [`StyleKind::host`].
    ///
    /// # Errors
    ///
    /// Returns a validation error for unknown names.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::StyleKind;
    ///
    /// assert_eq!(StyleKind::parse("Darwin").unwrap(), StyleKind::Darwin);
    /// assert_eq!(StyleKind::parse("host").unwrap(), StyleKind::host());
    /// assert!(StyleKind::parse("vms").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "darwin" | "macos" => Ok(Self::Darwin),
            "unix" | "linux" => Ok(Self::Unix),
            "windows" => Ok(Self::Windows),
            "host" => Ok(Self::host()),
            _ => Err(Error::Validation {
                field: "style".to_string(),
                message: format!("unknown path style '{s}'"),
            }),
        }
    }

    /// Native directory separator.
    #[must_use]
    pub const fn separator(self) -> char {
        match self {
            Self::Darwin | Self::Unix => '/',
            Self::Windows => '\\',
        }
    }

    /// Directory under which non-boot volumes are mounted by default.
    #[must_use]
    pub const fn default_mount_prefix(self) -> &'static str {
        match self {
            Self::Darwin => "/Volumes",
            Self::Unix => "/mnt",
            Self::Windows => "",
        }
    }

    /// Name the host reports for its boot volume when nothing else is known.
    #[must_use]
    pub const fn default_boot_volume(self) -> &'static str {
        match self {
            Self::Darwin => "Macintosh HD",
            Self::Unix => "boot_volume",
            Self::Windows => "C",
        }
    }
}

impl fmt::Display for StyleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Darwin => write!(f, "darwin"),
            Self::Unix => write!(f, "unix"),
            Self::Windows => write!(f, "windows"),
        }
    }
}

/// The descriptor the shared serializer and parser are parameterized by.
///
/// # Examples
///
/// ```
/// use vpath::{PathStyle, StyleKind};
///
/// let style = PathStyle::unix().with_mount_prefix("/media/");
/// assert_eq!(style.kind(), StyleKind::Unix);
/// assert_eq!(style.mount_prefix(), "/media");
/// assert_eq!(PathStyle::darwin().mount_prefix(), "/Volumes");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathStyle {
    kind: StyleKind,
    mount_prefix: String,
}

impl PathStyle {
    /// Creates the descriptor for `kind` with its default mount prefix.
    #[must_use]
    pub fn new(kind: StyleKind) -> Self {
        Self {
            kind,
            mount_prefix: kind.default_mount_prefix().to_string(),
        }
    }

    /// macOS / iOS descriptor.
    #[must_use]
    pub fn darwin() -> Self {
        Self::new(StyleKind::Darwin)
    }

    /// Generic Unix descriptor.
    #[must_use]
    pub fn unix() -> Self {
        Self::new(StyleKind::Unix)
    }

    /// Windows descriptor.
    #[must_use]
    pub fn windows() -> Self {
        Self::new(StyleKind::Windows)
    }

    /// Descriptor for the compilation target.
    #[must_use]
    pub fn host() -> Self {
        Self::new(StyleKind::host())
    }

    /// Overrides the mount prefix. Trailing separators are dropped.
    /// Windows ignores the mount prefix.
    #[must_use]
    pub fn with_mount_prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        self.mount_prefix = prefix.trim_end_matches('/').to_string();
        self
    }

    /// The path family.
    #[must_use]
    pub const fn kind(&self) -> StyleKind {
        self.kind
    }

    /// Native directory separator.
    #[must_use]
    pub const fn separator(&self) -> char {
        self.kind.separator()
    }

    /// Directory under which non-boot volumes appear.
    #[must_use]
    pub fn mount_prefix(&self) -> &str {
        &self.mount_prefix
    }
}

impl Default for PathStyle {
    fn default() -> Self {
        Self::host()
    }
}
