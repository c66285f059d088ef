//! Boot volume identity and the mounted volume table.

use crate::error::{Error, Result};
use crate::native::StyleKind;

/// Number of drive letters, `A` through `Z`.
pub const DRIVE_COUNT: u8 = 26;

/// Drive number the Windows boot volume falls back to (`C:`).
pub const BOOT_DRIVE: u8 = 2;

/// Identity of the volume the system booted from.
///
/// Paths on this volume render without a volume segment: with a boot
/// volume named `boot`, `:boot:etc:hosts:` is `/etc/hosts`.
///
/// # Examples
///
/// ```
/// use vpath::BootVolume;
///
/// let boot = BootVolume::new("boot").unwrap();
/// assert_eq!(boot.name(), "boot");
/// assert_eq!(boot.len(), 4);
/// assert!(BootVolume::new("bad:name").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootVolume {
    name: String,
}

impl BootVolume {
    /// Creates a boot volume identity.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `name` is empty or contains a colon.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_volume_name("boot_volume", &name)?;
        Ok(Self { name })
    }

    /// The conventional boot volume name for `kind`.
    #[must_use]
    pub fn default_for(kind: StyleKind) -> Self {
        Self {
            name: kind.default_boot_volume().to_string(),
        }
    }

    /// The volume name, without colons.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Length of the name in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.name.len()
    }

    /// Always false; an identity cannot be built from an empty name.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }

    /// Whether `after_colon` (a qualified path with its leading colon
    /// removed) starts on this volume.
    ///
    /// The first [`len`](Self::len) bytes are compared ASCII
    /// case-insensitively and the byte after them must be a colon, so
    /// `boot` never matches `bootExtra:`.
    #[must_use]
    pub fn starts(&self, after_colon: &str) -> bool {
        let name = self.name.as_bytes();
        let path = after_colon.as_bytes();
        path.len() > name.len()
            && path[..name.len()].eq_ignore_ascii_case(name)
            && path[name.len()] == b':'
    }

    /// Whether `volume` names this volume, ignoring ASCII case.
    #[must_use]
    pub fn is_named(&self, volume: &str) -> bool {
        self.name.eq_ignore_ascii_case(volume)
    }
}

/// Supplier of the boot volume identity.
#[cfg_attr(test, mockall::automock)]
pub trait BootVolumeSource {
    /// Reports the boot volume.
    ///
    /// # Errors
    ///
    /// Implementations report failures to determine the identity.
    fn boot_volume(&self) -> Result<BootVolume>;
}

/// Boot volume source for the running host.
///
/// Most hosts have no portable way to name the boot volume, so this
/// reports the conventional name for the host's path style.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostBootVolume;

impl BootVolumeSource for HostBootVolume {
    fn boot_volume(&self) -> Result<BootVolume> {
        Ok(BootVolume::default_for(StyleKind::host()))
    }
}

impl BootVolumeSource for BootVolume {
    fn boot_volume(&self) -> Result<BootVolume> {
        Ok(self.clone())
    }
}

/// Mounted volumes and their drive numbers (`0` is `A:`).
///
/// Windows renders listed volumes as drive letters; the POSIX styles use
/// the table to turn `.Dnn:` roots back into volume names.
///
/// # Examples
///
/// ```
/// use vpath::VolumeTable;
///
/// let mut volumes = VolumeTable::new();
/// volumes.insert("Data", 3).unwrap();
/// assert_eq!(volumes.drive_of("data"), Some(3));
/// assert_eq!(volumes.name_of(3), Some("Data"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VolumeTable {
    entries: Vec<(String, u8)>,
}

impl VolumeTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a volume.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the name is empty or has a colon, the
    /// drive is not below [`DRIVE_COUNT`], or the name or drive is taken.
    pub fn insert(&mut self, name: impl Into<String>, drive: u8) -> Result<()> {
        let name = name.into();
        validate_volume_name("volumes", &name)?;
        if drive >= DRIVE_COUNT {
            return Err(Error::Validation {
                field: "volumes".to_string(),
                message: format!("drive {drive} for '{name}' is out of range (0-25)"),
            });
        }
        if self.drive_of(&name).is_some() || self.name_of(drive).is_some() {
            return Err(Error::Validation {
                field: "volumes".to_string(),
                message: format!("volume '{name}' or drive {drive} is listed twice"),
            });
        }
        self.entries.push((name, drive));
        Ok(())
    }

    /// Drive number of `name`, ignoring ASCII case.
    #[must_use]
    pub fn drive_of(&self, name: &str) -> Option<u8> {
        self.entries
            .iter()
            .find(|(entry, _)| entry.eq_ignore_ascii_case(name))
            .map(|(_, drive)| *drive)
    }

    /// Volume name mounted at `drive`.
    #[must_use]
    pub fn name_of(&self, drive: u8) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, d)| *d == drive)
            .map(|(name, _)| name.as_str())
    }

    /// Iterates over `(name, drive)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.entries.iter().map(|(name, drive)| (name.as_str(), *drive))
    }

    /// Number of volumes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Drive letter for a drive number below [`DRIVE_COUNT`].
pub(crate) fn drive_letter(drive: u32) -> Option<char> {
    u8::try_from(drive)
        .ok()
        .filter(|d| *d < DRIVE_COUNT)
        .map(|d| char::from(b'A' + d))
}

fn validate_volume_name(field: &str, name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::Validation {
            field: field.to_string(),
            message: "volume name must not be empty".to_string(),
        });
    }
    if name.contains(':') {
        return Err(Error::Validation {
            field: field.to_string(),
            message: format!("volume name '{name}' must not contain ':'"),
        });
    }
    Ok(())
}
