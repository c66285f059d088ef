//! The immutable configuration shared by every translation.
//!
//! A [`PathContext`] bundles what the expander, serializer and parser read:
//! the prefix table, the boot volume, the native path style and the volume
//! table. Build it once at startup and pass it by reference; nothing in the
//! crate mutates it afterwards, so a `&PathContext` may be shared freely
//! between threads.

use std::collections::BTreeMap;
use std::env;
use std::path::Path;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::native::{
    self, BootVolume, BootVolumeSource, HostBootVolume, PathStyle, StyleKind, VolumeTable,
};
use crate::prefix::{PrefixId, PrefixTable};

/// Read-only configuration for path translation.
///
/// # Examples
///
/// ```
/// use vpath::{BootVolume, Filename, PathContext, PathStyle, PrefixId, PrefixTable};
///
/// let mut prefixes = PrefixTable::new();
/// prefixes.set(PrefixId::CURRENT, ":boot:home:me:").unwrap();
///
/// let ctx = PathContext::builder()
///     .style(PathStyle::darwin())
///     .boot(BootVolume::new("boot").unwrap())
///     .prefixes(prefixes)
///     .build();
///
/// let mut file = Filename::new("notes:todo.txt");
/// assert_eq!(file.native(&ctx).unwrap(), "/home/me/notes/todo.txt");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathContext {
    prefixes: PrefixTable,
    boot: BootVolume,
    style: PathStyle,
    volumes: VolumeTable,
}

impl PathContext {
    /// Starts a builder with host defaults for style and boot volume and
    /// empty prefix and volume tables.
    #[must_use]
    pub fn builder() -> PathContextBuilder {
        PathContextBuilder::default()
    }

    /// Context for the running host: host style, host boot volume, and
    /// the prefixes [`host_prefixes`] can discover.
    ///
    /// # Errors
    ///
    /// Returns an error if a discovered directory cannot be expressed as a
    /// virtual path.
    pub fn host() -> Result<Self> {
        let style = PathStyle::host();
        let boot = HostBootVolume.boot_volume()?;
        let prefixes = host_prefixes(&style, &boot)?;
        Ok(Self::builder()
            .style(style)
            .boot(boot)
            .prefixes(prefixes)
            .build())
    }

    /// Builds a context from merged configuration.
    ///
    /// Prefixes are applied in ascending slot order, so an entry may refer
    /// to any lower slot. For a slot given both a virtual and a native
    /// value, the virtual one wins.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid volume names, drive numbers, prefix
    /// tokens, or prefix values that do not resolve.
    pub fn from_config(config: &Config) -> Result<Self> {
        let kind = config.style.unwrap_or_else(StyleKind::host);
        let mut style = PathStyle::new(kind);
        if let Some(prefix) = &config.volume_prefix {
            style = style.with_mount_prefix(prefix.as_str());
        }

        let boot = match &config.boot_volume {
            Some(name) => BootVolume::new(name.as_str())?,
            None => BootVolume::default_for(kind),
        };

        let mut volumes = VolumeTable::new();
        for volume in config.volumes.iter().flatten() {
            volumes.insert(volume.name.as_str(), volume.drive)?;
        }

        let mut prefixes = if config.host_defaults.unwrap_or(true) {
            host_prefixes(&style, &boot)?
        } else {
            PrefixTable::new()
        };

        let mut entries: BTreeMap<PrefixId, String> = BTreeMap::new();
        for (token, native_path) in config.native_prefixes.iter().flatten() {
            let id = token_to_id(token)?;
            entries.insert(id, native::parse_in(native_path, &style, &boot)?);
        }
        for (token, virtual_path) in config.prefixes.iter().flatten() {
            entries.insert(token_to_id(token)?, virtual_path.clone());
        }
        for (id, value) in &entries {
            prefixes.set(*id, value)?;
        }

        Ok(Self {
            prefixes,
            boot,
            style,
            volumes,
        })
    }

    /// The prefix table.
    #[must_use]
    pub fn prefixes(&self) -> &PrefixTable {
        &self.prefixes
    }

    /// The boot volume identity.
    #[must_use]
    pub fn boot(&self) -> &BootVolume {
        &self.boot
    }

    /// The native path style.
    #[must_use]
    pub fn style(&self) -> &PathStyle {
        &self.style
    }

    /// The mounted volume table.
    #[must_use]
    pub fn volumes(&self) -> &VolumeTable {
        &self.volumes
    }
}

impl Default for PathContext {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Builder for [`PathContext`].
#[derive(Debug, Clone, Default)]
pub struct PathContextBuilder {
    prefixes: PrefixTable,
    boot: Option<BootVolume>,
    style: Option<PathStyle>,
    volumes: VolumeTable,
}

impl PathContextBuilder {
    /// Sets the native path style.
    #[must_use]
    pub fn style(mut self, style: PathStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Sets the boot volume.
    #[must_use]
    pub fn boot(mut self, boot: BootVolume) -> Self {
        self.boot = Some(boot);
        self
    }

    /// Sets the boot volume reported by `source`.
    ///
    /// # Errors
    ///
    /// Returns whatever the source reports.
    pub fn boot_from(mut self, source: &dyn BootVolumeSource) -> Result<Self> {
        self.boot = Some(source.boot_volume()?);
        Ok(self)
    }

    /// Sets the prefix table.
    #[must_use]
    pub fn prefixes(mut self, prefixes: PrefixTable) -> Self {
        self.prefixes = prefixes;
        self
    }

    /// Sets the volume table.
    #[must_use]
    pub fn volumes(mut self, volumes: VolumeTable) -> Self {
        self.volumes = volumes;
        self
    }

    /// Finishes the context. A missing boot volume defaults to the
    /// conventional name for the chosen style.
    #[must_use]
    pub fn build(self) -> PathContext {
        let style = self.style.unwrap_or_default();
        let boot = self
            .boot
            .unwrap_or_else(|| BootVolume::default_for(style.kind()));
        PathContext {
            prefixes: self.prefixes,
            boot,
            style,
            volumes: self.volumes,
        }
    }
}

/// Discovers the host's standard prefixes.
///
/// - `*` is the boot volume root.
/// - `8` is the current directory.
/// - `9` is the directory holding the running executable.
/// - `@` is the user's home directory.
///
/// Directories that cannot be determined are left unset. `$` has no host
/// default.
///
/// # Errors
///
/// Returns an error if a discovered directory is not valid UTF-8.
pub fn host_prefixes(style: &PathStyle, boot: &BootVolume) -> Result<PrefixTable> {
    let mut table = PrefixTable::new();
    table.set(PrefixId::BOOT, &format!(":{}:", boot.name()))?;

    let mut discovered = Vec::new();
    match env::current_dir() {
        Ok(dir) => discovered.push((PrefixId::CURRENT, dir)),
        Err(e) => log::warn!("current directory unavailable: {e}"),
    }
    match env::current_exe() {
        Ok(exe) => match exe.parent() {
            Some(dir) => discovered.push((PrefixId::APPLICATION, dir.to_path_buf())),
            None => log::warn!("executable {} has no parent directory", exe.display()),
        },
        Err(e) => log::warn!("executable path unavailable: {e}"),
    }
    match home::home_dir() {
        Some(dir) => discovered.push((PrefixId::PREFS, dir)),
        None => log::warn!("home directory unavailable"),
    }

    for (id, dir) in discovered {
        let virtual_path = native::parse_in(path_str(&dir)?, style, boot)?;
        table.set(id, &virtual_path)?;
    }
    Ok(table)
}

fn path_str(path: &Path) -> Result<&str> {
    path.to_str().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "not valid UTF-8".to_string(),
    })
}

fn token_to_id(token: &str) -> Result<PrefixId> {
    PrefixId::from_token(token).map_err(|_| Error::Validation {
        field: "prefixes".to_string(),
        message: format!("'{token}' is not a prefix token (0-31, $, *, @)"),
    })
}
