//! The `Filename` entity: a virtual path with a cached native rendering.

use std::fmt;

use crate::context::PathContext;
use crate::error::Result;
use crate::native;
use crate::path;
use crate::prefix::PrefixId;

/// Lifecycle state of a [`Filename`]'s native cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilenameState {
    /// No virtual path and no cached native path.
    Empty,
    /// The virtual path changed since the native path was last computed.
    Dirty,
    /// The cached native path matches the virtual path.
    Clean,
}

/// A virtual path that owns its lazily computed native form.
///
/// Every mutator invalidates the cache; [`native`](Self::native) recomputes
/// it on demand and returns the cached value until the next mutation.
/// There is no internal locking: share a `Filename` across threads only
/// behind an external lock.
///
/// # Examples
///
/// ```
/// use vpath::{BootVolume, Filename, FilenameState, PathContext, PathStyle};
///
/// let ctx = PathContext::builder()
///     .style(PathStyle::darwin())
///     .boot(BootVolume::new("boot").unwrap())
///     .build();
///
/// let mut file = Filename::new(":boot:Users:me:notes.txt");
/// assert_eq!(file.state(), FilenameState::Dirty);
/// assert_eq!(file.native(&ctx).unwrap(), "/Users/me/notes.txt");
/// assert_eq!(file.state(), FilenameState::Clean);
///
/// file.set_file_extension("md");
/// assert_eq!(file.state(), FilenameState::Dirty);
/// assert_eq!(file.native(&ctx).unwrap(), "/Users/me/notes.md");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filename {
    path: String,
    native: String,
    native_valid: bool,
}

impl Filename {
    /// Creates a filename holding `path`, with no native path cached.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            native: String::new(),
            native_valid: false,
        }
    }

    /// The virtual path as currently stored.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// Whether the virtual path is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Replaces the virtual path.
    pub fn set(&mut self, path: &str) {
        self.path.clear();
        self.path.push_str(path);
        self.invalidate();
    }

    /// Empties the virtual path and drops the cache.
    pub fn clear(&mut self) {
        self.path.clear();
        self.native.clear();
        self.native_valid = false;
    }

    /// Appends a segment, keeping exactly one colon between the old path
    /// and `segment` and a colon at the end.
    pub fn append(&mut self, segment: &str) {
        if segment.is_empty() {
            return;
        }
        self.path = path::append(&self.path, segment);
        self.invalidate();
    }

    /// Resolves prefixes and ascent in place without rendering natively.
    ///
    /// # Errors
    ///
    /// Returns the expansion error; the path is unchanged on failure.
    pub fn expand(&mut self, ctx: &PathContext) -> Result<()> {
        self.path = path::expand(&self.path, ctx.prefixes())?;
        self.invalidate();
        Ok(())
    }

    /// Returns the native path, computing and caching it if needed.
    ///
    /// The virtual path itself is left as written; expansion happens on a
    /// scratch copy.
    ///
    /// # Errors
    ///
    /// Returns the expansion error, or
    /// [`Error::OutOfMemory`](crate::Error::OutOfMemory) if rendering fails
    /// to allocate. The cache stays invalid on failure.
    pub fn native(&mut self, ctx: &PathContext) -> Result<&str> {
        if !self.native_valid {
            let expanded = path::expand(&self.path, ctx.prefixes())?;
            self.native = native::to_native(&expanded, ctx)?;
            self.native_valid = true;
        }
        Ok(&self.native)
    }

    /// The cached native path, if it is current.
    #[must_use]
    pub fn cached_native(&self) -> Option<&str> {
        self.native_valid.then_some(self.native.as_str())
    }

    /// Replaces the virtual path with the translation of `native`.
    ///
    /// `native` itself (or `./` when empty) becomes the cached native path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfMemory`](crate::Error::OutOfMemory) if the
    /// translation cannot be allocated; the filename is unchanged then.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::{BootVolume, Filename, PathContext, PathStyle};
    ///
    /// let ctx = PathContext::builder()
    ///     .style(PathStyle::darwin())
    ///     .boot(BootVolume::new("boot").unwrap())
    ///     .build();
    ///
    /// let mut file = Filename::default();
    /// file.set_from_native("/Volumes/boot/foo/bar.txt", &ctx).unwrap();
    /// assert_eq!(file.as_str(), ":boot:foo:bar.txt:");
    /// assert!(file.is_native_valid());
    /// ```
    pub fn set_from_native(&mut self, native: &str, ctx: &PathContext) -> Result<()> {
        self.path = native::from_native(native, ctx)?;
        self.native.clear();
        self.native
            .push_str(if native.is_empty() { "./" } else { native });
        self.native_valid = true;
        Ok(())
    }

    /// Removes the last segment, leaving the parent directory.
    pub fn dirname(&mut self) {
        let parent_len = path::dirname(&self.path).len();
        self.path.truncate(parent_len);
        self.invalidate();
    }

    /// The parent directory, leaving `self` untouched.
    #[must_use]
    pub fn dirname_string(&self) -> String {
        path::dirname(&self.path).to_string()
    }

    /// The last segment with no colons.
    #[must_use]
    pub fn basename(&self) -> String {
        self.file_name().to_string()
    }

    /// The last segment, borrowed.
    #[must_use]
    pub fn file_name(&self) -> &str {
        path::file_name(&self.path)
    }

    /// The extension of the last segment, without its period.
    #[must_use]
    pub fn file_extension(&self) -> &str {
        path::file_extension(&self.path)
    }

    /// Replaces, adds or (with `""`) removes the extension.
    pub fn set_file_extension(&mut self, extension: &str) {
        self.path = path::set_file_extension(&self.path, extension);
        self.invalidate();
    }

    /// Whether the path begins at a volume.
    #[must_use]
    pub fn is_full_pathname(&self) -> bool {
        path::is_full_pathname(&self.path)
    }

    /// Whether the path has neither volume nor prefix.
    #[must_use]
    pub fn is_filename_only(&self) -> bool {
        path::is_filename_only(&self.path)
    }

    /// The explicit prefix the path starts with, if any.
    #[must_use]
    pub fn prefix_number(&self) -> Option<PrefixId> {
        path::prefix_of(&self.path)
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> FilenameState {
        if self.native_valid {
            FilenameState::Clean
        } else if self.path.is_empty() {
            FilenameState::Empty
        } else {
            FilenameState::Dirty
        }
    }

    /// Whether the cached native path is current.
    #[must_use]
    pub fn is_native_valid(&self) -> bool {
        self.native_valid
    }

    fn invalidate(&mut self) {
        self.native_valid = false;
    }
}

impl From<&str> for Filename {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for Filename {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

impl AsRef<str> for Filename {
    fn as_ref(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for Filename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::native::{BootVolume, PathStyle};
    use crate::prefix::PrefixTable;

    fn ctx() -> PathContext {
        let mut prefixes = PrefixTable::new();
        prefixes.set(PrefixId::CURRENT, ":boot:current:deep:").unwrap();
        prefixes.set(PrefixId::BOOT, ":boot:").unwrap();
        PathContext::builder()
            .style(PathStyle::darwin())
            .boot(BootVolume::new("boot").unwrap())
            .prefixes(prefixes)
            .build()
    }

    #[test]
    fn test_lifecycle() {
        let ctx = ctx();
        let mut file = Filename::default();
        assert_eq!(file.state(), FilenameState::Empty);

        file.set(":boot:a:");
        assert_eq!(file.state(), FilenameState::Dirty);
        assert_eq!(file.cached_native(), None);

        assert_eq!(file.native(&ctx).unwrap(), "/a");
        assert_eq!(file.state(), FilenameState::Clean);
        assert_eq!(file.cached_native(), Some("/a"));

        file.append("b");
        assert_eq!(file.state(), FilenameState::Dirty);
        assert_eq!(file.native(&ctx).unwrap(), "/a/b");

        file.clear();
        assert_eq!(file.state(), FilenameState::Empty);
    }

    #[test]
    fn test_native_is_cached() {
        let ctx = ctx();
        let mut file = Filename::new(":boot:x:y:");
        let first = file.native(&ctx).unwrap().as_ptr();
        let second = file.native(&ctx).unwrap().as_ptr();
        assert_eq!(first, second);
    }

    #[test]
    fn test_native_leaves_virtual_path() {
        let ctx = ctx();
        let mut file = Filename::new("8:..:PrevDir:File:");
        assert_eq!(file.native(&ctx).unwrap(), "/current/PrevDir/File");
        assert_eq!(file.as_str(), "8:..:PrevDir:File:");
    }

    #[test]
    fn test_expand_in_place() {
        let ctx = ctx();
        let mut file = Filename::new("8:..:PrevDir:File:");
        file.expand(&ctx).unwrap();
        assert_eq!(file.as_str(), ":boot:current:PrevDir:File:");
        assert!(!file.is_native_valid());
    }

    #[test]
    fn test_failed_native_stays_dirty() {
        let ctx = ctx();
        let mut file = Filename::new("12:nothing");
        let err = file.native(&ctx).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnresolvedPrefix);
        assert_eq!(file.state(), FilenameState::Dirty);

        let mut bad = Filename::new("77:x");
        assert_eq!(bad.expand(&ctx).unwrap_err().kind(), ErrorKind::BadPrefix);
        assert_eq!(bad.as_str(), "77:x");
    }

    #[test]
    fn test_set_from_native_caches_input() {
        let ctx = ctx();
        let mut file = Filename::new(":old:");
        file.set_from_native("/usr/local/bin", &ctx).unwrap();
        assert_eq!(file.as_str(), ":boot:usr:local:bin:");
        assert_eq!(file.state(), FilenameState::Clean);
        assert_eq!(file.native(&ctx).unwrap(), "/usr/local/bin");
    }

    #[test]
    fn test_set_from_native_empty() {
        let ctx = ctx();
        let mut file = Filename::default();
        file.set_from_native("", &ctx).unwrap();
        assert_eq!(file.as_str(), "8:");
        assert_eq!(file.cached_native(), Some("./"));
    }

    #[test]
    fn test_clone_is_independent() {
        let ctx = ctx();
        let mut original = Filename::new(":boot:a:");
        original.native(&ctx).unwrap();
        let mut copy = original.clone();
        assert_eq!(copy, original);
        assert!(copy.is_native_valid());

        copy.append("b");
        assert!(original.is_native_valid());
        assert_eq!(original.as_str(), ":boot:a:");
        assert_eq!(copy.as_str(), ":boot:a:b:");
    }

    #[test]
    fn test_dirname_and_names() {
        let mut file = Filename::new(":boot:docs:report.txt:");
        assert_eq!(file.file_name(), "report.txt");
        assert_eq!(file.basename(), "report.txt");
        assert_eq!(file.file_extension(), "txt");
        assert_eq!(file.dirname_string(), ":boot:docs:");

        file.dirname();
        assert_eq!(file.as_str(), ":boot:docs:");
        file.dirname();
        assert_eq!(file.as_str(), ":boot:");
        file.dirname();
        assert_eq!(file.as_str(), ":boot:");
    }

    #[test]
    fn test_extension_edit_invalidates() {
        let ctx = ctx();
        let mut file = Filename::new(":boot:a.txt");
        file.native(&ctx).unwrap();
        file.set_file_extension(".rs");
        assert!(!file.is_native_valid());
        assert_eq!(file.as_str(), ":boot:a.rs:");
    }

    #[test]
    fn test_queries() {
        assert!(Filename::new(":foo:bar").is_full_pathname());
        assert!(Filename::new("temp.txt").is_filename_only());
        assert_eq!(
            Filename::new("20:twenty.txt").prefix_number(),
            PrefixId::new(20).ok()
        );
        assert_eq!(Filename::from("a").to_string(), "a");
    }
}
