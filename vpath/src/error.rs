//! Error types for the vpath library.
//!
//! Every fallible operation in the crate returns [`Result`]. The engine
//! itself only ever fails in three ways (see [`ErrorKind`]); the remaining
//! variants come from the configuration layer and the CLI's file access.

use std::collections::TryReserveError;
use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a vpath error.
///
/// # Examples
///
/// ```
/// use vpath::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok(":boot:tmp:".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the vpath library.
#[derive(Debug, Error)]
pub enum Error {
    /// A prefix token was malformed (for example `"99"` or `"123"`).
    #[error("bad prefix token '{token}'")]
    BadPrefix {
        /// The offending token.
        token: String,
    },

    /// A well-formed prefix has no entry in the prefix table.
    #[error("prefix {prefix} is not set")]
    UnresolvedPrefix {
        /// The token of the empty slot.
        prefix: String,
    },

    /// Growing a string buffer failed.
    #[error("out of memory while {context}")]
    OutOfMemory {
        /// What was being built when the allocation failed.
        context: &'static str,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

/// Coarse classification of an [`Error`].
///
/// `BadPrefix`, `UnresolvedPrefix` and `OutOfMemory` are the only kinds the
/// path engine produces; `Config` and `Io` come from the layers around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed prefix token.
    BadPrefix,
    /// Valid prefix token with no table entry.
    UnresolvedPrefix,
    /// Allocation failure during expansion or serialization.
    OutOfMemory,
    /// Configuration could not be loaded or failed validation.
    Config,
    /// Filesystem access failed.
    Io,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadPrefix => write!(f, "bad-prefix"),
            Self::UnresolvedPrefix => write!(f, "unresolved-prefix"),
            Self::OutOfMemory => write!(f, "out-of-memory"),
            Self::Config => write!(f, "config"),
            Self::Io => write!(f, "io"),
        }
    }
}

impl Error {
    /// Returns the classification of this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::{Error, ErrorKind};
    ///
    /// let err = Error::BadPrefix { token: "99".into() };
    /// assert_eq!(err.kind(), ErrorKind::BadPrefix);
    /// ```
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::BadPrefix { .. } => ErrorKind::BadPrefix,
            Self::UnresolvedPrefix { .. } => ErrorKind::UnresolvedPrefix,
            Self::OutOfMemory { .. } => ErrorKind::OutOfMemory,
            Self::Configuration(_) | Self::Validation { .. } => ErrorKind::Config,
            Self::InvalidPath { .. } | Self::Io(_) => ErrorKind::Io,
        }
    }

    /// Check if the error came from the path engine rather than the
    /// configuration or I/O layers.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::Error;
    ///
    /// let err = Error::UnresolvedPrefix { prefix: "12".into() };
    /// assert!(err.is_engine_error());
    /// ```
    #[must_use]
    pub fn is_engine_error(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::BadPrefix | ErrorKind::UnresolvedPrefix | ErrorKind::OutOfMemory
        )
    }

    pub(crate) fn out_of_memory(context: &'static str) -> impl FnOnce(TryReserveError) -> Self {
        move |_| Self::OutOfMemory { context }
    }
}
