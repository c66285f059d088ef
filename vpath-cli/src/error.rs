//! CLI error type and exit codes.

use std::fmt;
use vpath::{Error as LibError, ErrorKind};

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Path engine error (bad or unresolved prefix, allocation failure).
    Library(LibError),

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// I/O error.
    Io(std::io::Error),

    /// Configuration error.
    Config(String),

    /// Semantic failure (e.g., a file failed validation).
    SemanticFailure(String),
}

impl CliError {
    /// Exit code for this error.
    ///
    /// - 0: Success (not an error)
    /// - 1: Semantic failure
    /// - 4: Invalid arguments
    /// - 5: I/O error
    /// - 6: Path engine error
    /// - 7: Configuration error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::SemanticFailure(_) => 1,
            CliError::InvalidArguments(_) => 4,
            CliError::Io(_) => 5,
            CliError::Library(_) => 6,
            CliError::Config(_) => 7,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
            CliError::SemanticFailure(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        match e.kind() {
            ErrorKind::Config => CliError::Config(e.to_string()),
            ErrorKind::Io => match e {
                LibError::Io(io) => CliError::Io(io),
                other => CliError::Io(std::io::Error::other(other.to_string())),
            },
            ErrorKind::BadPrefix | ErrorKind::UnresolvedPrefix | ErrorKind::OutOfMemory => {
                CliError::Library(e)
            }
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}
