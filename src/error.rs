//! Global error handling for dirusage
//!
//! Every failure the scanners can hit is fatal: it is carried back up through
//! each recursive frame as a `DirUsageError` and turned into a process exit
//! status by the binary.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Global error type for dirusage operations
#[derive(Error, Debug)]
pub enum DirUsageError {
    /// Metadata for a path could not be read
    #[error("lstat: {}", system_message(.source))]
    PathInaccessible {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A directory could not be opened or read to the end
    #[error("opendir: {}", system_message(.source))]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing the report failed
    #[error("write: {}", system_message(.0))]
    Io(#[from] io::Error),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl DirUsageError {
    /// Path the error refers to, if any
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::PathInaccessible { path, .. } | Self::DirectoryUnreadable { path, .. } => {
                Some(path)
            }
            Self::Io(_) | Self::InvalidArgument(_) => None,
        }
    }
}

/// Specialized Result type for dirusage operations
pub type Result<T> = std::result::Result<T, DirUsageError>;

/// OS description of an error, without std's `(os error N)` suffix
pub fn system_message(err: &io::Error) -> String {
    let text = err.to_string();
    match err.raw_os_error() {
        Some(code) => text
            .strip_suffix(&format!(" (os error {})", code))
            .map(str::to_string)
            .unwrap_or(text),
        None => text,
    }
}
