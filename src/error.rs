use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the brand story rewrite
#[derive(Error, Debug)]
pub enum RewriteError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl RewriteError {
    /// Create a new read error with path context
    pub fn read_error(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Read {
            source: err,
            path: path.into(),
        }
    }

    /// Create a new write error with path context
    pub fn write_error(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Write {
            source: err,
            path: path.into(),
        }
    }

    /// Short machine-readable name of the failure, used as a log field
    pub fn kind(&self) -> ErrorKind {
        match self {
            RewriteError::Read { .. } => ErrorKind::Read,
            RewriteError::Write { .. } => ErrorKind::Write,
            RewriteError::Pattern(_) => ErrorKind::Pattern,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Read,
    Write,
    Pattern,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Read => "read_error",
            ErrorKind::Write => "write_error",
            ErrorKind::Pattern => "pattern_error",
        };
        f.write_str(name)
    }
}

/// Result type for rewrite operations
pub type RewriteResult<T> = Result<T, RewriteError>;
