//! Error types for building, persisting and querying an index.

use std::path::PathBuf;
use thiserror::Error;

/// A specialized Result type for index operations.
pub type Result<T, E = IndexError> = std::result::Result<T, E>;

/// Failure of a build, load or write call.
#[derive(Debug, Error)]
pub enum IndexError {
    /// A path that had to be read or written could not be.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The build root exists but is neither a directory nor a regular file.
    #[error("{} is neither a directory nor a regular file", path.display())]
    NotIndexable { path: PathBuf },

    /// The persisted index text is malformed.
    #[error("malformed index file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

impl IndexError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Malformed persisted index text. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A data line outside any `<list>` ... `</list>` block.
    #[error("line {line}: record data outside of a <list> block")]
    OrphanRecord { line: usize },

    /// A count that is not a non-negative integer.
    #[error("line {line}: invalid count {value:?}")]
    InvalidCount { line: usize, value: String },

    /// A path with no count after it.
    #[error("line {line}: path {path:?} has no count")]
    MissingCount { line: usize, path: String },

    /// A `<list> ` opener with no token.
    #[error("line {line}: <list> without a token")]
    EmptyToken { line: usize },
}

/// Rejected search command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("unknown command {0:?}")]
    UnknownCommand(String),
}
