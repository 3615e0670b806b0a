//! Error types for riverrun.

use std::fmt;
use std::io;

/// Result type alias for riverrun operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the I/O layer.
///
/// The core (wrap, river, search) is total and never returns these:
/// infeasible widths surface as `None` layouts and degenerate texts resolve
/// to zero-river results.
#[derive(Debug)]
pub enum Error {
    /// I/O error reading an input source.
    Io(io::Error),
    /// An input source held no usable text.
    EmptyText { path: String },
    /// The batch header line was not a case count.
    InvalidCount { line: String },
    /// Batch input ended before the declared case count.
    MissingLine { expected: usize, found: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::EmptyText { path } => {
                write!(f, "no text in {path}: empty or whitespace only")
            }
            Self::InvalidCount { line } => write!(f, "invalid case count: {line:?}"),
            Self::MissingLine { expected, found } => {
                write!(
                    f,
                    "batch input ended early: expected {expected} cases, got {found}"
                )
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
