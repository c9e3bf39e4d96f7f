use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Coarse classification of a [`CodeprintError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The root path is not a directory.
    InvalidArgument,
    /// Listing, reading or writing failed.
    Io,
    /// A file is not valid UTF-8.
    Decode,
}

#[derive(Debug, Error)]
pub enum CodeprintError {
    #[error("{} is not a directory", path.display())]
    InvalidArgument { path: PathBuf },
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),
    #[error("{} is not valid UTF-8: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: FromUtf8Error,
    },
    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),
    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CodeprintError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CodeprintError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn decode(path: impl Into<PathBuf>, source: FromUtf8Error) -> Self {
        CodeprintError::Decode {
            path: path.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CodeprintError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            CodeprintError::Decode { .. } => ErrorKind::Decode,
            CodeprintError::Io { .. }
            | CodeprintError::Walk(_)
            | CodeprintError::Output(_)
            | CodeprintError::Serialize(_) => ErrorKind::Io,
        }
    }
}
