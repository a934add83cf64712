use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HAR content is empty")]
    EmptyInput,

    #[error("Failed to parse HAR content: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid HAR structure: {0}")]
    InvalidStructure(String),

    #[error("Failed to read HAR file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Broad category of an [`Error`], for callers that only need to branch on
/// "bad argument", "malformed HAR" or "could not read the file".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Argument,
    Schema,
    Io,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::EmptyInput => ErrorKind::Argument,
            Error::Parse(_) | Error::InvalidStructure(_) => ErrorKind::Schema,
            Error::Io { .. } => ErrorKind::Io,
        }
    }

    pub fn is_argument(&self) -> bool {
        self.kind() == ErrorKind::Argument
    }

    pub fn is_schema(&self) -> bool {
        self.kind() == ErrorKind::Schema
    }

    pub fn is_io(&self) -> bool {
        self.kind() == ErrorKind::Io
    }

    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidStructure(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
