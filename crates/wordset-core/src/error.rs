use std::io;
use std::path::PathBuf;
use std::str::Utf8Error;

/// Failure while turning a word list into definition lines
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not valid UTF-8: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: Utf8Error,
    },

    #[error("Invalid JSON in {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unexpected document shape in {}: {detail}", .path.display())]
    Shape { path: PathBuf, detail: String },

    #[error("Failed to write output: {0}")]
    Output(#[source] io::Error),
}

impl ExtractError {
    /// Short label used in log fields
    pub fn kind(&self) -> &'static str {
        match self {
            ExtractError::Read { .. } => "read",
            ExtractError::Decode { .. } => "decode",
            ExtractError::Malformed { .. } => "malformed",
            ExtractError::Shape { .. } => "shape",
            ExtractError::Output(_) => "output",
        }
    }
}

/// Valid JSON that is not an object of entry objects
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ShapeError(pub String);

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Failed to read definitions file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
