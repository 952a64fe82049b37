// std imports
use std::io;
use std::str::Utf8Error;

// third-party imports
use config::ConfigError;
use thiserror::Error;

/// Error is an error which may occur in the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("file {filename:?} not found")]
    FileNotFoundError { filename: String },
    #[error("{filename}:{line}: invalid utf-8 sequence, use --granularity=bytes to match raw bytes: {source}")]
    InvalidUtf8 {
        filename: String,
        line: usize,
        source: Utf8Error,
    },
}

impl Error {
    /// Returns true if the error only means that the reader of the output went away.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Io(err) if err.kind() == io::ErrorKind::BrokenPipe)
    }
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;
