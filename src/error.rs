//! Error types shared by every stage of a run.

use thiserror::Error;

use crate::settings::MAX_LEN;

/// Problems with the command line. Always reported together with usage.
#[derive(Debug, Error)]
pub enum ArgumentError {
    #[error("Unknown option '{0}'")]
    UnknownOption(String),
    #[error("--length requires a number")]
    MissingLength,
    #[error("Invalid length '{0}': expected a whole number")]
    InvalidLength(String),
    #[error("Length must be between 1 and {}, got {0}", MAX_LEN - 1)]
    LengthOutOfRange(i64),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    InvalidArgument(#[from] ArgumentError),
    #[error("No character sets selected")]
    EmptyPool,
    #[error("Secure random source unavailable: {0}")]
    EntropyUnavailable(#[source] rand::Error),
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl Error {
    /// Whether the usage block should follow the error message.
    pub fn wants_usage(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
