use std::fmt::{Display, Formatter};

/// Failure of a vector-add call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Negative size, a buffer shorter than the requested size, a null pointer
    /// at the C boundary, or mismatched request arrays.
    InvalidInput(String),

    /// The device routine could not run: no device, module load failure,
    /// launch or copy failure, or a build without accelerator support.
    BackendFailure(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Error::InvalidInput(message.into())
    }

    pub fn backend_failure(message: impl Into<String>) -> Self {
        Error::BackendFailure(message.into())
    }

    pub fn message(&self) -> &str {
        match self {
            Error::InvalidInput(message) | Error::BackendFailure(message) => message,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidInput(message) => write!(f, "invalid input: {}", message),
            Error::BackendFailure(message) => write!(f, "backend failure: {}", message),
        }
    }
}

impl std::error::Error for Error {}
