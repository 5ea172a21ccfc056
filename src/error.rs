//! Error management.

use crate::types::VId;
use derive_more::Display;

pub type Result<T> = std::result::Result<T, Error>;

/// Why a graph6 string could not be decoded.
#[derive(Debug, Display, PartialEq, Clone)]
pub enum EncodingError {
    #[display(fmt = "{}", _0)]
    Syntax(String),
    #[display(fmt = "expected {} body bytes, found {}", expected, found)]
    Truncated { expected: usize, found: usize },
}

impl std::error::Error for EncodingError {}

#[derive(Debug, Display, PartialEq, Clone)]
pub enum Error {
    #[display(fmt = "vertex {} is out of range", _0)]
    OutOfRange(VId),
    #[display(fmt = "({}, {}) has an endpoint that is not a vertex", _0, _1)]
    InvalidEndpoint(VId, VId),
    #[display(fmt = "malformed graph6: {}", _0)]
    MalformedEncoding(EncodingError),
    #[display(fmt = "failed to allocate adjacency storage")]
    AllocationFailure,
    #[display(fmt = "{}", _0)]
    Io(String),
}

impl std::error::Error for Error {}

impl From<EncodingError> for Error {
    fn from(err: EncodingError) -> Self {
        Error::MalformedEncoding(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}
