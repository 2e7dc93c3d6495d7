//! Definition of errors.

use std::error::Error;
use std::fmt;

pub type Result<T, E = MarcatoError> = std::result::Result<T, E>;

#[derive(Debug)]
pub enum MarcatoError {
    InvalidCorpus(InvalidCorpusError),
    InvalidArgument(InvalidArgumentError),
    IOError(std::io::Error),
}

impl MarcatoError {
    pub(crate) fn invalid_corpus<S>(msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidCorpus(InvalidCorpusError { msg: msg.into() })
    }

    pub(crate) fn invalid_argument<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidArgument(InvalidArgumentError {
            arg,
            msg: msg.into(),
        })
    }
}

impl fmt::Display for MarcatoError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidCorpus(e) => e.fmt(f),
            Self::InvalidArgument(e) => e.fmt(f),
            Self::IOError(e) => e.fmt(f),
        }
    }
}

impl Error for MarcatoError {}

/// Error used when the corpus data is malformed.
#[derive(Debug)]
pub struct InvalidCorpusError {
    /// Error message.
    pub(crate) msg: String,
}

impl fmt::Display for InvalidCorpusError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidCorpusError: {}", self.msg)
    }
}

impl Error for InvalidCorpusError {}

/// Error used when the argument is invalid.
#[derive(Debug)]
pub struct InvalidArgumentError {
    /// Name of the argument.
    pub(crate) arg: &'static str,

    /// Error message.
    pub(crate) msg: String,
}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidArgumentError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidArgumentError {}

impl From<std::io::Error> for MarcatoError {
    fn from(error: std::io::Error) -> Self {
        Self::IOError(error)
    }
}
