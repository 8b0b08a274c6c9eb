use std::error::Error;
use std::fmt;
use std::io;

/// Enumeration of all possible errors that can occur while building a seek index
#[derive(Debug)]
pub enum MkvIndexError {
    Stream(StreamError),
    Index(IndexError),
    Other(io::Error),
}

/// EBML element header decoding errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EbmlError {
    /// No bytes were available to decode from
    Empty,
    /// A length field or header runs past the end of the available bytes
    Truncated { needed: u64, available: u64 },
    /// A length prefix decoded to more than 8 bytes
    InvalidLength { length: usize },
}

impl EbmlError {
    /// Whether more input could turn this failure into a successful decode.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, EbmlError::Empty | EbmlError::Truncated { .. })
    }
}

/// Errors raised while feeding bytes to the parser
#[derive(Debug)]
pub struct StreamError {
    pub message: String,
}

impl StreamError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Seek index construction errors
#[derive(Debug)]
pub struct IndexError {
    pub message: String,
}

impl IndexError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for MkvIndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MkvIndexError::Other(err) => write!(f, "I/O error: {}", err),
            MkvIndexError::Stream(err) => write!(f, "Stream error: {}", err),
            MkvIndexError::Index(err) => write!(f, "Index error: {}", err),
        }
    }
}

impl fmt::Display for EbmlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EbmlError::Empty => write!(f, "no bytes available"),
            EbmlError::Truncated { needed, available } => write!(
                f,
                "truncated element: need {} bytes, {} available",
                needed, available
            ),
            EbmlError::InvalidLength { length } => {
                write!(f, "length prefix of {} bytes exceeds 8", length)
            }
        }
    }
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for MkvIndexError {}
impl Error for EbmlError {}
impl Error for StreamError {}
impl Error for IndexError {}

// Conversion implementations
impl From<io::Error> for MkvIndexError {
    fn from(err: io::Error) -> Self {
        MkvIndexError::Other(err)
    }
}

impl From<StreamError> for MkvIndexError {
    fn from(err: StreamError) -> Self {
        MkvIndexError::Stream(err)
    }
}

impl From<IndexError> for MkvIndexError {
    fn from(err: IndexError) -> Self {
        MkvIndexError::Index(err)
    }
}

// Conversion to io::Error for callers working with io::Result
impl From<MkvIndexError> for io::Error {
    fn from(err: MkvIndexError) -> Self {
        io::Error::other(err)
    }
}

impl From<StreamError> for io::Error {
    fn from(err: StreamError) -> Self {
        io::Error::other(err)
    }
}

impl From<IndexError> for io::Error {
    fn from(err: IndexError) -> Self {
        io::Error::other(err)
    }
}

// Type alias for Result with MkvIndexError
pub type MkvIndexResult<T> = Result<T, MkvIndexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_and_conversion() {
        let err = EbmlError::Truncated {
            needed: 12,
            available: 5,
        };
        assert_eq!(err.to_string(), "truncated element: need 12 bytes, 5 available");

        let err: MkvIndexError = StreamError::new("input ended").into();
        assert_eq!(err.to_string(), "Stream error: input ended");

        let io_err: io::Error = MkvIndexError::from(IndexError::new("not matroska")).into();
        assert_eq!(io_err.kind(), io::ErrorKind::Other);
        assert!(io_err.to_string().contains("not matroska"));
    }

    #[test]
    fn test_recoverable_classification() {
        assert!(EbmlError::Empty.is_recoverable());
        assert!(EbmlError::Truncated {
            needed: 2,
            available: 1
        }
        .is_recoverable());
        assert!(!EbmlError::InvalidLength { length: 9 }.is_recoverable());
    }
}
