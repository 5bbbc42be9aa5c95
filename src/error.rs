//! Error and Result module.
use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::str::Utf8Error;

use self::Error::{Head, Io, Method, TooLarge, Utf8, Version};

/// Result type often returned from methods that can have `envprobe::Error`s.
pub type Result<T> = std::result::Result<T, Error>;

/// A set of errors that can occur parsing requests or running scripts.
#[derive(Debug)]
pub enum Error {
    /// An invalid `Method`, such as `GE,T`.
    Method,
    /// An unsupported HTTP version.
    Version,
    /// A malformed request head.
    Head,
    /// A request head that exceeds the configured maximum size.
    TooLarge,
    /// Invalid UTF-8 in a header or value.
    Utf8(Utf8Error),
    /// An `io::Error` that occurred while trying to read or write to a
    /// network stream or output sink.
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Method => f.write_str("invalid Method specified"),
            Version => f.write_str("invalid HTTP version specified"),
            Head => f.write_str("malformed request head"),
            TooLarge => f.write_str("message head is too large"),
            Utf8(ref e) => fmt::Display::fmt(e, f),
            Io(ref e) => fmt::Display::fmt(e, f),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match *self {
            Utf8(ref error) => Some(error),
            Io(ref error) => Some(error),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Io(err)
    }
}

impl From<Utf8Error> for Error {
    fn from(err: Utf8Error) -> Error {
        Utf8(err)
    }
}

impl From<httparse::Error> for Error {
    fn from(err: httparse::Error) -> Error {
        match err {
            httparse::Error::TooManyHeaders => TooLarge,
            _ => Head,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as StdError;
    use std::io;

    use super::Error;
    use super::Error::{Head, TooLarge};

    fn check_source(err: &Error) -> bool {
        err.source().is_some()
    }

    #[test]
    fn test_cause() {
        let io = io::Error::new(io::ErrorKind::Other, "other");
        assert!(check_source(&Error::Io(io)));
        assert!(!check_source(&Head));
    }

    #[test]
    fn test_from_httparse() {
        let err: Error = httparse::Error::HeaderName.into();
        assert!(matches!(err, Head));
        let err: Error = httparse::Error::TooManyHeaders.into();
        assert!(matches!(err, TooLarge));
    }

    #[test]
    fn test_from_io() {
        let err: Error = io::Error::new(io::ErrorKind::Other, "other").into();
        assert!(matches!(err, Error::Io(..)));
    }
}
