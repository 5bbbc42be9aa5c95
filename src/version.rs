//! HTTP versions.
use std::fmt;

use crate::error::Error;

/// The two versions the bundled server speaks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum HttpVersion {
    Http10,
    Http11,
}

impl HttpVersion {
    /// Map httparse's minor version number.
    pub fn from_minor(minor: u8) -> Result<HttpVersion, Error> {
        match minor {
            0 => Ok(HttpVersion::Http10),
            1 => Ok(HttpVersion::Http11),
            _ => Err(Error::Version),
        }
    }
}

impl Default for HttpVersion {
    fn default() -> HttpVersion {
        HttpVersion::Http11
    }
}

impl fmt::Display for HttpVersion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            HttpVersion::Http10 => "HTTP/1.0",
            HttpVersion::Http11 => "HTTP/1.1",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::HttpVersion;

    #[test]
    fn test_from_minor() {
        assert_eq!(HttpVersion::from_minor(0).unwrap(), HttpVersion::Http10);
        assert_eq!(HttpVersion::from_minor(1).unwrap(), HttpVersion::Http11);
        assert!(HttpVersion::from_minor(2).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(HttpVersion::Http11.to_string(), "HTTP/1.1");
        assert_eq!(HttpVersion::Http10.to_string(), "HTTP/1.0");
    }
}
