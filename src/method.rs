//! The HTTP request method.
use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::method::Method::{Connect, Delete, Extension, Get, Head, Options, Patch, Post, Put, Trace};

/// The request method, with known methods interned.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Head,
    Post,
    Put,
    Delete,
    Connect,
    Options,
    Trace,
    Patch,
    /// A method token outside the well-known set.
    Extension(String),
}

impl AsRef<str> for Method {
    fn as_ref(&self) -> &str {
        match *self {
            Get => "GET",
            Head => "HEAD",
            Post => "POST",
            Put => "PUT",
            Delete => "DELETE",
            Connect => "CONNECT",
            Options => "OPTIONS",
            Trace => "TRACE",
            Patch => "PATCH",
            Extension(ref s) => s.as_str(),
        }
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Method, Error> {
        if s.is_empty() {
            return Err(Error::Method);
        }
        Ok(match s {
            "GET" => Get,
            "HEAD" => Head,
            "POST" => Post,
            "PUT" => Put,
            "DELETE" => Delete,
            "CONNECT" => Connect,
            "OPTIONS" => Options,
            "TRACE" => Trace,
            "PATCH" => Patch,
            _ => {
                // token characters only, per RFC 7230
                if s.bytes().all(|b| {
                    b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b)
                }) {
                    Extension(s.to_owned())
                } else {
                    return Err(Error::Method);
                }
            }
        })
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::Method;
    use super::Method::{Extension, Get};

    #[test]
    fn test_from_str() {
        assert_eq!("GET".parse::<Method>().unwrap(), Get);
        assert_eq!(
            "PURGE".parse::<Method>().unwrap(),
            Extension("PURGE".to_owned())
        );
        assert!("GE,T".parse::<Method>().is_err());
        assert!("".parse::<Method>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!("GET".parse::<Method>().unwrap().to_string(), "GET");
        assert_eq!("PURGE".parse::<Method>().unwrap().to_string(), "PURGE");
    }
}
