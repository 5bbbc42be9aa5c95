//! Server Requests
//!
//! These are requests that an `envprobe::Server` receives: the request line
//! and headers, parsed and owned. Bodies are not read; the probe consumes
//! none.
use std::io::{self, Read};
use std::net::SocketAddr;
use std::str::{self, FromStr};

use unicase::UniCase;

use crate::error::{Error, Result};
use crate::method::Method;
use crate::version::HttpVersion;

/// Maximum accepted size of a request head, in bytes.
pub const MAX_HEAD_SIZE: usize = 8 * 1024;

const MAX_HEADERS: usize = 100;

/// A parsed request head, given to a `Handler`.
#[derive(Clone, Debug)]
pub struct Request {
    pub method: Method,
    /// The request target as sent, usually origin-form (`/path?query`).
    pub uri: String,
    pub version: HttpVersion,
    /// Headers in wire order.
    pub headers: Vec<(String, String)>,
    pub remote_addr: SocketAddr,
}

impl Request {
    /// Read a request head from `stream` and parse it.
    pub fn new<S: Read>(stream: &mut S, remote_addr: SocketAddr) -> Result<Request> {
        let buf = read_head(stream)?;
        Request::parse(&buf, remote_addr)
    }

    fn parse(buf: &[u8], remote_addr: SocketAddr) -> Result<Request> {
        let mut headers = [httparse::EMPTY_HEADER; MAX_HEADERS];
        let mut parsed = httparse::Request::new(&mut headers);
        match parsed.parse(buf)? {
            httparse::Status::Complete(_) => {}
            httparse::Status::Partial => return Err(Error::Head),
        }

        let method = Method::from_str(parsed.method.ok_or(Error::Head)?)?;
        let uri = parsed.path.ok_or(Error::Head)?.to_owned();
        let version = HttpVersion::from_minor(parsed.version.ok_or(Error::Head)?)?;
        debug!("Request Line: {:?} {:?} {:?}", method, uri, version);

        let mut header_vec = Vec::with_capacity(parsed.headers.len());
        for header in parsed.headers.iter() {
            let value = str::from_utf8(header.value)?.to_owned();
            header_vec.push((header.name.to_owned(), value));
        }
        debug!("{:?}", header_vec);

        Ok(Request {
            method,
            uri,
            version,
            headers: header_vec,
            remote_addr,
        })
    }

    /// Case-insensitive header lookup, first match wins.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| UniCase(k.as_str()) == UniCase(name))
            .map(|(_, v)| v.as_str())
    }

    /// The target without its query component.
    pub fn path(&self) -> &str {
        match self.uri.find('?') {
            Some(i) => &self.uri[..i],
            None => &self.uri,
        }
    }

    /// The query component, without the `?`. Empty when absent.
    pub fn query(&self) -> &str {
        match self.uri.find('?') {
            Some(i) => &self.uri[i + 1..],
            None => "",
        }
    }
}

fn read_head<S: Read>(stream: &mut S) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(512);
    let mut chunk = [0u8; 512];
    loop {
        let n = stream.read(&mut chunk)?;
        if n == 0 {
            if buf.is_empty() {
                return Err(Error::Io(io::ErrorKind::UnexpectedEof.into()));
            }
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        // only the bytes a new read could have completed need scanning
        let start = buf.len().saturating_sub(n + 3);
        if buf[start..].windows(4).any(|w| w == b"\r\n\r\n") {
            break;
        }
        if buf.len() > MAX_HEAD_SIZE {
            return Err(Error::TooLarge);
        }
    }
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;

    use super::{Request, MAX_HEAD_SIZE};
    use crate::error::Error;
    use crate::method::Method;
    use crate::mock::MockStream;
    use crate::version::HttpVersion;

    fn sock(s: &str) -> SocketAddr {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_get() {
        let mut mock = MockStream::with_input(
            b"GET /probe?q=1 HTTP/1.1\r\n\
              Host: example.domain\r\n\
              Cookie: TEST=xyz\r\n\
              \r\n",
        );

        let req = Request::new(&mut mock, sock("127.0.0.1:80")).unwrap();
        assert_eq!(req.method, Method::Get);
        assert_eq!(req.uri, "/probe?q=1");
        assert_eq!(req.path(), "/probe");
        assert_eq!(req.query(), "q=1");
        assert_eq!(req.version, HttpVersion::Http11);
        assert_eq!(req.header("Cookie"), Some("TEST=xyz"));
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let mut mock = MockStream::with_input(
            b"GET / HTTP/1.1\r\n\
              Host: example.domain\r\n\
              \r\n",
        );

        let req = Request::new(&mut mock, sock("127.0.0.1:80")).unwrap();
        assert_eq!(req.header("host"), Some("example.domain"));
        assert_eq!(req.header("HOST"), Some("example.domain"));
        assert_eq!(req.header("Host"), Some("example.domain"));
        assert_eq!(req.header("Cookie"), None);
    }

    #[test]
    fn test_parse_http10() {
        let mut mock = MockStream::with_input(b"GET / HTTP/1.0\r\n\r\n");
        let req = Request::new(&mut mock, sock("127.0.0.1:80")).unwrap();
        assert_eq!(req.version, HttpVersion::Http10);
    }

    #[test]
    fn test_malformed_head() {
        let mut mock = MockStream::with_input(b"not an http request\r\n\r\n");
        let err = Request::new(&mut mock, sock("127.0.0.1:80")).unwrap_err();
        assert!(matches!(err, Error::Head | Error::Method), "{:?}", err);
    }

    #[test]
    fn test_oversized_head() {
        let mut input = b"GET / HTTP/1.1\r\n".to_vec();
        input.extend_from_slice(&vec![b'a'; MAX_HEAD_SIZE + 1]);
        let mut mock = MockStream::with_input(&input);
        let err = Request::new(&mut mock, sock("127.0.0.1:80")).unwrap_err();
        assert!(matches!(err, Error::TooLarge), "{:?}", err);
    }

    #[test]
    fn test_empty_stream() {
        let mut mock = MockStream::new();
        let err = Request::new(&mut mock, sock("127.0.0.1:80")).unwrap_err();
        assert!(matches!(err, Error::Io(..)), "{:?}", err);
    }
}
