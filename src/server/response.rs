//! Server Responses
//!
//! These are responses sent by an `envprobe::Server` to clients, after
//! receiving a request.
use std::io::Write;
use std::thread;
use std::time::SystemTime;

use unicase::UniCase;

use crate::error::Result;
use crate::status;

/// The outgoing half of a connection, created by a `Server` and given to a
/// `Handler`.
///
/// The default status is `200 OK`. There is a `Drop` implementation that
/// writes an empty response if the handler never called [`send`](Response::send),
/// so the server doesn't leave dangling requests.
pub struct Response<'a> {
    status: u16,
    headers: Vec<(String, String)>,
    body: &'a mut (dyn Write + 'a),
    sent: bool,
}

impl<'a> Response<'a> {
    /// Creates a new Response that writes to the given stream.
    pub fn new(stream: &'a mut (dyn Write + 'a)) -> Response<'a> {
        Response {
            status: 200,
            headers: Vec::new(),
            body: stream,
            sent: false,
        }
    }

    /// The status of this response.
    #[inline]
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Get a mutable reference to the status.
    #[inline]
    pub fn status_mut(&mut self) -> &mut u16 {
        &mut self.status
    }

    /// Set a header, replacing any existing value under the same name
    /// (compared case-insensitively).
    pub fn set_header<V: Into<String>>(&mut self, name: &str, value: V) {
        let value = value.into();
        match self.header_position(name) {
            Some(i) => self.headers[i].1 = value,
            None => self.headers.push((name.to_owned(), value)),
        }
    }

    fn header_position(&self, name: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|(k, _)| UniCase(k.as_str()) == UniCase(name))
    }

    /// Writes the head and the body, and ends the response.
    pub fn send(mut self, body: &[u8]) -> Result<()> {
        self.write_out(body)
    }

    fn write_out(&mut self, body: &[u8]) -> Result<()> {
        self.sent = true;
        let reason = status::canonical_reason(self.status).unwrap_or("Unknown");
        debug!("writing head: {} {}", self.status, reason);
        write!(self.body, "HTTP/1.1 {} {}\r\n", self.status, reason)?;

        if self.header_position("Date").is_none() {
            let date = httpdate::HttpDate::from(SystemTime::now()).to_string();
            self.headers.push(("Date".to_owned(), date));
        }
        self.set_header("Content-Length", body.len().to_string());
        if self.header_position("Connection").is_none() {
            self.headers.push(("Connection".to_owned(), "close".to_owned()));
        }
        debug!("headers [\n{:?}]", self.headers);

        for (name, value) in &self.headers {
            write!(self.body, "{}: {}\r\n", name, value)?;
        }
        self.body.write_all(b"\r\n")?;
        self.body.write_all(body)?;
        self.body.flush()?;
        Ok(())
    }
}

impl<'a> Drop for Response<'a> {
    fn drop(&mut self) {
        if !self.sent {
            if thread::panicking() {
                self.status = 500;
            }
            if let Err(e) = self.write_out(b"") {
                debug!("error dropping response: {:?}", e);
            }
        }
    }
}
