//! HTTP front end.
//!
//! A small synchronous HTTP/1.1 server that turns each request into a
//! script [`Context`] and ships the script's output as the response body.
//! One worker per connection; request isolation is total, the only thing
//! shared between workers is the handler itself.
use std::io::{Read, Write};
use std::net::{SocketAddr, ToSocketAddrs};
use std::sync::Arc;

use crate::context::Context;
use crate::error::{Error, Result};
use crate::runtime;
use crate::script::Diagnostic;
use crate::vars::ServerVars;

pub use self::request::{Request, MAX_HEAD_SIZE};
pub use self::response::Response;

pub mod request;
pub mod response;

/// A handler that produces a response for a request.
pub trait Handler: Send + Sync {
    fn handle(&self, req: Request, res: Response);
}

impl<F> Handler for F
where
    F: Fn(Request, Response),
    F: Send + Sync,
{
    fn handle(&self, req: Request, res: Response) {
        self(req, res)
    }
}

/// A server bound to a local address, not yet accepting.
pub struct Server {
    listener: runtime::TcpListener,
}

impl Server {
    /// Bind to `addr`.
    pub fn http<A: ToSocketAddrs>(addr: A) -> Result<Server> {
        let listener = runtime::TcpListener::bind(addr)?;
        Ok(Server { listener })
    }

    /// Start accepting connections, dispatching each to `handler` on its
    /// own worker. Returns immediately.
    pub fn handle<H: Handler + 'static>(self, handler: H) -> Result<Listening> {
        let addr = self.listener.local_addr()?;
        let listener = self.listener;
        let handler = Arc::new(handler);
        let (shutdown_tx, shutdown_rx) = runtime::chan::<()>();
        runtime::spawn(move || {
            for stream in listener.incoming() {
                if shutdown_rx.try_recv().is_ok() {
                    debug!("accept loop shutting down");
                    break;
                }
                match stream {
                    Ok(mut stream) => {
                        let handler = Arc::clone(&handler);
                        runtime::spawn(move || {
                            let peer = stream
                                .peer_addr()
                                .unwrap_or_else(|_| SocketAddr::from(([0, 0, 0, 0], 0)));
                            trace!("incoming connection from {}", peer);
                            if let Err(e) = serve_connection(&mut stream, peer, &*handler) {
                                debug!("connection error: {}", e);
                            }
                        });
                    }
                    Err(e) => debug!("accept error: {}", e),
                }
            }
        });
        info!("listening on http://{}", addr);
        Ok(Listening {
            addr,
            shutdown: shutdown_tx,
        })
    }
}

/// A guard for a listening server.
pub struct Listening {
    /// The address the server is bound to.
    pub addr: SocketAddr,
    shutdown: runtime::Sender<()>,
}

impl Listening {
    /// Stop accepting connections. In-flight workers finish on their own.
    pub fn close(&mut self) {
        debug!("closing server at {}", self.addr);
        let _ = self.shutdown.send(());
        // wake the accept loop so it observes the shutdown signal
        let _ = runtime::TcpStream::connect(self.addr);
    }
}

/// Serve a single connection: parse one request head, run the handler,
/// close. Parse failures are answered with a `400` (or `431` for oversized
/// heads) instead of being propagated.
pub fn serve_connection<S, H>(stream: &mut S, remote_addr: SocketAddr, handler: &H) -> Result<()>
where
    S: Read + Write,
    H: Handler,
{
    let req = match Request::new(stream, remote_addr) {
        Ok(req) => req,
        Err(Error::Io(e)) => return Err(Error::Io(e)),
        Err(e) => {
            debug!("request parse error from {}: {}", remote_addr, e);
            let mut res = Response::new(stream);
            *res.status_mut() = match e {
                Error::TooLarge => 431,
                _ => 400,
            };
            return res.send(b"");
        }
    };
    let res = Response::new(stream);
    handler.handle(req, res);
    Ok(())
}

/// The stock handler: build a context from the request, run the
/// [`Diagnostic`] script, and ship its output as `text/plain`.
///
/// Server variables are the request's CGI meta-variables, cookies come from
/// the `Cookie` header, and environment lookups see the process environment.
pub fn probe(req: Request, mut res: Response) {
    let cookie_header = req.header("Cookie").unwrap_or("").to_owned();
    let mut ctx = Context::new(Vec::new())
        .server_vars(ServerVars::from_request(&req))
        .cookie_header(&cookie_header);
    match ctx.run(&Diagnostic) {
        Ok(()) => {
            let body = ctx.into_inner();
            res.set_header("Content-Type", "text/plain; charset=utf-8");
            if let Err(e) = res.send(&body) {
                debug!("error sending diagnostic response: {}", e);
            }
        }
        Err(e) => {
            error!("diagnostic script failed: {}", e);
            *res.status_mut() = 500;
            if let Err(e) = res.send(b"") {
                debug!("error sending error response: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;

    use super::{probe, serve_connection, Request, Response, MAX_HEAD_SIZE};
    use crate::mock::MockStream;

    fn sock() -> SocketAddr {
        "127.0.0.1:4000".parse().unwrap()
    }

    fn response_for(input: &[u8]) -> String {
        let mut stream = MockStream::with_input(input);
        serve_connection(&mut stream, sock(), &probe).unwrap();
        String::from_utf8(stream.write).unwrap()
    }

    #[test]
    fn test_probe_response() {
        let out = response_for(
            b"GET /probe HTTP/1.1\r\n\
              Host: example.domain\r\n\
              Cookie: TEST=xyz\r\n\
              \r\n",
        );
        assert!(out.starts_with("HTTP/1.1 200 OK\r\n"), "{:?}", out);
        assert!(out.contains("Content-Type: text/plain; charset=utf-8\r\n"));
        assert!(out.contains("Cookie 'TEST' is set!\nValue is: xyz"));
        assert!(out.ends_with("Hello, world!\n"), "{:?}", out);
    }

    #[test]
    fn test_probe_without_cookie() {
        let out = response_for(
            b"GET /probe HTTP/1.1\r\n\
              Host: example.domain\r\n\
              \r\n",
        );
        assert!(out.contains("Cookie 'TEST' is not set!\n"), "{:?}", out);
    }

    #[test]
    fn test_probe_reports_missing_server_prop() {
        // TEST_PROP is never a CGI meta-variable, so the probe reports it
        // as empty over HTTP
        let out = response_for(b"GET /probe HTTP/1.1\r\nHost: x\r\n\r\n");
        assert!(out.contains("0 <- Server TEST_PROP\n"), "{:?}", out);
    }

    fn echo_target(req: Request, res: Response) {
        assert_eq!(req.method.as_ref(), "GET");
        assert_eq!(req.path(), "/x");
        res.send(b"ok").unwrap();
    }

    #[test]
    fn test_custom_handler() {
        let mut stream = MockStream::with_input(b"GET /x HTTP/1.1\r\n\r\n");
        serve_connection(&mut stream, sock(), &echo_target).unwrap();
        let out = String::from_utf8(stream.write).unwrap();
        assert!(out.ends_with("\r\nok"), "{:?}", out);
    }

    #[test]
    fn test_bad_request_answered_with_400() {
        let out = response_for(b"not an http request\r\n\r\n");
        assert!(out.starts_with("HTTP/1.1 400 Bad Request\r\n"), "{:?}", out);
    }

    #[test]
    fn test_oversized_head_answered_with_431() {
        let mut input = b"GET / HTTP/1.1\r\n".to_vec();
        input.extend_from_slice(&vec![b'a'; MAX_HEAD_SIZE + 1]);
        let out = response_for(&input);
        assert!(
            out.starts_with("HTTP/1.1 431 Request Header Fields Too Large\r\n"),
            "{:?}",
            out
        );
    }

    #[test]
    fn test_io_error_propagates() {
        let mut stream = MockStream::new();
        assert!(serve_connection(&mut stream, sock(), &probe).is_err());
    }
}
