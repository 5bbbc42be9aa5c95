//! # envprobe
//!
//! A small request/environment introspection library. It hosts *scripts*
//! (plain Rust handlers) inside an execution [`Context`] that exposes the
//! three read-only surfaces a hosted script traditionally sees:
//!
//! * **server variables**, the request metadata registered per invocation,
//! * **cookies**, parsed from the client's `Cookie` header,
//! * **environment variables**, the process environment.
//!
//! Scripts write their output through the context, so the same script runs
//! unchanged under the CGI front end (output to stdout), under the bundled
//! HTTP server (output becomes the response body), or under a test harness
//! (output captured in a `Vec<u8>`).
//!
//! The built-in [`Diagnostic`] script reports the presence and values of the
//! `TEST_PROP` server variable, the `TEST` cookie and the `TEST` environment
//! variable:
//!
//! ```
//! use envprobe::{Context, Diagnostic};
//!
//! let mut ctx = Context::detached(Vec::new())
//!     .server_var("TEST_PROP", "abc")
//!     .cookie_header("TEST=xyz");
//! ctx.run(&Diagnostic).unwrap();
//!
//! let out = String::from_utf8(ctx.into_inner()).unwrap();
//! assert!(out.starts_with("3abc <- Server TEST_PROP\n"));
//! assert!(out.ends_with("Hello, world!\n"));
//! ```
#[macro_use]
extern crate log;

pub mod cgi;
pub mod context;
pub mod cookie;
pub mod error;
pub mod method;
pub mod script;
pub mod server;
pub mod status;
pub mod value;
pub mod vars;
pub mod version;

pub mod runtime;

#[cfg(test)]
mod mock;

pub use context::Context;
pub use cookie::CookieJar;
pub use error::{Error, Result};
pub use script::{Diagnostic, Script};
pub use server::Server;
pub use value::Value;
pub use vars::ServerVars;
