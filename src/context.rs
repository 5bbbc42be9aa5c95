//! Script execution contexts.
//!
//! A [`Context`] bundles the three read-only surfaces a hosted script sees
//! (server variables, cookies and environment variables) with the output
//! sink its writes go to. Front ends differ only in how they populate the
//! context and where the sink points: the CGI front end writes to stdout,
//! the HTTP server captures into a buffer and ships it as the response body.
use std::collections::BTreeMap;
use std::env;
use std::io::Write;

use crate::cookie::CookieJar;
use crate::error::Result;
use crate::script::Script;
use crate::value::Value;
use crate::vars::ServerVars;

/// A script execution context writing its output to `W`.
pub struct Context<W: Write> {
    vars: ServerVars,
    cookies: CookieJar,
    env: BTreeMap<String, String>,
    bindings: BTreeMap<String, Value>,
    out: W,
}

impl<W: Write> Context<W> {
    /// Create a context with a snapshot of the real process environment.
    pub fn new(out: W) -> Context<W> {
        let mut ctx = Context::detached(out);
        ctx.env = env::vars().collect();
        ctx
    }

    /// Create a context with an empty environment. Lookups only see what is
    /// registered explicitly, which keeps tests hermetic.
    pub fn detached(out: W) -> Context<W> {
        Context {
            vars: ServerVars::new(),
            cookies: CookieJar::new(),
            env: BTreeMap::new(),
            bindings: BTreeMap::new(),
            out,
        }
    }

    /// Replace the server variable table.
    pub fn server_vars(mut self, vars: ServerVars) -> Context<W> {
        self.vars = vars;
        self
    }

    /// Register a single server variable.
    pub fn server_var<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Context<W> {
        self.vars.insert(name, value);
        self
    }

    /// Replace the cookie jar.
    pub fn cookies(mut self, jar: CookieJar) -> Context<W> {
        self.cookies = jar;
        self
    }

    /// Parse a raw `Cookie` header value into the jar.
    pub fn cookie_header(self, header: &str) -> Context<W> {
        let jar = CookieJar::parse(header);
        self.cookies(jar)
    }

    /// Register a single environment variable, shadowing any snapshot value.
    pub fn env_var<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Context<W> {
        self.env.insert(name.into(), value.into());
        self
    }

    /// Replace the environment snapshot.
    pub fn environment(mut self, env: BTreeMap<String, String>) -> Context<W> {
        self.env = env;
        self
    }

    /// Look up a server variable.
    pub fn server(&self, name: &str) -> Option<&str> {
        self.vars.get(name)
    }

    /// Look up a request cookie.
    pub fn cookie(&self, name: &str) -> Option<&str> {
        self.cookies.get(name)
    }

    /// Look up an environment variable in the context's snapshot.
    pub fn getenv(&self, name: &str) -> Option<&str> {
        self.env.get(name).map(|v| v.as_str())
    }

    /// Bind a value into the context. Bound values are visible to every
    /// script run in this context via [`var`](Context::var).
    pub fn bind<V: Into<Value>>(&mut self, name: &str, value: V) {
        self.bindings.insert(name.to_owned(), value.into());
    }

    /// Read back a bound value.
    pub fn var(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// Write a string to the output sink.
    pub fn echo(&mut self, s: &str) -> Result<()> {
        self.write(s.as_bytes())
    }

    /// Write raw bytes to the output sink.
    pub fn write(&mut self, bytes: &[u8]) -> Result<()> {
        self.out.write_all(bytes)?;
        Ok(())
    }

    /// Flush the output sink.
    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    /// Run a script against this context.
    pub fn run<S: Script<W>>(&mut self, script: &S) -> Result<()> {
        script.run(self)
    }

    /// Consume the context and return the output sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}
