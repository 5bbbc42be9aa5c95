//! CGI front end.
//!
//! Under CGI (RFC 3875) the web server hands the script its request
//! metadata through the process environment: meta-variables arrive as
//! environment variables and the raw `Cookie` header arrives as
//! `HTTP_COOKIE`. `context()` builds a [`Context`] the way a CGI host
//! would: server variables are the whole environment table, cookies are
//! parsed out of `HTTP_COOKIE`, and `getenv` sees the same table.
use std::collections::BTreeMap;
use std::env;
use std::io::{self, Stdout, Write};

use crate::context::Context;
use crate::cookie::CookieJar;
use crate::vars::ServerVars;

/// Build a stdout-backed context from the process environment.
pub fn context() -> Context<Stdout> {
    from_env(env::vars().collect(), io::stdout())
}

/// Build a context from an explicit environment table. This is the testable
/// core of [`context`].
pub fn from_env<W: Write>(env: BTreeMap<String, String>, out: W) -> Context<W> {
    let cookies = match env.get("HTTP_COOKIE") {
        Some(raw) => CookieJar::parse(raw),
        None => CookieJar::new(),
    };
    let vars: ServerVars = env.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
    Context::detached(out).server_vars(vars).cookies(cookies).environment(env)
}
