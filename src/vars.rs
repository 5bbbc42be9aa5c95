//! Server variables.
//!
//! The per-request metadata table a hosted script sees, keyed by the
//! traditional CGI meta-variable names (`REQUEST_METHOD`, `REMOTE_ADDR`,
//! `HTTP_*` and friends).
use std::collections::btree_map;
use std::collections::BTreeMap;

use crate::server::Request;

/// An ordered string-to-string table of server variables.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ServerVars {
    inner: BTreeMap<String, String>,
}

impl ServerVars {
    pub fn new() -> ServerVars {
        ServerVars::default()
    }

    /// Register a variable, replacing any previous value.
    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, name: K, value: V) {
        self.inner.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.inner.get(name).map(|v| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.inner.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<String, String> {
        self.inner.iter()
    }

    /// Register the CGI meta-variables for a parsed request, the way a
    /// server API's `register_server_variables` hook does: the request line
    /// fields under their RFC 3875 names, and every header under its
    /// `HTTP_*` mangling (`Content-Type` and `Content-Length` keep their
    /// unprefixed names).
    pub fn from_request(req: &Request) -> ServerVars {
        let mut vars = ServerVars::new();
        vars.insert("GATEWAY_INTERFACE", "CGI/1.1");
        vars.insert(
            "SERVER_SOFTWARE",
            concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")),
        );
        vars.insert("REQUEST_METHOD", req.method.as_ref());
        vars.insert("REQUEST_URI", req.uri.as_str());
        vars.insert("SCRIPT_NAME", req.path());
        vars.insert("QUERY_STRING", req.query());
        vars.insert("SERVER_PROTOCOL", req.version.to_string());
        vars.insert("REMOTE_ADDR", req.remote_addr.ip().to_string());
        vars.insert("REMOTE_PORT", req.remote_addr.port().to_string());
        for (name, value) in &req.headers {
            let key = match name.to_ascii_lowercase().as_str() {
                "content-type" => "CONTENT_TYPE".to_owned(),
                "content-length" => "CONTENT_LENGTH".to_owned(),
                other => {
                    let mut key = String::with_capacity(other.len() + 5);
                    key.push_str("HTTP_");
                    for c in other.chars() {
                        key.push(match c {
                            '-' => '_',
                            c => c.to_ascii_uppercase(),
                        });
                    }
                    key
                }
            };
            vars.insert(key, value.as_str());
        }
        vars
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ServerVars {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> ServerVars {
        let mut vars = ServerVars::new();
        vars.extend(iter);
        vars
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for ServerVars {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<'a> IntoIterator for &'a ServerVars {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}
