//! Cookie parsing.
//!
//! A `CookieJar` holds the client's request cookies, parsed from the raw
//! `Cookie` header value. Pairs are separated by `;`, surrounding
//! whitespace is trimmed, each pair is split at the first `=`, and values
//! are percent-decoded. Segments without an `=` are skipped, and the first
//! occurrence of a name wins.
use std::collections::btree_map;
use std::collections::BTreeMap;

use url::percent_encoding::percent_decode;

/// The request cookies, name to decoded value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CookieJar {
    inner: BTreeMap<String, String>,
}

impl CookieJar {
    /// An empty jar, the same as a request without a `Cookie` header.
    pub fn new() -> CookieJar {
        CookieJar::default()
    }

    /// Parse a raw `Cookie` header value.
    pub fn parse(header: &str) -> CookieJar {
        let mut jar = CookieJar::new();
        for pair in header.split(';') {
            let pair = pair.trim();
            if pair.is_empty() {
                continue;
            }
            let (name, value) = match pair.split_once('=') {
                Some(split) => split,
                None => {
                    trace!("skipping bare cookie segment {:?}", pair);
                    continue;
                }
            };
            let name = name.trim_end();
            if name.is_empty() {
                continue;
            }
            let value = percent_decode(value.trim_start().as_bytes())
                .decode_utf8_lossy()
                .into_owned();
            // first occurrence wins
            jar.inner.entry(name.to_owned()).or_insert(value);
        }
        jar
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
}
