//! Request descriptors
//!
//! A [`RequestDescriptor`] is the plain-data form of one API call: verb,
//! path, and the encoded parameters split into query string or body
//! depending on the verb. Descriptors are built fresh per call and never
//! persisted.

use std::fmt;

use serde_json::Value;
use url::Url;

use crate::error::{Error, Result};
use crate::query::build_query;

/// The closed set of verbs the API accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    /// Upper-case wire form, as included in the signature plaintext.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// One API call described as plain data.
///
/// GET carries its encoded parameters in `query` and never sends a body;
/// every other verb carries them in `body` with an empty query. The split
/// matches what the signature plaintext expects for each verb.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub method: Method,
    pub path: String,
    pub query: String,
    pub body: String,
}

impl RequestDescriptor {
    pub fn new(method: Method, path: &str, params: Option<&Value>) -> Self {
        let encoded = params.map(build_query).unwrap_or_default();
        let (query, body) = match method {
            Method::Get => (encoded, String::new()),
            _ => (String::new(), encoded),
        };
        Self {
            method,
            path: path.to_string(),
            query,
            body,
        }
    }

    /// Full request URI: base URL joined with the path, with the query
    /// string appended for GET.
    pub fn build_url(&self, base_url: &Url) -> Result<Url> {
        let mut uri = format!(
            "{}/{}",
            base_url.as_str().trim_end_matches('/'),
            self.path.trim_start_matches('/')
        );
        if self.method == Method::Get && !self.query.is_empty() {
            uri.push('?');
            uri.push_str(&self.query);
        }
        Url::parse(&uri).map_err(|e| Error::Configuration {
            message: format!("invalid request URI '{uri}'"),
            source: Some(anyhow::Error::new(e)),
        })
    }
}
