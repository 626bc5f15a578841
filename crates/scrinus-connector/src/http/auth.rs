//! Request signing for the Scrinus API
//!
//! Every authenticated call carries `Scr-Authorization: <signature>;<user>`
//! where the signature is a two-level chained MD5 over the canonicalized
//! request fields and the salted password:
//!
//! ```text
//! plaintext = id|date|METHOD|scheme|host|path|query|md5(payload)
//! signature = md5(md5(plaintext) + md5(md5(password) + salt))
//! ```
//!
//! The chain and the `|`-joined field order are a fixed wire-protocol
//! requirement: the server recomputes the exact same bytes and compares.
//! MD5 is weak by modern standards, but it is what the deployed service
//! verifies, so it is not an implementation choice here.

use chrono::{DateTime, Utc};
use md5::{Digest, Md5};
use url::Url;

use crate::error::{Error, Result};
use crate::http::builder::Method;

/// Header carrying `<signature>;<identifier>`.
pub const SCR_AUTHORIZATION: &str = "Scr-Authorization";

/// Header carrying the RFC 1123 GMT timestamp the signature was derived from.
pub const X_DATE: &str = "X-Date";

/// The eight canonical fields a request signature is derived from.
///
/// Built fresh per call and never cached: the timestamp changes every time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureContext {
    pub identifier: String,
    pub timestamp: String,
    pub method: String,
    pub scheme: String,
    pub host: String,
    pub path: String,
    pub query: String,
    pub payload_digest: String,
}

impl SignatureContext {
    /// Derive the context from the configured base URL and the request
    /// fields.
    ///
    /// The method is upper-cased and the scheme lower-cased. If `path` does
    /// not start with `/`, the canonical path is taken from the combined
    /// URL instead of the raw string. The payload digest is the one-level
    /// MD5 of the exact serialized string being sent (GET calls sign their
    /// parameters through the `query` field and digest an empty payload).
    pub fn derive(
        identifier: &str,
        timestamp: &str,
        method: Method,
        base_url: &Url,
        path: &str,
        query: &str,
        payload: &str,
    ) -> Result<Self> {
        let host = base_url
            .host_str()
            .ok_or_else(|| Error::Configuration {
                message: format!("base URL has no host: {base_url}"),
                source: None,
            })?
            .to_string();

        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            let joined = base_url.join(path).map_err(|e| Error::Configuration {
                message: format!("cannot resolve request path '{path}' against {base_url}"),
                source: Some(anyhow::Error::new(e)),
            })?;
            joined.path().to_string()
        };

        Ok(Self {
            identifier: identifier.to_string(),
            timestamp: timestamp.to_string(),
            method: method.as_str().to_string(),
            scheme: base_url.scheme().to_lowercase(),
            host,
            path,
            query: query.to_string(),
            payload_digest: md5_hex(payload),
        })
    }

    /// The `|`-joined canonical plaintext. Retained by the client for the
    /// duration of a call so 401/403 errors can surface what was signed.
    pub fn plaintext(&self) -> String {
        [
            self.identifier.as_str(),
            self.timestamp.as_str(),
            self.method.as_str(),
            self.scheme.as_str(),
            self.host.as_str(),
            self.path.as_str(),
            self.query.as_str(),
            self.payload_digest.as_str(),
        ]
        .join("|")
    }

    /// Compute the request signature for the given credentials.
    pub fn signature(&self, password: &str, salt: &str) -> String {
        let salted = salted_password(password, salt);
        md5_hex(&format!("{}{}", md5_hex(&self.plaintext()), salted))
    }

    /// Value for the `Scr-Authorization` header.
    pub fn authorization_header(&self, password: &str, salt: &str) -> String {
        format!("{};{}", self.signature(password, salt), self.identifier)
    }
}

/// `md5(md5(password) + salt)` — the signing key shared with the server.
pub fn salted_password(password: &str, salt: &str) -> String {
    md5_hex(&format!("{}{}", md5_hex(password), salt))
}

/// Lowercase hex MD5 of a string.
pub fn md5_hex(input: &str) -> String {
    hex::encode(Md5::digest(input.as_bytes()))
}

/// RFC 1123 GMT timestamp, e.g. `Fri, 01 Jan 2021 00:00:00 GMT`.
pub fn http_date(now: DateTime<Utc>) -> String {
    now.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}
