//! HTTP transport
//!
//! Owns the `reqwest` client and performs the single network round-trip of
//! each logical call. Transport-level failures (DNS, connection refused,
//! timeout) surface as [`Error::Transport`], distinct from HTTP error
//! statuses which are left to the response normalizer.

use reqwest::header::CONTENT_TYPE;
use reqwest::redirect;
use url::Url;

use crate::error::{Error, Result};
use crate::http::builder::{Method, RequestDescriptor};
use crate::http::timeout::TimeoutConfig;
use crate::http::tls::TlsConfig;

/// What came back from one round-trip: status, reason phrase, raw headers,
/// raw body. Consumed immediately by the normalizer.
#[derive(Debug, Clone)]
pub struct ResponseEnvelope {
    pub status: u16,
    /// Reason phrase from the response status line, e.g. `Unauthorized`
    /// for `HTTP/1.1 401 Unauthorized`.
    pub reason: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// Issues HTTP calls against the configured base URL.
#[derive(Debug, Clone)]
pub struct Transport {
    client: reqwest::Client,
    base_url: Url,
}

impl Transport {
    pub fn new(base_url: Url, timeout: &TimeoutConfig, tls: &TlsConfig) -> Result<Self> {
        timeout.validate().map_err(|message| Error::Configuration {
            message,
            source: None,
        })?;

        let client = reqwest::Client::builder()
            .connect_timeout(timeout.connect_timeout)
            .timeout(timeout.request_timeout)
            .danger_accept_invalid_certs(!tls.validate_certificates)
            .redirect(redirect::Policy::limited(10))
            .build()
            .map_err(|e| Error::Configuration {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(anyhow::Error::new(e)),
            })?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Execute one request. Headers are applied verbatim. GET carries its
    /// parameters in the URI; other verbs send the encoded string as a
    /// form body.
    pub async fn send(
        &self,
        descriptor: &RequestDescriptor,
        headers: &[(String, String)],
    ) -> Result<ResponseEnvelope> {
        let url = descriptor.build_url(&self.base_url)?;

        let mut request = self.client.request(descriptor.method.into(), url.clone());
        for (name, value) in headers {
            request = request.header(name, value);
        }
        if descriptor.method != Method::Get && !descriptor.body.is_empty() {
            request = request
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(descriptor.body.clone());
        }

        tracing::debug!(method = %descriptor.method, %url, "sending request");

        let response = request.send().await.map_err(|e| Error::Transport {
            message: e.to_string(),
            status: None,
            body: None,
            source: Some(anyhow::Error::new(e)),
        })?;

        let status = response.status();
        let reason = status.canonical_reason().unwrap_or("").to_string();
        let response_headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    value.to_str().unwrap_or_default().to_string(),
                )
            })
            .collect();

        let body = response.text().await.map_err(|e| Error::Transport {
            message: format!("failed to read response body: {e}"),
            status: Some(status.as_u16()),
            body: None,
            source: Some(anyhow::Error::new(e)),
        })?;

        Ok(ResponseEnvelope {
            status: status.as_u16(),
            reason,
            headers: response_headers,
            body,
        })
    }
}
