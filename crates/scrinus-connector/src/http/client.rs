//! The Scrinus API client
//!
//! Orchestrates the whole pipeline: encode parameters, sign, send,
//! normalize. The client is stateless across requests except for the
//! lazily-fetched salt, which is initialized exactly once behind a
//! single-flight guard — concurrent first calls share one in-flight fetch.
//!
//! Calls are async and cancel-safe; each logical call performs exactly one
//! network round-trip (excluding the one-time salt fetch and redirect
//! follows). Callers needing a deadline beyond the configured transport
//! timeouts can wrap any call in `tokio::time::timeout`.

use chrono::Utc;
use serde::Deserialize;
use serde_json::Value;
use tokio::sync::OnceCell;
use url::Url;

use crate::error::{Error, Result};
use crate::http::auth::{http_date, SignatureContext, SCR_AUTHORIZATION, X_DATE};
use crate::http::builder::{Method, RequestDescriptor};
use crate::http::normalizer::normalize;
use crate::http::timeout::TimeoutConfig;
use crate::http::tls::TlsConfig;
use crate::http::transport::Transport;

/// Path of the anonymous salt endpoint.
const SALT_PATH: &str = "/login/getSalt";

/// Configuration for a [`ScrinusClient`], supplied programmatically at
/// construction.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: Url,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Pre-provisioned salt; when absent and a username is set, the salt
    /// is fetched lazily before the first authenticated call.
    pub salt: Option<String>,
    pub timeout: TimeoutConfig,
    pub tls: TlsConfig,
}

impl ClientConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            username: None,
            password: None,
            salt: None,
            timeout: TimeoutConfig::default(),
            tls: TlsConfig::default(),
        }
    }

    /// Parse the base URL from a string.
    pub fn parse(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| Error::Configuration {
            message: format!("invalid base URL '{base_url}'"),
            source: Some(anyhow::Error::new(e)),
        })?;
        Ok(Self::new(base_url))
    }

    pub fn with_credentials(mut self, username: &str, password: &str) -> Self {
        self.username = Some(username.to_string());
        self.password = Some(password.to_string());
        self
    }

    pub fn with_salt(mut self, salt: &str) -> Self {
        self.salt = Some(salt.to_string());
        self
    }

    pub fn with_timeout(mut self, timeout: TimeoutConfig) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_tls(mut self, tls: TlsConfig) -> Self {
        self.tls = tls;
        self
    }
}

/// Signed HTTP client for the Scrinus REST API.
///
/// Without a username the client runs unauthenticated: no signature is
/// computed and no `Scr-Authorization` header is sent.
#[derive(Debug)]
pub struct ScrinusClient {
    transport: Transport,
    username: Option<String>,
    password: Option<String>,
    salt: OnceCell<String>,
}

#[derive(Debug, Deserialize)]
struct SaltReply {
    success: bool,
    #[serde(default)]
    data: String,
    #[serde(default)]
    message: String,
}

impl ScrinusClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.username.is_some() && config.password.is_none() {
            return Err(Error::Configuration {
                message: "username configured without a password".to_string(),
                source: None,
            });
        }
        let transport = Transport::new(config.base_url, &config.timeout, &config.tls)?;
        Ok(Self {
            transport,
            username: config.username,
            password: config.password,
            salt: OnceCell::new_with(config.salt),
        })
    }

    pub async fn get(&self, path: &str, params: Option<&Value>) -> Result<Value> {
        self.request(Method::Get, path, params).await
    }

    pub async fn post(&self, path: &str, params: Option<&Value>) -> Result<Value> {
        self.request(Method::Post, path, params).await
    }

    pub async fn put(&self, path: &str, params: Option<&Value>) -> Result<Value> {
        self.request(Method::Put, path, params).await
    }

    pub async fn delete(&self, path: &str, params: Option<&Value>) -> Result<Value> {
        self.request(Method::Delete, path, params).await
    }

    /// Raw passthrough mode: the body is returned unmodified regardless of
    /// status. The call is still signed when credentials are configured.
    pub async fn request_raw(
        &self,
        method: Method,
        path: &str,
        params: Option<&Value>,
    ) -> Result<String> {
        let descriptor = RequestDescriptor::new(method, path, params);
        let (headers, _plaintext) = self.authentication(&descriptor).await?;
        let envelope = self.transport.send(&descriptor, &headers).await?;
        Ok(envelope.body)
    }

    /// The salt in use, once known.
    pub fn salt(&self) -> Option<&str> {
        self.salt.get().map(String::as_str)
    }

    /// Make sure the salt is available before authenticated calls proceed.
    ///
    /// No-op for unauthenticated clients and when the salt is already
    /// known. Callers can distinguish a failed bootstrap from a normal
    /// request failure: a non-200 salt response surfaces as
    /// [`Error::Transport`] with status and body, a rejected username as
    /// [`Error::InvalidCredentials`].
    pub async fn ensure_salt(&self) -> Result<()> {
        if let Some(username) = self.username.as_deref() {
            self.salt_value(username).await?;
        }
        Ok(())
    }

    async fn request(&self, method: Method, path: &str, params: Option<&Value>) -> Result<Value> {
        let descriptor = RequestDescriptor::new(method, path, params);
        let (headers, plaintext) = self.authentication(&descriptor).await?;
        let envelope = self.transport.send(&descriptor, &headers).await?;
        normalize(&envelope, plaintext.as_deref())
    }

    /// Compute the per-request headers: always `X-Date`, plus
    /// `Scr-Authorization` when credentials are configured. Returns the
    /// signed plaintext for 401/403 diagnostics.
    async fn authentication(
        &self,
        descriptor: &RequestDescriptor,
    ) -> Result<(Vec<(String, String)>, Option<String>)> {
        let timestamp = http_date(Utc::now());
        let mut headers = vec![(X_DATE.to_string(), timestamp.clone())];

        let Some(username) = self.username.as_deref() else {
            return Ok((headers, None));
        };
        // Enforced at construction.
        let password = self.password.as_deref().ok_or_else(|| Error::Configuration {
            message: "username configured without a password".to_string(),
            source: None,
        })?;

        let salt = self.salt_value(username).await?.to_string();
        let context = SignatureContext::derive(
            username,
            &timestamp,
            descriptor.method,
            self.transport.base_url(),
            &descriptor.path,
            &descriptor.query,
            &descriptor.body,
        )?;
        headers.push((
            SCR_AUTHORIZATION.to_string(),
            context.authorization_header(password, &salt),
        ));
        Ok((headers, Some(context.plaintext())))
    }

    async fn salt_value(&self, username: &str) -> Result<&str> {
        self.salt
            .get_or_try_init(|| self.fetch_salt(username))
            .await
            .map(String::as_str)
    }

    /// Anonymous `GET /login/getSalt?id=<username>`, through the regular
    /// transport but unsigned and bypassing status classification.
    async fn fetch_salt(&self, username: &str) -> Result<String> {
        tracing::debug!(username, "fetching api salt");
        let descriptor = RequestDescriptor::new(
            Method::Get,
            SALT_PATH,
            Some(&serde_json::json!({ "id": username })),
        );
        let envelope = self.transport.send(&descriptor, &[]).await?;

        if envelope.status != 200 {
            return Err(Error::Transport {
                message: format!("querying api for salt failed [{}]", envelope.status),
                status: Some(envelope.status),
                body: Some(envelope.body),
                source: None,
            });
        }

        let reply: SaltReply = serde_json::from_str(&envelope.body)?;
        if reply.success {
            Ok(reply.data)
        } else {
            Err(Error::InvalidCredentials {
                message: reply.message,
            })
        }
    }
}
