//! Signed HTTP client for the Scrinus device/playlist/messaging REST API
//!
//! The crate's core is the request-signing and transport pipeline: each
//! call derives a per-request MD5 chain signature from the user's
//! credentials and the canonicalized request fields, attaches it as the
//! `Scr-Authorization` header, executes the HTTP call, and decodes the
//! JSON response or raises a classified error.
//!
//! # Main Components
//!
//! - **Query encoding** ([`query`]): PHP `http_build_query`-compatible
//!   parameter serialization
//! - **Signing** ([`http::auth`]): salted-password derivation and
//!   per-request signatures
//! - **Transport** ([`http::transport`]): the actual round-trip, with
//!   configurable timeouts and TLS policy
//! - **Normalization** ([`http::normalizer`]): JSON decode or status
//!   classification
//! - **Resource wrappers** ([`connector`]): devices, playlists, flash
//!   messages
//!
//! # Example
//!
//! ```no_run
//! use scrinus_connector::{ClientConfig, Result, ScrinusClient};
//!
//! async fn example() -> Result<()> {
//!     let config = ClientConfig::parse("https://api.example.com")?
//!         .with_credentials("alice", "secret");
//!     let client = ScrinusClient::new(config)?;
//!     // Salt is fetched lazily before the first authenticated call.
//!     let devices = client.get("/device", None).await?;
//!     println!("{devices}");
//!     Ok(())
//! }
//! ```

pub mod connector;
pub mod error;
pub mod http;
pub mod query;

pub use connector::Connector;
pub use error::{Error, Result};
pub use http::{
    ClientConfig, Method, RequestDescriptor, ResponseEnvelope, ScrinusClient, SignatureContext,
    TimeoutConfig, TlsConfig, SCR_AUTHORIZATION, X_DATE,
};
pub use query::build_query;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
