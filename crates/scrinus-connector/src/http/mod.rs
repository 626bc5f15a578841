//! The request-signing and transport pipeline
//!
//! - Descriptor building from verbs and parameters
//! - Per-request MD5 chain signing
//! - Transport with configurable timeouts and TLS policy
//! - Response normalization and status classification

pub mod auth;
pub mod builder;
pub mod client;
pub mod normalizer;
pub mod timeout;
pub mod tls;
pub mod transport;

pub use auth::{SignatureContext, SCR_AUTHORIZATION, X_DATE};
pub use builder::{Method, RequestDescriptor};
pub use client::{ClientConfig, ScrinusClient};
pub use normalizer::normalize;
pub use timeout::TimeoutConfig;
pub use tls::TlsConfig;
pub use transport::{ResponseEnvelope, Transport};
