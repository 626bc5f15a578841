//! TLS policy for the transport
//!
//! The original connector disabled certificate verification outright.
//! Verification is on by default here; turning it off is an explicit
//! opt-in for development setups that still talk to hosts with the old
//! self-signed certificates.

use serde::{Deserialize, Serialize};

/// TLS configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TlsConfig {
    /// Whether to validate server certificates
    pub validate_certificates: bool,
}

impl Default for TlsConfig {
    fn default() -> Self {
        Self {
            validate_certificates: true,
        }
    }
}

impl TlsConfig {
    /// Certificate validation on (the default).
    pub fn secure() -> Self {
        Self::default()
    }

    /// Accept invalid certificates. Matches the original connector's
    /// behavior; never use against production hosts.
    pub fn development() -> Self {
        Self {
            validate_certificates: false,
        }
    }
}
