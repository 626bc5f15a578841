//! Timeout configuration for outbound requests
//!
//! The original connector hardcoded a 60 second connect timeout and a 120
//! second overall timeout. Both are configurable here; the defaults match
//! the original values.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Timeout configuration for HTTP requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeoutConfig {
    /// Time allowed to establish a connection
    pub connect_timeout: Duration,
    /// Total time allowed for the entire request
    pub request_timeout: Duration,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(60),
            request_timeout: Duration::from_secs(120),
        }
    }
}

impl TimeoutConfig {
    pub fn new(connect_timeout: Duration, request_timeout: Duration) -> Self {
        Self {
            connect_timeout,
            request_timeout,
        }
    }

    /// Override the overall request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.connect_timeout.is_zero() {
            return Err("connect timeout cannot be zero".to_string());
        }
        if self.request_timeout.is_zero() {
            return Err("request timeout cannot be zero".to_string());
        }
        if self.request_timeout < self.connect_timeout {
            return Err("request timeout should be >= connect timeout".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_original_connector() {
        let config = TimeoutConfig::default();
        assert_eq!(config.connect_timeout, Duration::from_secs(60));
        assert_eq!(config.request_timeout, Duration::from_secs(120));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let mut config = TimeoutConfig::default();
        config.connect_timeout = Duration::ZERO;
        assert!(config.validate().is_err());

        let config = TimeoutConfig::new(Duration::from_secs(30), Duration::from_secs(10));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_request_timeout_override() {
        let config = TimeoutConfig::default().with_request_timeout(Duration::from_secs(300));
        assert_eq!(config.request_timeout, Duration::from_secs(300));
        assert_eq!(config.connect_timeout, Duration::from_secs(60));
    }
}
