//! Per-service network configuration.

use std::time::Duration;

/// Network configuration for one catalog service.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Bind address for the service.
    pub host: String,
    /// Port to listen on. 0 means OS-assigned.
    pub port: u16,
    /// Allowed CORS origins.
    pub cors_origins: Vec<String>,
    /// Maximum time to wait for a request to complete.
    pub request_timeout: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 0,
            cors_origins: vec!["*".to_string()],
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl ServiceConfig {
    /// Series REST API defaults.
    #[must_use]
    pub fn series() -> Self {
        Self {
            port: 8081,
            ..Self::default()
        }
    }

    /// Anime GraphQL API defaults.
    #[must_use]
    pub fn anime() -> Self {
        Self {
            port: 8082,
            ..Self::default()
        }
    }

    /// Movies SOAP API defaults.
    #[must_use]
    pub fn movies() -> Self {
        Self {
            port: 8083,
            ..Self::default()
        }
    }

    /// Overrides the port from an environment variable when set and
    /// parsable; otherwise the configured port stays.
    #[must_use]
    pub fn with_env_port(mut self, var: &str) -> Self {
        if let Some(port) = std::env::var(var).ok().and_then(|v| v.parse().ok()) {
            self.port = port;
        }
        self
    }
}
