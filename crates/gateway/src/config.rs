//! Gateway configuration.

use std::env;

use common::{DatabaseConfig, ServiceConfig};

use crate::views::DEFAULT_VIEW_CAPACITY;

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Bind address and service identity
    pub service: ServiceConfig,
    /// Account database
    pub database: DatabaseConfig,
    /// Live view sessions kept before the least recently used is evicted
    pub view_capacity: usize,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig::default(),
            database: DatabaseConfig::default(),
            view_capacity: DEFAULT_VIEW_CAPACITY,
        }
    }
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let service_defaults = ServiceConfig::default();
        let database_defaults = DatabaseConfig::default();

        Self {
            service: ServiceConfig {
                host: env::var("GATEWAY_HOST").unwrap_or(service_defaults.host),
                port: env::var("GATEWAY_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(service_defaults.port),
                log_level: env::var("RUST_LOG").unwrap_or(service_defaults.log_level),
                ..service_defaults
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").unwrap_or(database_defaults.url),
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(database_defaults.max_connections),
                ..database_defaults
            },
            view_capacity: env::var("VIEW_SESSION_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_VIEW_CAPACITY),
        }
    }

    /// Override the bind address (CLI flags win over the environment).
    pub fn with_addr(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.service.host = host;
        }
        if let Some(port) = port {
            self.service.port = port;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_addr_overrides() {
        let config = GatewayConfig::default().with_addr(Some("127.0.0.1".into()), Some(8081));
        assert_eq!(config.service.addr(), "127.0.0.1:8081");
    }

    #[test]
    fn test_with_addr_keeps_defaults() {
        let config = GatewayConfig::default().with_addr(None, None);
        assert_eq!(config.service.port, 3000);
        assert_eq!(config.view_capacity, DEFAULT_VIEW_CAPACITY);
    }
}
