use std::env;

use super::ConfigError;

/// HTTP listener for the liveness/readiness probe.
#[derive(Debug, Clone)]
pub struct HealthConfig {
    pub ip: String,
    pub port: u16,
}

impl HealthConfig {
    /// Load health probe configuration from environment variables
    ///
    /// Environment variables:
    /// - HEALTH_IP: IP address to bind (default: "127.0.0.1")
    /// - HEALTH_PORT: Port to bind, 1-65535 (default: 8080)
    pub fn from_env() -> Result<Self, ConfigError> {
        let ip = env::var("HEALTH_IP").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = match env::var("HEALTH_PORT") {
            Ok(value) => parse_port("HEALTH_PORT", &value)?,
            Err(_) => 8080,
        };

        Ok(Self { ip, port })
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

pub fn parse_port(name: &'static str, value: &str) -> Result<u16, ConfigError> {
    match value.trim().parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ConfigError::Invalid {
            name,
            expected: "a number between 1 and 65535",
            value: value.to_string(),
        }),
    }
}
