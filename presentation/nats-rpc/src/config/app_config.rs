use super::{ConfigError, health_config::HealthConfig, nats_config::NatsConfig};

pub struct AppConfig {
    pub nats: NatsConfig,
    pub health: HealthConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            nats: NatsConfig::from_env(),
            health: HealthConfig::from_env()?,
        })
    }
}
