use std::env;

/// Connection and routing settings for the NATS transport.
#[derive(Debug, Clone)]
pub struct NatsConfig {
    pub url: String,
    pub subject_prefix: String,
    pub queue_group: String,
    pub client_name: String,
}

impl NatsConfig {
    /// Load NATS configuration from environment variables
    ///
    /// Environment variables:
    /// - NATS_URL: Server URL (default: "nats://127.0.0.1:4222")
    /// - NATS_SUBJECT_PREFIX: Subject namespace for commands (default: "products")
    /// - NATS_QUEUE_GROUP: Queue group shared by replicas (default: "products-service")
    pub fn from_env() -> Self {
        Self {
            url: env::var("NATS_URL").unwrap_or_else(|_| "nats://127.0.0.1:4222".to_string()),
            subject_prefix: env::var("NATS_SUBJECT_PREFIX")
                .unwrap_or_else(|_| "products".to_string()),
            queue_group: env::var("NATS_QUEUE_GROUP")
                .unwrap_or_else(|_| "products-service".to_string()),
            client_name: env!("CARGO_PKG_NAME").to_string(),
        }
    }

    /// Wildcard subject matching every command under the prefix.
    pub fn subscription_subject(&self) -> String {
        format!("{}.>", self.subject_prefix)
    }

    /// Extracts the command name from a subject such as `products.create_product`.
    pub fn command_from_subject<'a>(&self, subject: &'a str) -> Option<&'a str> {
        subject
            .strip_prefix(self.subject_prefix.as_str())?
            .strip_prefix('.')
            .filter(|command| !command.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> NatsConfig {
        NatsConfig {
            url: "nats://127.0.0.1:4222".to_string(),
            subject_prefix: "products".to_string(),
            queue_group: "products-service".to_string(),
            client_name: "nats-rpc".to_string(),
        }
    }

    #[test]
    fn should_subscribe_to_every_subject_under_prefix() {
        assert_eq!(config().subscription_subject(), "products.>");
    }

    #[test]
    fn should_extract_command_from_subject() {
        assert_eq!(
            config().command_from_subject("products.find_one_product"),
            Some("find_one_product")
        );
    }

    #[test]
    fn should_ignore_subjects_outside_prefix() {
        assert_eq!(config().command_from_subject("orders.create_order"), None);
        assert_eq!(config().command_from_subject("productsx.create"), None);
        assert_eq!(config().command_from_subject("products."), None);
    }
}
