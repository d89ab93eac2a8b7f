use anyhow::Context;
use persistence::db::{DatabaseConfig, create_postgres_pool};
use sqlx::PgPool;
use std::env;

use super::ConfigError;

/// Initialize database connection pool from environment variables
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DATABASE_MAX_CONNECTIONS: Pool size (default: 5)
///
/// # Errors
/// Returns error if DATABASE_URL is not set or connection fails
pub async fn init_database() -> anyhow::Result<PgPool> {
    let db_url = env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;
    let mut config = DatabaseConfig::new(db_url);
    if let Ok(value) = env::var("DATABASE_MAX_CONNECTIONS") {
        config = config.with_max_connections(parse_max_connections(&value)?);
    }

    let pool = create_postgres_pool(&config)
        .await
        .context("Database connection failed")?;
    Ok(pool)
}

fn parse_max_connections(value: &str) -> Result<u32, ConfigError> {
    match value.trim().parse::<u32>() {
        Ok(max) if max > 0 => Ok(max),
        _ => Err(ConfigError::Invalid {
            name: "DATABASE_MAX_CONNECTIONS",
            expected: "a positive integer",
            value: value.to_string(),
        }),
    }
}
