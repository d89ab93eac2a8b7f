use chrono::Utc;
use poem_openapi::{ApiResponse, Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
}

impl HealthCheckResponse {
    fn with_status(status: &str) -> Self {
        Self {
            status: status.to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[derive(ApiResponse)]
pub enum ReadinessResponse {
    #[oai(status = 200)]
    Ready(Json<HealthCheckResponse>),
    #[oai(status = 503)]
    Unavailable(Json<HealthCheckResponse>),
}

/// Probes for orchestrators. The service itself speaks NATS; this HTTP
/// surface only reports whether the process and its database are up.
pub struct HealthApi {
    pool: PgPool,
}

impl HealthApi {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[OpenApi]
impl HealthApi {
    /// Liveness probe
    ///
    /// Returns `healthy` as long as the process is serving requests.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse::with_status("healthy"))
    }

    /// Readiness probe
    ///
    /// Pings the database; `503` while it is unreachable.
    #[oai(path = "/health/ready", method = "get", tag = "ApiTags::Health")]
    async fn readiness_check(&self) -> ReadinessResponse {
        if persistence::db::ping(&self.pool).await {
            ReadinessResponse::Ready(Json(HealthCheckResponse::with_status("ready")))
        } else {
            tracing::warn!("Readiness check failed: database unreachable");
            ReadinessResponse::Unavailable(Json(HealthCheckResponse::with_status("unavailable")))
        }
    }
}
