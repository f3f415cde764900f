use chrono::Utc;
use poem_openapi::{payload::Json, OpenApi, Tags};

use crate::types::dto::common::HealthResponse;

/// Liveness API
pub struct HealthApi;

#[derive(Tags)]
enum ApiTags {
    /// Liveness endpoints
    Health,
}

#[OpenApi]
impl HealthApi {
    /// Report that the service is up
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health(&self) -> Json<HealthResponse> {
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        })
    }
}
