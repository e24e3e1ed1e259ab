use axum::Json;

use crate::dto::response::{HealthResponse, HealthStatusResponse};

// =============================================================================
// Version Information
// =============================================================================

const VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Health Check Handler
// =============================================================================

/// The catalog lives in memory, so a running process is a healthy one.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HealthStatusResponse::Healthy,
        version: VERSION.to_string(),
    })
}

// =============================================================================
// Tests
// =============================================================================
