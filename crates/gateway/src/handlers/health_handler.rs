//! Health check handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub store: StoreHealth,
}

/// Account store health with optional error message.
#[derive(Debug, Serialize)]
pub struct StoreHealth {
    pub kind: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Create health routes.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// Health check endpoint - verifies database connectivity.
pub async fn health_check(State(state): State<AppState>) -> Response {
    let store = match &state.database {
        Some(db) => match db.ping().await {
            Ok(()) => StoreHealth {
                kind: "postgres".to_string(),
                status: "healthy".to_string(),
                error: None,
            },
            Err(e) => {
                tracing::warn!("Database ping failed: {}", e);
                StoreHealth {
                    kind: "postgres".to_string(),
                    status: "unhealthy".to_string(),
                    error: Some("database unreachable".to_string()),
                }
            }
        },
        None => StoreHealth {
            kind: "memory".to_string(),
            status: "healthy".to_string(),
            error: None,
        },
    };

    let healthy = store.status == "healthy";
    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        store,
    };

    if healthy {
        (StatusCode::OK, Json(response)).into_response()
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, Json(response)).into_response()
    }
}
