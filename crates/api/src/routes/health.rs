use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Liveness/info response payload for the root path.
#[derive(Serialize)]
pub struct InfoResponse {
    pub mensaje: &'static str,
}

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the database is reachable.
    pub db_healthy: bool,
}

/// GET / -- liveness/info message.
async fn info() -> Json<InfoResponse> {
    Json(InfoResponse {
        mensaje: "PsicoAgenda API",
    })
}

/// GET /health -- returns service and database health.
///
/// Responds 503 when the database is unreachable so load balancers and
/// uptime probes see the outage, not just the payload.
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let db_healthy = psicoagenda_db::health_check(&state.pool).await.is_ok();

    let (status_code, status) = if db_healthy {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
    };

    (
        status_code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
        }),
    )
}

/// Mount the root info and health check routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(info))
        .route("/health", get(health_check))
}
