//! Liveness and readiness for the catalog.
//!
//! The service is only useful once the `entries` table exists, so readiness
//! is reported as "database reachable and schema present" rather than a bare
//! connectivity check.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok` when the catalog can serve requests, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    /// `true` when the `entries` table is present in the database.
    pub schema_ready: bool,
}

/// GET /health
///
/// Responds 200 when ready and 503 when the database is unreachable or the
/// schema is missing, so load balancers can act on the status code alone.
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let schema_ready = match catalog_db::schema_ready(&state.pool).await {
        Ok(ready) => ready,
        Err(err) => {
            tracing::warn!(error = %err, "Health probe could not reach the database");
            false
        }
    };

    let (code, status) = if schema_ready {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (
        code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            schema_ready,
        }),
    )
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
