//! Root-level health endpoint.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
///
/// `status` is `degraded` when the database probe fails; the request
/// itself still returns 200.
#[derive(Serialize)]
pub struct HealthReport {
    status: &'static str,
    version: &'static str,
    db_healthy: bool,
}

async fn report(State(state): State<AppState>) -> Json<HealthReport> {
    let db_healthy = kintree_db::health_check(&state.pool).await.is_ok();

    Json(HealthReport {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// `/health` route, mounted at the root rather than under `/api`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(report))
}
