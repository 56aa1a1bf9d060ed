pub mod family;
pub mod health;

use axum::http::StatusCode;
use axum::{Json, Router};

use crate::error::ErrorBody;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /family            list (GET), create (POST)
/// /family/swap       swap positions (POST)
/// /family/{id}       get, update, delete
/// ```
///
/// Unknown `/api/*` paths fall through to a JSON 404 rather than the
/// default empty body.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/family", family::router())
        .fallback(api_fallback)
}

/// 404 for unknown API paths.
async fn api_fallback() -> (StatusCode, Json<ErrorBody>) {
    (StatusCode::NOT_FOUND, Json(ErrorBody::new("Not found")))
}
