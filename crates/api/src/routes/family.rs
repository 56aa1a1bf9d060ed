//! Route definitions for the family member resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::family;
use crate::state::AppState;

/// Routes mounted at `/family`.
///
/// ```text
/// GET    /           -> list
/// POST   /           -> create
/// POST   /swap       -> swap_positions
/// GET    /{id}       -> get_by_id
/// PUT    /{id}       -> update
/// DELETE /{id}       -> delete
/// ```
///
/// `/swap` is static so it takes precedence over `/{id}`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(family::list).post(family::create))
        .route("/swap", post(family::swap_positions))
        .route(
            "/{id}",
            get(family::get_by_id)
                .put(family::update)
                .delete(family::delete),
        )
}
