use std::sync::Arc;

use crate::config::ServerConfig;

/// State handed to every handler through axum's `State` extractor.
///
/// Cloned per request; the pool and config are both reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub pool: kintree_db::DbPool,
    pub config: Arc<ServerConfig>,
}
