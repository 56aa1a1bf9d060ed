//! `kintree-client` -- layout preview for the family-tree service.
//!
//! Fetches the full member list from a running service, rebuilds the
//! forest, computes a canvas layout using the locally cached expansion
//! set, and logs a summary. Exercises the whole read path end to end,
//! which makes it a convenient smoke test against a live deployment.
//!
//! # Environment variables
//!
//! | Variable              | Required | Default | Description                                        |
//! |-----------------------|----------|---------|----------------------------------------------------|
//! | `FAMILY_API_URL`      | yes      | --      | Service base URL, e.g. `http://localhost:3000`     |
//! | `EXPANSION_CACHE_DIR` | no       | --      | Directory for the expansion cache; disabled if unset |

use kintree_client::api::FamilyApi;
use kintree_client::cache::ExpansionCache;
use kintree_core::layout::TreeLayout;
use kintree_core::tree::build_forest;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kintree_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_url = std::env::var("FAMILY_API_URL").unwrap_or_else(|_| {
        tracing::error!("FAMILY_API_URL environment variable is required");
        std::process::exit(1);
    });

    let cache = match std::env::var("EXPANSION_CACHE_DIR") {
        Ok(dir) => ExpansionCache::new(dir),
        Err(_) => ExpansionCache::disabled(),
    };

    let api = FamilyApi::new(base_url.clone());

    tracing::info!(url = %base_url, "Fetching family members");

    let members = match api.list().await {
        Ok(members) => members,
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch family members");
            std::process::exit(1);
        }
    };

    let member_count = members.len();
    let expanded = cache.load();

    let forest = build_forest(members);
    let layout = TreeLayout::new().compute(&forest, &expanded);

    tracing::info!(
        members = member_count,
        roots = forest.len(),
        expanded = expanded.len(),
        visible_nodes = layout.nodes.len(),
        edges = layout.edges.len(),
        canvas_width = layout.width,
        canvas_height = layout.height,
        "Layout computed",
    );
}
