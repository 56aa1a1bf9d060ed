//! `kintree-client` library crate.
//!
//! Typed REST client for the family-tree service plus the client-side
//! interaction model: the refetch-generation store, the session reducer
//! driving selection / expansion / drag-to-reorder, and the best-effort
//! expansion cache. The layout-preview binary entrypoint lives in
//! `main.rs`.

pub mod api;
pub mod cache;
pub mod session;
pub mod store;

pub use api::{ClientError, FamilyApi};
