//! Shared type aliases used across crates.

/// Database row identifier (maps to Postgres BIGSERIAL).
pub type DbId = i64;
