//! Repository layer.
//!
//! Repositories are zero-sized structs providing async methods that
//! accept `&PgPool` as the first argument and return `sqlx::Error`.

pub mod family_member_repo;

pub use family_member_repo::FamilyMemberRepo;
