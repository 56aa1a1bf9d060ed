//! Row structs for the data layer.
//!
//! Each submodule contains a `FromRow` struct matching the database row
//! and a conversion into the shared wire model from `kintree-core`.

pub mod family_member;

pub use family_member::FamilyMemberRow;
