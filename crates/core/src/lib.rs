//! Core domain types and pure algorithms for the family tree.
//!
//! This crate has no I/O and no database dependencies. It defines the
//! member model shared across the API and client, reconstructs the
//! family forest from flat member lists, and computes canvas layouts
//! for rendering.

pub mod error;
pub mod layout;
pub mod member;
pub mod tree;
pub mod types;

pub use error::CoreError;
pub use types::DbId;
