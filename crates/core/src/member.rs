//! Family member model and request/response payloads.
//!
//! Wire payloads use camelCase field names. Update payloads distinguish
//! a field that is absent (leave unchanged) from a field that is null
//! (clear the value), which a plain `Option` cannot express, so the
//! nullable fields use a double `Option` with a custom deserializer.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

/// A member of the family tree as stored and served.
///
/// `parent_id` may reference a member that no longer exists; consumers
/// treat such members as roots rather than rejecting the data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMember {
    pub id: DbId,
    pub name: String,
    pub parent_id: Option<DbId>,
    pub mother_name: Option<String>,
    pub phone_number: Option<String>,
    pub is_deceased: bool,
    /// Sibling sort key. Lower values render further left.
    pub position: i32,
}

/// Payload for creating a member. Missing optional fields fall back to
/// database defaults (`is_deceased` false, `position` 0).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateFamilyMember {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mother_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_deceased: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
}

/// Partial update for a member. Outer `None` means the field was absent
/// from the payload; `Some(None)` means it was explicitly null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFamilyMember {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub parent_id: Option<Option<DbId>>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub mother_name: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone_number: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_deceased: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
}

/// Request body for swapping the positions of two members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapRequest {
    pub id1: DbId,
    pub id2: DbId,
}

/// Both members as stored after a successful swap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapResponse {
    pub member1: FamilyMember,
    pub member2: FamilyMember,
}

/// Deserializes a present field into `Some(value)`, so that a field
/// left out of the payload stays `None` via `#[serde(default)]`.
fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(de).map(Some)
}

/// Validates a creation payload.
pub fn validate_new_member(input: &CreateFamilyMember) -> Result<(), CoreError> {
    if input.name.trim().is_empty() {
        return Err(CoreError::validation_field("Name is required", "name"));
    }
    Ok(())
}

/// Validates an update payload. Only fields present in the payload are
/// checked; a name may not be updated to an empty string.
pub fn validate_update(input: &UpdateFamilyMember) -> Result<(), CoreError> {
    if let Some(name) = &input.name {
        if name.trim().is_empty() {
            return Err(CoreError::validation_field("Name cannot be empty", "name"));
        }
    }
    Ok(())
}
