//! Row shape for the `family_members` table.

use kintree_core::member::FamilyMember;
use kintree_core::types::DbId;
use sqlx::FromRow;

/// A raw `family_members` row. Converted into [`FamilyMember`] before
/// leaving the data layer so callers never see column naming.
#[derive(Debug, Clone, FromRow)]
pub struct FamilyMemberRow {
    pub id: DbId,
    pub name: String,
    pub parent_id: Option<DbId>,
    pub mother_name: Option<String>,
    pub phone_number: Option<String>,
    pub is_deceased: bool,
    pub position: i32,
}

impl From<FamilyMemberRow> for FamilyMember {
    fn from(row: FamilyMemberRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            parent_id: row.parent_id,
            mother_name: row.mother_name,
            phone_number: row.phone_number,
            is_deceased: row.is_deceased,
            position: row.position,
        }
    }
}
