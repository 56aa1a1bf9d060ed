//! Startup seeding of a starter family.

use kintree_core::member::CreateFamilyMember;
use kintree_core::types::DbId;
use sqlx::PgPool;

use crate::repositories::FamilyMemberRepo;

/// Insert a small starter family when the table is empty.
///
/// Returns `true` if seeding ran. A non-empty table is never reseeded.
pub async fn seed_if_empty(pool: &PgPool) -> Result<bool, sqlx::Error> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM family_members")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(false);
    }

    let grandpa =
        FamilyMemberRepo::create(pool, &starter("Grandpa John", None, "555-0100", false)).await?;
    let grandma =
        FamilyMemberRepo::create(pool, &starter("Grandma Mary", None, "555-0101", false)).await?;
    FamilyMemberRepo::create(
        pool,
        &starter("Uncle Bob", Some(grandpa.id), "555-0102", false),
    )
    .await?;
    FamilyMemberRepo::create(
        pool,
        &starter("Aunt Alice", Some(grandma.id), "555-0103", true),
    )
    .await?;

    tracing::info!("seeded starter family of 4 members");
    Ok(true)
}

fn starter(name: &str, parent_id: Option<DbId>, phone: &str, is_deceased: bool) -> CreateFamilyMember {
    CreateFamilyMember {
        name: name.to_string(),
        parent_id,
        mother_name: None,
        phone_number: Some(phone.to_string()),
        is_deceased: Some(is_deceased),
        position: None,
    }
}
