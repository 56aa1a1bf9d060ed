//! Repository for the `family_members` table.

use kintree_core::member::{CreateFamilyMember, FamilyMember, UpdateFamilyMember};
use kintree_core::types::DbId;
use sqlx::PgPool;

use crate::models::family_member::FamilyMemberRow;

/// Columns selected by every query that returns a member row.
///
/// `position` must stay quoted; it is reserved in PostgreSQL.
const COLUMNS: &str =
    "id, name, parent_id, mother_name, phone_number, is_deceased, \"position\"";

/// CRUD operations for family members plus the two-row position swap.
pub struct FamilyMemberRepo;

impl FamilyMemberRepo {
    /// Insert a new member, returning the created row.
    ///
    /// `is_deceased` defaults to false and `position` to 0 when omitted.
    pub async fn create(
        pool: &PgPool,
        input: &CreateFamilyMember,
    ) -> Result<FamilyMember, sqlx::Error> {
        let query = format!(
            "INSERT INTO family_members (name, parent_id, mother_name, phone_number, is_deceased, \"position\")
             VALUES ($1, $2, $3, $4, COALESCE($5, FALSE), COALESCE($6, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FamilyMemberRow>(&query)
            .bind(&input.name)
            .bind(input.parent_id)
            .bind(&input.mother_name)
            .bind(&input.phone_number)
            .bind(input.is_deceased)
            .bind(input.position)
            .fetch_one(pool)
            .await
            .map(FamilyMember::from)
    }

    /// Find a member by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<FamilyMember>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM family_members WHERE id = $1");
        sqlx::query_as::<_, FamilyMemberRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map(|row| row.map(FamilyMember::from))
    }

    /// List all members, ordered by ID for deterministic output.
    pub async fn list(pool: &PgPool) -> Result<Vec<FamilyMember>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM family_members ORDER BY id ASC");
        sqlx::query_as::<_, FamilyMemberRow>(&query)
            .fetch_all(pool)
            .await
            .map(|rows| rows.into_iter().map(FamilyMember::from).collect())
    }

    /// Whether a member with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM family_members WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Update a member. Only fields present in `input` are applied.
    ///
    /// For the nullable columns the outer `Option` marks presence: when
    /// it is `Some`, the inner value is written as-is, so `Some(None)`
    /// clears the column. Returns `None` if no row with `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFamilyMember,
    ) -> Result<Option<FamilyMember>, sqlx::Error> {
        let parent_provided = input.parent_id.is_some();
        let parent_value = input.parent_id.flatten();
        let mother_provided = input.mother_name.is_some();
        let mother_value = input.mother_name.as_ref().and_then(|v| v.as_deref());
        let phone_provided = input.phone_number.is_some();
        let phone_value = input.phone_number.as_ref().and_then(|v| v.as_deref());

        let query = format!(
            "UPDATE family_members SET \
                 name         = COALESCE($2, name), \
                 parent_id    = CASE WHEN $3 THEN $4 ELSE parent_id END, \
                 mother_name  = CASE WHEN $5 THEN $6 ELSE mother_name END, \
                 phone_number = CASE WHEN $7 THEN $8 ELSE phone_number END, \
                 is_deceased  = COALESCE($9, is_deceased), \
                 \"position\" = COALESCE($10, \"position\") \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FamilyMemberRow>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(parent_provided)
            .bind(parent_value)
            .bind(mother_provided)
            .bind(mother_value)
            .bind(phone_provided)
            .bind(phone_value)
            .bind(input.is_deceased)
            .bind(input.position)
            .fetch_optional(pool)
            .await
            .map(|row| row.map(FamilyMember::from))
    }

    /// Delete a member by ID. Returns `true` if a row was removed.
    ///
    /// Children referencing the deleted member keep their `parent_id`;
    /// the tree builder treats them as roots afterwards.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM family_members WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Exchange the `position` values of two members in one transaction.
    ///
    /// Returns `None` without modifying anything when either ID does not
    /// resolve. On success both returned members reflect the committed
    /// post-swap state. Parentage is never touched, so swapping across
    /// different parents still only exchanges positions.
    pub async fn swap_positions(
        pool: &PgPool,
        id1: DbId,
        id2: DbId,
    ) -> Result<Option<(FamilyMember, FamilyMember)>, sqlx::Error> {
        let select = format!("SELECT {COLUMNS} FROM family_members WHERE id = $1");
        let mut tx = pool.begin().await?;

        let first = sqlx::query_as::<_, FamilyMemberRow>(&select)
            .bind(id1)
            .fetch_optional(&mut *tx)
            .await?;
        let second = sqlx::query_as::<_, FamilyMemberRow>(&select)
            .bind(id2)
            .fetch_optional(&mut *tx)
            .await?;
        let (Some(first), Some(second)) = (first, second) else {
            return Ok(None);
        };

        sqlx::query("UPDATE family_members SET \"position\" = $2 WHERE id = $1")
            .bind(first.id)
            .bind(second.position)
            .execute(&mut *tx)
            .await?;
        sqlx::query("UPDATE family_members SET \"position\" = $2 WHERE id = $1")
            .bind(second.id)
            .bind(first.position)
            .execute(&mut *tx)
            .await?;

        let updated1 = sqlx::query_as::<_, FamilyMemberRow>(&select)
            .bind(id1)
            .fetch_one(&mut *tx)
            .await?;
        let updated2 = sqlx::query_as::<_, FamilyMemberRow>(&select)
            .bind(id2)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some((updated1.into(), updated2.into())))
    }
}
