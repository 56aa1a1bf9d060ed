//! Integration tests for the family member repository.
//!
//! Exercises the repository layer against a real database:
//! - Create with defaults and with every field
//! - Partial updates, including explicit-null clears
//! - Delete without cascading
//! - Transactional position swap
//! - Startup seeding

use kintree_core::member::{CreateFamilyMember, UpdateFamilyMember};
use kintree_core::types::DbId;
use kintree_db::repositories::FamilyMemberRepo;
use kintree_db::seed::seed_if_empty;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_member(name: &str, parent_id: Option<DbId>, position: Option<i32>) -> CreateFamilyMember {
    CreateFamilyMember {
        name: name.to_string(),
        parent_id,
        mother_name: None,
        phone_number: None,
        is_deceased: None,
        position,
    }
}

// ---------------------------------------------------------------------------
// Test: Create applies defaults
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_create_with_defaults(pool: PgPool) {
    let member = FamilyMemberRepo::create(&pool, &new_member("Grandpa John", None, None))
        .await
        .unwrap();

    assert!(member.id > 0);
    assert_eq!(member.name, "Grandpa John");
    assert_eq!(member.parent_id, None);
    assert_eq!(member.mother_name, None);
    assert_eq!(member.phone_number, None);
    assert!(!member.is_deceased);
    assert_eq!(member.position, 0);
}

// ---------------------------------------------------------------------------
// Test: Create stores every provided field
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_create_with_all_fields(pool: PgPool) {
    let root = FamilyMemberRepo::create(&pool, &new_member("Root", None, None))
        .await
        .unwrap();

    let input = CreateFamilyMember {
        name: "Aunt Alice".to_string(),
        parent_id: Some(root.id),
        mother_name: Some("Grandma Mary".to_string()),
        phone_number: Some("555-0103".to_string()),
        is_deceased: Some(true),
        position: Some(3),
    };
    let member = FamilyMemberRepo::create(&pool, &input).await.unwrap();

    assert_eq!(member.parent_id, Some(root.id));
    assert_eq!(member.mother_name.as_deref(), Some("Grandma Mary"));
    assert_eq!(member.phone_number.as_deref(), Some("555-0103"));
    assert!(member.is_deceased);
    assert_eq!(member.position, 3);
}

// ---------------------------------------------------------------------------
// Test: Lookup
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_find_by_id(pool: PgPool) {
    let created = FamilyMemberRepo::create(&pool, &new_member("Bob", None, None))
        .await
        .unwrap();

    let found = FamilyMemberRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("created member should be found");
    assert_eq!(found, created);

    assert!(FamilyMemberRepo::find_by_id(&pool, 999_999)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test]
async fn test_exists(pool: PgPool) {
    let created = FamilyMemberRepo::create(&pool, &new_member("Bob", None, None))
        .await
        .unwrap();

    assert!(FamilyMemberRepo::exists(&pool, created.id).await.unwrap());
    assert!(!FamilyMemberRepo::exists(&pool, 999_999).await.unwrap());
}

#[sqlx::test]
async fn test_list_ordered_by_id(pool: PgPool) {
    FamilyMemberRepo::create(&pool, &new_member("C", None, Some(2)))
        .await
        .unwrap();
    FamilyMemberRepo::create(&pool, &new_member("A", None, Some(1)))
        .await
        .unwrap();
    FamilyMemberRepo::create(&pool, &new_member("B", None, Some(0)))
        .await
        .unwrap();

    let members = FamilyMemberRepo::list(&pool).await.unwrap();
    assert_eq!(members.len(), 3);
    assert!(members.windows(2).all(|w| w[0].id < w[1].id));
}

// ---------------------------------------------------------------------------
// Test: Partial update semantics
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_update_applies_only_provided_fields(pool: PgPool) {
    let input = CreateFamilyMember {
        name: "Before".to_string(),
        parent_id: None,
        mother_name: Some("Mary".to_string()),
        phone_number: Some("555-0100".to_string()),
        is_deceased: None,
        position: Some(1),
    };
    let created = FamilyMemberRepo::create(&pool, &input).await.unwrap();

    let updated = FamilyMemberRepo::update(
        &pool,
        created.id,
        &UpdateFamilyMember {
            name: Some("After".to_string()),
            is_deceased: Some(true),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .expect("update should return the row");

    assert_eq!(updated.name, "After");
    assert!(updated.is_deceased);
    // Untouched fields keep their stored values.
    assert_eq!(updated.mother_name.as_deref(), Some("Mary"));
    assert_eq!(updated.phone_number.as_deref(), Some("555-0100"));
    assert_eq!(updated.position, 1);
}

#[sqlx::test]
async fn test_update_explicit_null_clears_nullable_columns(pool: PgPool) {
    let root = FamilyMemberRepo::create(&pool, &new_member("Root", None, None))
        .await
        .unwrap();
    let input = CreateFamilyMember {
        name: "Child".to_string(),
        parent_id: Some(root.id),
        mother_name: Some("Mary".to_string()),
        phone_number: Some("555-0102".to_string()),
        is_deceased: None,
        position: None,
    };
    let created = FamilyMemberRepo::create(&pool, &input).await.unwrap();

    let updated = FamilyMemberRepo::update(
        &pool,
        created.id,
        &UpdateFamilyMember {
            parent_id: Some(None),
            mother_name: Some(None),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .expect("update should return the row");

    assert_eq!(updated.parent_id, None);
    assert_eq!(updated.mother_name, None);
    // Absent field stays put.
    assert_eq!(updated.phone_number.as_deref(), Some("555-0102"));
}

#[sqlx::test]
async fn test_update_missing_row_returns_none(pool: PgPool) {
    let result = FamilyMemberRepo::update(
        &pool,
        999_999,
        &UpdateFamilyMember {
            name: Some("Nobody".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert!(result.is_none());
}

// ---------------------------------------------------------------------------
// Test: Delete never cascades
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_delete_leaves_children_dangling(pool: PgPool) {
    let parent = FamilyMemberRepo::create(&pool, &new_member("Parent", None, None))
        .await
        .unwrap();
    let child = FamilyMemberRepo::create(&pool, &new_member("Child", Some(parent.id), None))
        .await
        .unwrap();

    assert!(FamilyMemberRepo::delete(&pool, parent.id).await.unwrap());
    assert!(!FamilyMemberRepo::delete(&pool, parent.id).await.unwrap());

    // The child keeps its now-dangling parent reference.
    let orphan = FamilyMemberRepo::find_by_id(&pool, child.id)
        .await
        .unwrap()
        .expect("child should survive parent deletion");
    assert_eq!(orphan.parent_id, Some(parent.id));
}

// ---------------------------------------------------------------------------
// Test: Position swap
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_swap_exchanges_positions_only(pool: PgPool) {
    let alice = FamilyMemberRepo::create(&pool, &new_member("Alice", None, Some(0)))
        .await
        .unwrap();
    let grandpa = FamilyMemberRepo::create(&pool, &new_member("Grandpa", None, None))
        .await
        .unwrap();
    let bob = FamilyMemberRepo::create(&pool, &new_member("Bob", Some(grandpa.id), Some(1)))
        .await
        .unwrap();

    let (swapped_alice, swapped_bob) = FamilyMemberRepo::swap_positions(&pool, alice.id, bob.id)
        .await
        .unwrap()
        .expect("both members exist");

    assert_eq!(swapped_alice.position, 1);
    assert_eq!(swapped_bob.position, 0);
    // Different parents are allowed; parentage never changes.
    assert_eq!(swapped_alice.parent_id, None);
    assert_eq!(swapped_bob.parent_id, Some(grandpa.id));
}

#[sqlx::test]
async fn test_swap_twice_restores_original_positions(pool: PgPool) {
    let a = FamilyMemberRepo::create(&pool, &new_member("A", None, Some(0)))
        .await
        .unwrap();
    let b = FamilyMemberRepo::create(&pool, &new_member("B", None, Some(1)))
        .await
        .unwrap();

    FamilyMemberRepo::swap_positions(&pool, a.id, b.id)
        .await
        .unwrap()
        .expect("first swap");
    let (a2, b2) = FamilyMemberRepo::swap_positions(&pool, a.id, b.id)
        .await
        .unwrap()
        .expect("second swap");

    assert_eq!(a2.position, 0);
    assert_eq!(b2.position, 1);
}

#[sqlx::test]
async fn test_swap_with_missing_member_changes_nothing(pool: PgPool) {
    let a = FamilyMemberRepo::create(&pool, &new_member("A", None, Some(5)))
        .await
        .unwrap();

    let result = FamilyMemberRepo::swap_positions(&pool, a.id, 999_999)
        .await
        .unwrap();
    assert!(result.is_none());

    let unchanged = FamilyMemberRepo::find_by_id(&pool, a.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(unchanged.position, 5);
}

// ---------------------------------------------------------------------------
// Test: Seeding
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_seed_if_empty_runs_exactly_once(pool: PgPool) {
    assert!(seed_if_empty(&pool).await.unwrap());

    let members = FamilyMemberRepo::list(&pool).await.unwrap();
    assert_eq!(members.len(), 4);

    let grandpa = members.iter().find(|m| m.name == "Grandpa John").unwrap();
    let bob = members.iter().find(|m| m.name == "Uncle Bob").unwrap();
    let alice = members.iter().find(|m| m.name == "Aunt Alice").unwrap();
    assert_eq!(bob.parent_id, Some(grandpa.id));
    assert!(alice.is_deceased);

    // Second run is a no-op.
    assert!(!seed_if_empty(&pool).await.unwrap());
    assert_eq!(FamilyMemberRepo::list(&pool).await.unwrap().len(), 4);
}

#[sqlx::test]
async fn test_seed_skips_populated_table(pool: PgPool) {
    FamilyMemberRepo::create(&pool, &new_member("Existing", None, None))
        .await
        .unwrap();

    assert!(!seed_if_empty(&pool).await.unwrap());
    let members = FamilyMemberRepo::list(&pool).await.unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].name, "Existing");
}
