//! Handlers for the `/family` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use kintree_core::error::CoreError;
use kintree_core::member::{
    validate_new_member, validate_update, CreateFamilyMember, FamilyMember, SwapRequest,
    SwapResponse, UpdateFamilyMember,
};
use kintree_core::types::DbId;
use kintree_db::repositories::FamilyMemberRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/family
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<FamilyMember>>> {
    let members = FamilyMemberRepo::list(&state.pool).await?;
    Ok(Json(members))
}

/// GET /api/family/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<FamilyMember>> {
    let member = FamilyMemberRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Family member", id)))?;
    Ok(Json(member))
}

/// POST /api/family
///
/// Validates the payload and checks that a provided parent id resolves
/// before inserting.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateFamilyMember>,
) -> AppResult<(StatusCode, Json<FamilyMember>)> {
    validate_new_member(&input)?;
    ensure_parent_exists(&state, input.parent_id).await?;

    let member = FamilyMemberRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(member)))
}

/// PUT /api/family/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFamilyMember>,
) -> AppResult<Json<FamilyMember>> {
    validate_update(&input)?;
    ensure_parent_exists(&state, input.parent_id.flatten()).await?;

    let member = FamilyMemberRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Family member", id)))?;
    Ok(Json(member))
}

/// DELETE /api/family/{id}
///
/// Returns 204 whether or not the member existed. Children keep their
/// parent reference and surface as roots on the next tree build.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    FamilyMemberRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/family/swap
///
/// Exchanges the `position` values of two members in one transaction.
pub async fn swap_positions(
    State(state): State<AppState>,
    Json(input): Json<SwapRequest>,
) -> AppResult<Json<SwapResponse>> {
    let (member1, member2) = FamilyMemberRepo::swap_positions(&state.pool, input.id1, input.id2)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::validation("One or both members not found")))?;
    Ok(Json(SwapResponse { member1, member2 }))
}

/// A non-null parent id must name an existing member.
async fn ensure_parent_exists(state: &AppState, parent_id: Option<DbId>) -> Result<(), AppError> {
    if let Some(parent_id) = parent_id {
        if !FamilyMemberRepo::exists(&state.pool, parent_id).await? {
            return Err(AppError::Core(CoreError::validation_field(
                "Parent member not found",
                "parentId",
            )));
        }
    }
    Ok(())
}
