//! Participation handlers
//!
//! "I finished it" and "I'm going" buttons. Both accept anonymous callers.

use axum::{extract::State, Json};
use food_core::{ParticipationField, PostId};
use food_service::{ParticipationService, ToggleResponse};

use crate::extractors::{OptionalAuthUser, PostIdPath};
use crate::response::ApiResult;
use crate::state::AppState;

async fn toggle(
    state: &AppState,
    auth: OptionalAuthUser,
    post_id: PostId,
    field: ParticipationField,
) -> ApiResult<Json<ToggleResponse>> {
    let service = ParticipationService::new(state.service_context());
    let result = service.toggle(post_id, auth.actor(), field).await?;
    Ok(Json(ToggleResponse::from(result)))
}

/// Toggle the caller in `finished_by`
///
/// POST /posts/{post_id}/finished
pub async fn toggle_finished(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    PostIdPath(post_id): PostIdPath,
) -> ApiResult<Json<ToggleResponse>> {
    toggle(&state, auth, post_id, ParticipationField::Finished).await
}

/// Toggle the caller in `going_by`
///
/// POST /posts/{post_id}/going
pub async fn toggle_going(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    PostIdPath(post_id): PostIdPath,
) -> ApiResult<Json<ToggleResponse>> {
    toggle(&state, auth, post_id, ParticipationField::Going).await
}
