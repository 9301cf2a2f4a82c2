//! Post handlers
//!
//! Dashboard listings and the owner-only actions.

use axum::{extract::State, Json};
use food_service::{dto::ApiResponse, ListPostsQuery, PostResponse, PostService};

use crate::extractors::{AuthUser, OptionalAuthUser, PostIdPath, ValidatedQuery};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// List posts that have not expired yet
///
/// GET /posts/active
pub async fn list_active(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    ValidatedQuery(query): ValidatedQuery<ListPostsQuery>,
) -> ApiResult<Json<ApiResponse<Vec<PostResponse>>>> {
    let service = PostService::new(state.service_context());
    let posts = service.list_active(auth.actor(), query.limit()).await?;
    Ok(Json(ApiResponse::new(posts)))
}

/// List expired posts, most recent first
///
/// GET /posts/expired
pub async fn list_expired(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    ValidatedQuery(query): ValidatedQuery<ListPostsQuery>,
) -> ApiResult<Json<ApiResponse<Vec<PostResponse>>>> {
    let service = PostService::new(state.service_context());
    let posts = service.list_expired(auth.actor(), query.limit()).await?;
    Ok(Json(ApiResponse::new(posts)))
}

/// List the caller's own posts, active and expired
///
/// GET /posts/mine
pub async fn list_mine(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedQuery(query): ValidatedQuery<ListPostsQuery>,
) -> ApiResult<Json<ApiResponse<Vec<PostResponse>>>> {
    let service = PostService::new(state.service_context());
    let posts = service.list_mine(auth.actor(), query.limit()).await?;
    Ok(Json(ApiResponse::new(posts)))
}

/// Get one post
///
/// GET /posts/{post_id}
pub async fn get_post(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    PostIdPath(post_id): PostIdPath,
) -> ApiResult<Json<PostResponse>> {
    let service = PostService::new(state.service_context());
    let post = service.get_post(post_id, auth.actor()).await?;
    Ok(Json(post))
}

/// Mark the caller's own post as finished; it expires immediately
///
/// POST /posts/{post_id}/finish
pub async fn finish_post(
    State(state): State<AppState>,
    auth: AuthUser,
    PostIdPath(post_id): PostIdPath,
) -> ApiResult<Json<PostResponse>> {
    let service = PostService::new(state.service_context());
    let post = service.finish_own_post(post_id, auth.actor()).await?;
    Ok(Json(post))
}

/// Delete the caller's own post
///
/// DELETE /posts/{post_id}
pub async fn delete_post(
    State(state): State<AppState>,
    auth: AuthUser,
    PostIdPath(post_id): PostIdPath,
) -> ApiResult<NoContent> {
    let service = PostService::new(state.service_context());
    service.delete_own_post(post_id, auth.actor()).await?;
    Ok(NoContent)
}
