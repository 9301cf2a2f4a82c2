//! Path parameter extractors

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use food_core::PostId;
use serde::Deserialize;

use crate::response::ApiError;

/// `:post_id` parsed as a [`PostId`]
#[derive(Debug, Clone, Copy)]
pub struct PostIdPath(pub PostId);

#[derive(Debug, Deserialize)]
struct RawPostIdPath {
    post_id: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for PostIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<RawPostIdPath>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;

        raw.post_id
            .parse()
            .map(PostIdPath)
            .map_err(|_| ApiError::invalid_path("Invalid post_id format"))
    }
}
