//! Authentication extractors
//!
//! Validate the bearer token issued by the hosted auth service and turn it
//! into an [`Actor`].

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    typed_header::TypedHeaderRejection,
    TypedHeader,
};
use food_core::{Actor, UserId};

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user extracted from a valid access token
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: UserId,
}

impl AuthUser {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }

    pub fn actor(&self) -> Actor {
        Actor::Authenticated(self.user_id)
    }
}

fn authenticate(app_state: &AppState, token: &str) -> Result<AuthUser, ApiError> {
    let claims = app_state
        .jwt_service()
        .validate_access_token(token)
        .map_err(|e| {
            tracing::warn!(error = %e, "Invalid access token");
            ApiError::App(e)
        })?;

    let user_id = claims.user_id().map_err(|e| {
        tracing::warn!(error = %e, "Invalid user ID in token");
        ApiError::App(e)
    })?;

    Ok(AuthUser::new(user_id))
}

fn header_rejection(rejection: &TypedHeaderRejection) -> ApiError {
    if rejection.is_missing() {
        ApiError::MissingAuth
    } else {
        ApiError::InvalidAuthFormat
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|e| header_rejection(&e))?;

        authenticate(&AppState::from_ref(state), bearer.token())
    }
}

/// Optional authenticated user
///
/// A request without an Authorization header acts anonymously. A header that
/// is present but malformed, expired or badly signed is rejected rather than
/// silently downgraded.
#[derive(Debug, Clone, Copy)]
pub struct OptionalAuthUser(pub Option<AuthUser>);

impl OptionalAuthUser {
    pub fn actor(&self) -> Actor {
        self.0.map_or(Actor::Anonymous, |user| user.actor())
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state).await {
            Ok(TypedHeader(Authorization(bearer))) => {
                let user = authenticate(&AppState::from_ref(state), bearer.token())?;
                Ok(OptionalAuthUser(Some(user)))
            }
            Err(e) if e.is_missing() => Ok(OptionalAuthUser(None)),
            Err(e) => Err(header_rejection(&e)),
        }
    }
}
