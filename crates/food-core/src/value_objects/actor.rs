//! The identity a request acts as

use serde::Serialize;

use super::UserId;
use crate::error::DomainError;

/// Who is performing an operation.
///
/// Participation toggles accept an anonymous actor and record it under
/// [`UserId::ANONYMOUS`]; owner-only actions require an authenticated one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "user_id", rename_all = "snake_case")]
pub enum Actor {
    Authenticated(UserId),
    Anonymous,
}

impl Actor {
    /// The id recorded in participant sets for this actor
    #[inline]
    pub fn user_id(&self) -> UserId {
        match self {
            Self::Authenticated(id) => *id,
            Self::Anonymous => UserId::ANONYMOUS,
        }
    }

    /// Whether the actor carries a verified identity
    #[inline]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// Get the authenticated user id or fail
    pub fn require_authenticated(&self) -> Result<UserId, DomainError> {
        match self {
            Self::Authenticated(id) => Ok(*id),
            Self::Anonymous => Err(DomainError::AnonymousActor),
        }
    }
}

impl From<Option<UserId>> for Actor {
    fn from(user_id: Option<UserId>) -> Self {
        user_id.map_or(Self::Anonymous, Self::Authenticated)
    }
}

impl From<UserId> for Actor {
    fn from(user_id: UserId) -> Self {
        Self::Authenticated(user_id)
    }
}
