//! Participation service
//!
//! Toggles the acting user in a post's `finished_by` or `going_by` set and
//! force-expires posts that enough people have finished.
//!
//! Each toggle is a read-modify-write without a version check: two
//! concurrent toggles on the same set can lose one update. No lock is held
//! across the round trips.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{error, info, instrument, warn};

use food_core::participation::should_auto_expire;
use food_core::{Actor, DomainError, ParticipantSet, ParticipationField, PostId};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Outcome of a successful toggle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToggleResult {
    pub post_id: PostId,
    pub field: ParticipationField,
    /// The set as written to the store
    pub participants: ParticipantSet,
    /// `true` when the actor was added
    pub is_marking: bool,
    /// Whether `expires_at` was forced to now
    pub auto_expired: bool,
    /// The forced expiry, when `auto_expired`
    pub expires_at: Option<DateTime<Utc>>,
}

/// Participation service
pub struct ParticipationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ParticipationService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Flip the actor's membership in `field` for `post_id`.
    ///
    /// An anonymous actor toggles the shared placeholder identity. The
    /// membership write is the only thing that can fail the call; a failed
    /// auto-expiry is logged and reported as `auto_expired = false`.
    #[instrument(skip(self), fields(user_id = %actor.user_id()))]
    pub async fn toggle(
        &self,
        post_id: PostId,
        actor: Actor,
        field: ParticipationField,
    ) -> ServiceResult<ToggleResult> {
        let user_id = actor.user_id();
        let repo = self.ctx.post_repo();

        let current = repo
            .find_participants(post_id, field)
            .await
            .map_err(ServiceError::read_failure)?
            .ok_or(DomainError::PostNotFound(post_id))?;

        let outcome = current.toggled(user_id);

        let rows = repo
            .replace_participants(post_id, field, &outcome.participants)
            .await
            .map_err(ServiceError::write_failure)?;
        if rows == 0 {
            warn!(post_id = %post_id, field = %field, "Participant write matched no rows");
        }

        info!(
            post_id = %post_id,
            user_id = %user_id,
            field = %field,
            is_marking = outcome.is_marking,
            count = outcome.participants.len(),
            "Participation toggled"
        );

        let mut expires_at = None;
        if should_auto_expire(field, &outcome) {
            let now = Utc::now();
            match repo.set_expires_at(post_id, now).await {
                Ok(_) => {
                    info!(post_id = %post_id, count = outcome.participants.len(), "Post auto-expired");
                    expires_at = Some(now);
                }
                Err(e) => {
                    error!(post_id = %post_id, error = %e, "Failed to auto-expire post");
                }
            }
        }

        Ok(ToggleResult {
            post_id,
            field,
            participants: outcome.participants,
            is_marking: outcome.is_marking,
            auto_expired: expires_at.is_some(),
            expires_at,
        })
    }
}
