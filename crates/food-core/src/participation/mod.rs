//! Participation toggle rule
//!
//! The pure half of the toggle: computing the new participant set and deciding
//! whether the post must be force-expired. Reading and writing the store is
//! the service layer's job.

use serde::Serialize;

use crate::value_objects::{ParticipantSet, ParticipationField};

/// Number of distinct users in `finished_by` that expires a post
pub const AUTO_EXPIRY_THRESHOLD: usize = 3;

/// Result of flipping one user's membership in a participant set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToggleOutcome {
    /// The complete new set to write back
    pub participants: ParticipantSet,
    /// `true` when the user was added, `false` when removed
    pub is_marking: bool,
}

/// Whether a toggle must be followed by forcing `expires_at` to now.
///
/// Only an add to the finished set that leaves it at or above the threshold
/// qualifies. Removals never qualify, so expiry is never reverted.
pub fn should_auto_expire(field: ParticipationField, outcome: &ToggleOutcome) -> bool {
    field.has_auto_expiry()
        && outcome.is_marking
        && outcome.participants.len() >= AUTO_EXPIRY_THRESHOLD
}
