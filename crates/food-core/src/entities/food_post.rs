//! FoodPost entity - surplus food shared at a campus location

use chrono::{DateTime, Utc};

use crate::projection::PostStatus;
use crate::value_objects::{Coordinates, ParticipantSet, ParticipationField, PostId, UserId};

/// FoodPost entity
///
/// Rows are created by the sharing flow of the client app. This service only
/// mutates the two participant sets and `expires_at`.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodPost {
    pub id: PostId,
    pub owner_id: UserId,
    pub title: String,
    pub description: String,
    /// Free-text place name, e.g. "Gailor Hall lobby"
    pub location: String,
    pub coordinates: Option<Coordinates>,
    /// Free-text portion estimate, e.g. "8-10"
    pub servings: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub finished_by: ParticipantSet,
    pub going_by: ParticipantSet,
}

impl FoodPost {
    /// Create a new FoodPost with empty participant sets
    pub fn new(
        id: PostId,
        owner_id: UserId,
        title: String,
        location: String,
        expires_at: DateTime<Utc>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            owner_id,
            title,
            description: String::new(),
            location,
            coordinates: None,
            servings: String::new(),
            image_url: None,
            created_at: now,
            updated_at: now,
            expires_at,
            finished_by: ParticipantSet::new(),
            going_by: ParticipantSet::new(),
        }
    }

    /// Active or expired at `now`
    #[inline]
    pub fn status(&self, now: DateTime<Utc>) -> PostStatus {
        PostStatus::at(self.expires_at, now)
    }

    #[inline]
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.status(now) == PostStatus::Active
    }

    #[inline]
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner_id == user_id
    }

    pub fn participants(&self, field: ParticipationField) -> &ParticipantSet {
        match field {
            ParticipationField::Finished => &self.finished_by,
            ParticipationField::Going => &self.going_by,
        }
    }

    pub fn set_participants(&mut self, field: ParticipationField, participants: ParticipantSet) {
        match field {
            ParticipationField::Finished => self.finished_by = participants,
            ParticipationField::Going => self.going_by = participants,
        }
    }

    /// Whether `user_id` has marked the post finished
    pub fn has_finished(&self, user_id: UserId) -> bool {
        self.finished_by.contains(user_id)
    }

    /// Whether `user_id` has said they are going
    pub fn is_going(&self, user_id: UserId) -> bool {
        self.going_by.contains(user_id)
    }
}
