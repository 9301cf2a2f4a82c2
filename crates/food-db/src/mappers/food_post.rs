//! FoodPost entity <-> model mapper

use food_core::entities::FoodPost;
use food_core::value_objects::{Coordinates, ParticipantSet, PostId, UserId};
use uuid::Uuid;

use crate::models::FoodPostModel;

/// Read a nullable `uuid[]` column as a participant set
pub fn participants_from_column(column: Option<Vec<Uuid>>) -> ParticipantSet {
    column
        .unwrap_or_default()
        .into_iter()
        .map(UserId::new)
        .collect()
}

/// Values to bind for a `uuid[]` column
pub fn participants_to_column(participants: &ParticipantSet) -> Vec<Uuid> {
    participants.iter().map(|id| id.into_inner()).collect()
}

/// Convert FoodPostModel to FoodPost entity
impl From<FoodPostModel> for FoodPost {
    fn from(model: FoodPostModel) -> Self {
        FoodPost {
            id: PostId::new(model.id),
            owner_id: UserId::new(model.user_id),
            title: model.title,
            description: model.description.unwrap_or_default(),
            location: model.location,
            coordinates: Coordinates::from_parts(model.latitude, model.longitude),
            servings: model.servings.unwrap_or_default(),
            image_url: model.image_url,
            created_at: model.created_at,
            updated_at: model.updated_at,
            expires_at: model.expires_at,
            finished_by: participants_from_column(model.finished_by),
            going_by: participants_from_column(model.going_by),
        }
    }
}
