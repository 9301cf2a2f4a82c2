//! Profile entity <-> model mapper

use food_core::entities::Profile;
use food_core::value_objects::UserId;

use crate::models::ProfileModel;

/// Convert ProfileModel to Profile entity
impl From<ProfileModel> for Profile {
    fn from(model: ProfileModel) -> Self {
        Profile {
            user_id: UserId::new(model.user_id),
            first_name: model.first_name,
            last_name: model.last_name,
            avatar_url: model.avatar_url,
        }
    }
}
