//! Domain to DTO mappers

use chrono::{DateTime, Utc};

use food_core::map::Overlay;
use food_core::{time_status, FoodPost, MarkerColor, PostId, Profile, UserId};

use super::responses::{AuthorResponse, MarkerResponse, PostResponse, ToggleResponse, ViewerState};
use crate::services::ToggleResult;

/// A post together with what is needed to render it for one viewer
#[derive(Debug, Clone, Copy)]
pub struct PostView<'a> {
    pub post: &'a FoodPost,
    pub author: Option<&'a Profile>,
    pub viewer: UserId,
    pub now: DateTime<Utc>,
}

impl From<&Profile> for AuthorResponse {
    fn from(profile: &Profile) -> Self {
        Self {
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            display_name: profile.display_name(),
        }
    }
}

impl From<PostView<'_>> for PostResponse {
    fn from(view: PostView<'_>) -> Self {
        let post = view.post;
        Self {
            id: post.id,
            user_id: post.owner_id,
            title: post.title.clone(),
            description: post.description.clone(),
            location: post.location.clone(),
            latitude: post.coordinates.map(|c| c.lat),
            longitude: post.coordinates.map(|c| c.lng),
            servings: post.servings.clone(),
            image_url: post.image_url.clone(),
            created_at: post.created_at,
            updated_at: post.updated_at,
            expires_at: post.expires_at,
            finished_by: post.finished_by.as_slice().to_vec(),
            going_by: post.going_by.as_slice().to_vec(),
            finished_count: post.finished_by.len(),
            going_count: post.going_by.len(),
            status: post.status(view.now),
            time_status: time_status(post.expires_at, view.now),
            author: view.author.map(AuthorResponse::from),
            viewer: ViewerState {
                is_owner: post.is_owned_by(view.viewer),
                has_finished: post.has_finished(view.viewer),
                is_going: post.is_going(view.viewer),
            },
        }
    }
}

impl From<ToggleResult> for ToggleResponse {
    fn from(result: ToggleResult) -> Self {
        let message = toggle_message(&result);
        Self {
            post_id: result.post_id,
            field: result.field,
            count: result.participants.len(),
            participants: result.participants.into_vec(),
            is_marking: result.is_marking,
            auto_expired: result.auto_expired,
            expires_at: result.expires_at,
            message,
        }
    }
}

fn toggle_message(result: &ToggleResult) -> String {
    use food_core::ParticipationField::{Finished, Going};
    use food_core::AUTO_EXPIRY_THRESHOLD;

    match (result.field, result.is_marking) {
        (Finished, true) if result.auto_expired => format!(
            "This post has been marked as finished by {AUTO_EXPIRY_THRESHOLD} users and is now automatically expired!"
        ),
        (Finished, true) => "Marked as finished.".to_string(),
        (Finished, false) => "Unmarked as finished.".to_string(),
        (Going, true) => "Marked as going.".to_string(),
        (Going, false) => "No longer going.".to_string(),
    }
}

/// Build a marker from a placed overlay and its post
pub fn marker_response(overlay: &Overlay<PostId>, post: &FoodPost, now: DateTime<Utc>) -> MarkerResponse {
    let color = MarkerColor::for_post(post, now);
    MarkerResponse {
        post_id: overlay.handle,
        title: post.title.clone(),
        location: post.location.clone(),
        lat: overlay.position.lat,
        lng: overlay.position.lng,
        color,
        color_hex: color.hex(),
        finished_count: post.finished_by.len(),
        going_count: post.going_by.len(),
        expires_at: post.expires_at,
        time_status: time_status(post.expires_at, now),
    }
}
