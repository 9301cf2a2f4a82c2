//! Caller-side cache of the dashboard lists

use chrono::{DateTime, Utc};

use crate::entities::FoodPost;
use crate::value_objects::{ParticipantSet, ParticipationField, PostId, UserId};

use super::status::partition;

/// The three lists a dashboard renders: active, expired, and the viewer's own.
///
/// Updates are applied only with values the store has already accepted; the
/// feed never guesses ahead of a write.
///
/// The server never holds one. It is for embedding clients: load the three
/// listing endpoints, feed each confirmed toggle back through
/// [`Self::apply_participants`], and call [`Self::remove`] once a toggle
/// reports auto-expiry or an owner action lands.
#[derive(Debug, Clone, Default)]
pub struct PostFeed {
    pub active: Vec<FoodPost>,
    pub expired: Vec<FoodPost>,
    pub mine: Vec<FoodPost>,
}

impl PostFeed {
    pub fn new(active: Vec<FoodPost>, expired: Vec<FoodPost>, mine: Vec<FoodPost>) -> Self {
        Self {
            active,
            expired,
            mine,
        }
    }

    /// Build all three lists from one snapshot of posts
    pub fn from_posts(posts: Vec<FoodPost>, viewer: Option<UserId>, now: DateTime<Utc>) -> Self {
        let mine = viewer
            .map(|viewer| {
                posts
                    .iter()
                    .filter(|post| post.is_owned_by(viewer))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        let (active, expired) = partition(posts, now);
        Self {
            active,
            expired,
            mine,
        }
    }

    /// Replace one participant set on every cached copy of `post_id`.
    ///
    /// Returns how many cached copies were updated.
    pub fn apply_participants(
        &mut self,
        post_id: PostId,
        field: ParticipationField,
        participants: &ParticipantSet,
    ) -> usize {
        let mut updated = 0;
        for post in self.posts_mut().filter(|post| post.id == post_id) {
            post.set_participants(field, participants.clone());
            updated += 1;
        }
        updated
    }

    /// Drop `post_id` from every list (after owner expiry or deletion)
    pub fn remove(&mut self, post_id: PostId) {
        self.active.retain(|post| post.id != post_id);
        self.expired.retain(|post| post.id != post_id);
        self.mine.retain(|post| post.id != post_id);
    }

    /// The list a view with the given toggles shows
    pub fn visible(&self, show_expired: bool, show_mine: bool) -> &[FoodPost] {
        if show_mine {
            &self.mine
        } else if show_expired {
            &self.expired
        } else {
            &self.active
        }
    }

    pub fn find(&self, post_id: PostId) -> Option<&FoodPost> {
        self.active
            .iter()
            .chain(&self.expired)
            .chain(&self.mine)
            .find(|post| post.id == post_id)
    }

    fn posts_mut(&mut self) -> impl Iterator<Item = &mut FoodPost> {
        self.active
            .iter_mut()
            .chain(self.expired.iter_mut())
            .chain(self.mine.iter_mut())
    }
}
