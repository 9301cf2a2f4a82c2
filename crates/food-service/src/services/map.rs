//! Map service
//!
//! Lays out one marker per post with coordinates, nudging markers that
//! would sit on top of each other.

use chrono::Utc;
use tracing::{debug, instrument};

use food_core::{OverlayRegistry, PostId};

use crate::dto::mappers::marker_response;
use crate::dto::MarkerResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Map service
pub struct MapService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MapService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Markers for active posts, or for expired ones when `expired` is set
    #[instrument(skip(self))]
    pub async fn markers(&self, expired: bool, limit: i64) -> ServiceResult<Vec<MarkerResponse>> {
        let now = Utc::now();
        let repo = self.ctx.post_repo();
        let shown = if expired {
            repo.find_expired(now, limit).await
        } else {
            repo.find_active(now, limit).await
        }
        .map_err(ServiceError::read_failure)?;

        let mut registry: OverlayRegistry<PostId> = OverlayRegistry::new();
        let mut markers = Vec::with_capacity(shown.len());
        let located = shown
            .iter()
            .filter_map(|post| post.coordinates.map(|coords| (post, coords)));
        for (index, (post, coords)) in located.enumerate() {
            let position = registry.place(coords, index);
            registry.add(post.id, position);
            if let Some(overlay) = registry.get(index) {
                markers.push(marker_response(overlay, post, now));
            }
        }

        debug!(
            shown = shown.len(),
            placed = registry.len(),
            "Map markers laid out"
        );
        Ok(markers)
    }
}
