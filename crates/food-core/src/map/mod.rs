//! Map overlay bookkeeping
//!
//! The map view draws one marker per post. Markers are tracked in an
//! [`OverlayRegistry`] owned by whoever renders them, so a redraw can take
//! every handle back and release it before placing the next batch.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::entities::FoodPost;
use crate::value_objects::Coordinates;

/// Two markers closer than this on both axes are treated as overlapping
pub const OVERLAP_TOLERANCE: f64 = 0.0001;

/// Per-index nudge applied to an overlapping marker
pub const OVERLAP_STEP: f64 = 0.0002;

/// Finished count at which an active post is shown as almost gone
pub const ALMOST_FINISHED_AT: usize = 2;

/// Marker color class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerColor {
    Active,
    AlmostFinished,
    Expired,
}

impl MarkerColor {
    pub fn for_post(post: &FoodPost, now: DateTime<Utc>) -> Self {
        if !post.is_active(now) {
            Self::Expired
        } else if post.finished_by.len() >= ALMOST_FINISHED_AT {
            Self::AlmostFinished
        } else {
            Self::Active
        }
    }

    pub fn hex(self) -> &'static str {
        match self {
            Self::Active => "#10b981",
            Self::AlmostFinished => "#f59e0b",
            Self::Expired => "#6b7280",
        }
    }
}

/// A placed marker and the handle the renderer gave it
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay<H> {
    pub handle: H,
    pub position: Coordinates,
}

/// Registry of markers currently on the map.
///
/// `H` is whatever the renderer uses to release a marker.
#[derive(Debug, Clone)]
pub struct OverlayRegistry<H> {
    overlays: Vec<Overlay<H>>,
}

impl<H> Default for OverlayRegistry<H> {
    fn default() -> Self {
        Self {
            overlays: Vec::new(),
        }
    }
}

impl<H> OverlayRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Position for the `index`-th marker of a batch wanting `requested`.
    ///
    /// If a registered marker already sits within [`OVERLAP_TOLERANCE`], the
    /// position is nudged by `index * OVERLAP_STEP` on both axes.
    pub fn place(&self, requested: Coordinates, index: usize) -> Coordinates {
        let overlaps = self
            .overlays
            .iter()
            .any(|overlay| overlay.position.is_near(&requested, OVERLAP_TOLERANCE));
        if overlaps {
            requested.offset(index as f64 * OVERLAP_STEP)
        } else {
            requested
        }
    }

    pub fn add(&mut self, handle: H, position: Coordinates) {
        self.overlays.push(Overlay { handle, position });
    }

    pub fn get(&self, index: usize) -> Option<&Overlay<H>> {
        self.overlays.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Overlay<H>> {
        self.overlays.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.overlays.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty()
    }

    /// Empty the registry, handing every handle back for release
    pub fn clear(&mut self) -> Vec<H> {
        self.overlays.drain(..).map(|overlay| overlay.handle).collect()
    }
}
