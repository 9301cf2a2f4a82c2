//! Food post database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for food_posts table
#[derive(Debug, Clone, FromRow)]
pub struct FoodPostModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub location: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub servings: Option<String>,
    pub image_url: Option<String>,
    pub expires_at: DateTime<Utc>,
    /// NULL in rows written before the column default existed
    pub finished_by: Option<Vec<Uuid>>,
    pub going_by: Option<Vec<Uuid>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FoodPostModel {
    /// Column list shared by every post query
    pub const COLUMNS: &'static str = "id, user_id, title, description, location, latitude, \
         longitude, servings, image_url, expires_at, finished_by, going_by, created_at, updated_at";
}
