//! Map handlers

use axum::{extract::State, Json};
use food_service::{dto::ApiResponse, MapMarkersQuery, MapService, MarkerResponse};

use crate::extractors::ValidatedQuery;
use crate::response::ApiResult;
use crate::state::AppState;

/// Marker layout for the campus map
///
/// GET /map/markers?expired=false
pub async fn get_markers(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<MapMarkersQuery>,
) -> ApiResult<Json<ApiResponse<Vec<MarkerResponse>>>> {
    let service = MapService::new(state.service_context());
    let markers = service.markers(query.expired, query.limit()).await?;
    Ok(Json(ApiResponse::new(markers)))
}
