use axum::{
    extract::{Path, Query, State},
    Json,
};

use super::{parse_id, ActiveQuery};
use crate::{
    error::ApiResult,
    models::announcement::Announcement,
    services::announcements::AnnouncementService,
    AppState,
};

/// GET /api/announcements?active=true|false
pub async fn list_announcements(
    State(state): State<AppState>,
    Query(params): Query<ActiveQuery>,
) -> ApiResult<Json<Vec<Announcement>>> {
    let announcements = AnnouncementService::list(&state.store, params.flag()?).await?;
    Ok(Json(announcements))
}

/// GET /api/announcements/{id}
pub async fn get_announcement(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Announcement>> {
    let id = parse_id(&id, "Announcement not found")?;
    let announcement = AnnouncementService::get(&state.store, id).await?;
    Ok(Json(announcement))
}
