use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::{parse_id, ActiveQuery};
use crate::{
    error::ApiResult,
    middleware::validated_json::ValidatedJson,
    models::{
        event::Event,
        registration::{EventRegistrationRequest, Registration},
    },
    services::events::EventService,
    AppState,
};

/// GET /api/events?active=true|false
pub async fn list_events(
    State(state): State<AppState>,
    Query(params): Query<ActiveQuery>,
) -> ApiResult<Json<Vec<Event>>> {
    Ok(Json(EventService::list(&state.store, params.flag()?).await?))
}

/// GET /api/events/{id}
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Event>> {
    let id = parse_id(&id, "Event not found")?;
    Ok(Json(EventService::get(&state.store, id).await?))
}

/// POST /api/events/register; 404 when the event does not exist.
pub async fn register_for_event(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<EventRegistrationRequest>,
) -> ApiResult<(StatusCode, Json<Registration>)> {
    let registration = EventService::register(&state.store, body).await?;
    Ok((StatusCode::CREATED, Json(registration)))
}
