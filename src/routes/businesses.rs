use axum::{
    extract::{Path, Query, State},
    Json,
};

use super::{parse_id, ActiveQuery};
use crate::{
    error::ApiResult,
    models::business::Business,
    services::businesses::BusinessService,
    AppState,
};

/// GET /api/businesses: active listings unless `active=false`.
pub async fn list_businesses(
    State(state): State<AppState>,
    Query(params): Query<ActiveQuery>,
) -> ApiResult<Json<Vec<Business>>> {
    let active = params.flag()?.unwrap_or(true);
    Ok(Json(BusinessService::list(&state.store, active).await?))
}

/// GET /api/businesses/featured
pub async fn featured_businesses(State(state): State<AppState>) -> ApiResult<Json<Vec<Business>>> {
    Ok(Json(BusinessService::featured(&state.store).await?))
}

/// GET /api/businesses/category/{category}
pub async fn businesses_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> ApiResult<Json<Vec<Business>>> {
    Ok(Json(BusinessService::by_category(&state.store, &category).await?))
}

/// GET /api/businesses/{id}
pub async fn get_business(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Business>> {
    let id = parse_id(&id, "Business not found")?;
    Ok(Json(BusinessService::get(&state.store, id).await?))
}
