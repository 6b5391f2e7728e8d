use axum::{
    extract::{Path, Query, State},
    Json,
};

use super::{parse_id, ActiveQuery};
use crate::{
    error::ApiResult,
    models::program::Program,
    services::programs::ProgramService,
    AppState,
};

/// GET /api/programs?active=true|false
pub async fn list_programs(
    State(state): State<AppState>,
    Query(params): Query<ActiveQuery>,
) -> ApiResult<Json<Vec<Program>>> {
    Ok(Json(ProgramService::list(&state.store, params.flag()?).await?))
}

/// GET /api/programs/{id}
pub async fn get_program(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Program>> {
    let id = parse_id(&id, "Program not found")?;
    Ok(Json(ProgramService::get(&state.store, id).await?))
}
