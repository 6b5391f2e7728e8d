use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::ApiResult,
    middleware::validated_json::ValidatedJson,
    models::contact::{ContactMessage, ContactRequest},
    services::contact::ContactService,
    AppState,
};

/// POST /api/contact
pub async fn submit_contact(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ContactRequest>,
) -> ApiResult<(StatusCode, Json<ContactMessage>)> {
    let message = ContactService::submit(&state.store, payload).await?;
    Ok((StatusCode::CREATED, Json(message)))
}
