use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::ApiResult,
    middleware::validated_json::ValidatedJson,
    models::donation::{CreateDonationRequest, Donation},
    services::donations::DonationService,
    AppState,
};

/// POST /api/donations
pub async fn create_donation(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateDonationRequest>,
) -> ApiResult<(StatusCode, Json<Donation>)> {
    let donation = DonationService::record(&state.store, payload).await?;
    Ok((StatusCode::CREATED, Json(donation)))
}
