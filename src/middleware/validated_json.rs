use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::{error::ApiError, validation::Validate};

/// JSON body that has been parsed and passed its field checks.
///
/// Malformed JSON, missing fields and failed checks all reject with a 400.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            let detail = rejection.body_text();
            warn!("Rejected request body: {detail}");
            ApiError::BadRequest(detail)
        })?;

        body.validate().map_err(|errors| {
            warn!("Validation failed: {errors}");
            ApiError::Validation(errors)
        })?;

        Ok(ValidatedJson(body))
    }
}
