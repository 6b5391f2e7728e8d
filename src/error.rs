use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::{
    store::{users::UserError, StoreError},
    validation::ValidationErrors,
};

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(ValidationErrors),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(&'static str),

    #[error("{0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        ApiError::Internal(e.into())
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(e: ValidationErrors) -> Self {
        ApiError::Validation(e)
    }
}

impl From<UserError> for ApiError {
    fn from(e: UserError) -> Self {
        match e {
            UserError::Invalid(errors) => ApiError::Validation(errors),
            UserError::UsernameTaken(_) => ApiError::Conflict(e.to_string()),
            UserError::Hash(_) => ApiError::Internal(e.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::Validation(errors) => json!({
                "error": self.to_string(),
                "details": errors.fields(),
            }),
            ApiError::Internal(e) => {
                error!("Internal error: {e:#}");
                json!({ "error": "Internal server error" })
            }
            _ => json!({ "error": self.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Validator;

    #[test]
    fn maps_each_variant_to_its_status() {
        let mut v = Validator::new();
        v.required("name", "");
        let validation = ApiError::from(v.finish().unwrap_err());
        assert_eq!(validation.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotFound("Event not found").status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::Conflict("taken".into()).status(), StatusCode::CONFLICT);
        assert_eq!(
            ApiError::Internal(anyhow::anyhow!("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn duplicate_username_is_a_conflict() {
        use crate::{models::user::CreateUserRequest, store::users::UserDirectory};

        let users = UserDirectory::with_cost(4);
        let req = CreateUserRequest { username: "admin".into(), password: "bismillah123".into() };
        users.create(&req).await.unwrap();

        let err = ApiError::from(users.create(&req).await.unwrap_err());
        assert_eq!(err.status(), StatusCode::CONFLICT);
        assert_eq!(err.to_string(), "Username already taken: admin");

        let short = CreateUserRequest { username: "imam".into(), password: "short".into() };
        let err = ApiError::from(users.create(&short).await.unwrap_err());
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn validation_message_lists_fields() {
        let mut v = Validator::new();
        v.required("name", " ");
        v.email("email", "nope");
        let err = ApiError::from(v.finish().unwrap_err());
        let msg = err.to_string();
        assert!(msg.starts_with("Validation error: "));
        assert!(msg.contains("name"));
        assert!(msg.contains("email"));
    }
}
