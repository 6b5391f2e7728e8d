use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::validation::{Validate, ValidationErrors, Validator};

pub const MIN_PASSWORD_LEN: usize = 8;

/// Site administrator account. Only the bcrypt hash of the password is kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
}

impl Validate for CreateUserRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .required("username", &self.username)
            .min_len("password", &self.password, MIN_PASSWORD_LEN)
            .finish()
    }
}
