use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::merge;
use crate::{
    store::Record,
    validation::{Validate, ValidationErrors, Validator},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub is_read: bool,
}

/// Body of POST /api/contact.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContactMessageRequest {
    pub is_read: Option<bool>,
}

impl Record for ContactMessage {
    type Draft = ContactRequest;
    type Patch = UpdateContactMessageRequest;

    fn id(&self) -> i64 {
        self.id
    }

    fn from_draft(id: i64, req: ContactRequest, now: DateTime<Utc>) -> Self {
        ContactMessage {
            id,
            name: req.name.trim().to_string(),
            email: req.email.trim().to_string(),
            subject: req.subject,
            message: req.message,
            created_at: now,
            is_read: false,
        }
    }

    fn apply_patch(&mut self, patch: UpdateContactMessageRequest) {
        merge(&mut self.is_read, patch.is_read);
    }
}

pub const MIN_MESSAGE_LEN: usize = 10;

impl Validate for ContactRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .required("name", &self.name)
            .email("email", &self.email)
            .required("subject", &self.subject)
            .min_len("message", &self.message, MIN_MESSAGE_LEN)
            .finish()
    }
}
