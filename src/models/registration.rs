use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{defaults, merge, merge_opt};
use crate::{
    store::Record,
    validation::{Validate, ValidationErrors, Validator},
};

pub const MAX_ATTENDEES: u32 = 20;

/// A participant signed up for an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: i64,
    pub event_id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub attendees: u32,
    pub created_at: DateTime<Utc>,
}

/// Body of POST /api/events/register.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRegistrationRequest {
    pub event_id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default = "defaults::attendees")]
    pub attendees: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRegistrationRequest {
    pub phone: Option<String>,
    pub attendees: Option<u32>,
}

impl Record for Registration {
    type Draft = EventRegistrationRequest;
    type Patch = UpdateRegistrationRequest;

    fn id(&self) -> i64 {
        self.id
    }

    fn from_draft(id: i64, req: EventRegistrationRequest, now: DateTime<Utc>) -> Self {
        Registration {
            id,
            event_id: req.event_id,
            name: req.name.trim().to_string(),
            email: req.email.trim().to_string(),
            phone: req.phone,
            attendees: req.attendees,
            created_at: now,
        }
    }

    fn apply_patch(&mut self, patch: UpdateRegistrationRequest) {
        merge_opt(&mut self.phone, patch.phone);
        merge(&mut self.attendees, patch.attendees);
    }
}

impl Validate for EventRegistrationRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .positive("eventId", self.event_id)
            .required("name", &self.name)
            .email("email", &self.email)
            .range("attendees", i64::from(self.attendees), 1, i64::from(MAX_ATTENDEES))
            .finish()
    }
}
