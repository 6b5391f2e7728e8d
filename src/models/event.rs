use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{defaults, merge, merge_opt};
use crate::{
    store::Record,
    validation::{Validate, ValidationErrors, Validator},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    #[default]
    Regular,
    Special,
}

/// A scheduled gathering. `start_time`/`end_time` are display strings kept
/// independently of `date`/`end_date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub start_time: String,
    pub end_time: Option<String>,
    pub location: String,
    pub organizer: Option<String>,
    pub is_active: bool,
    pub event_type: EventType,
    pub is_recurring: bool,
    /// e.g. "Friday"; only meaningful when `is_recurring` is set.
    pub recurring_day: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    pub start_time: String,
    #[serde(default)]
    pub end_time: Option<String>,
    pub location: String,
    #[serde(default)]
    pub organizer: Option<String>,
    #[serde(default = "defaults::active")]
    pub is_active: bool,
    #[serde(default)]
    pub event_type: EventType,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default)]
    pub recurring_day: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub location: Option<String>,
    pub organizer: Option<String>,
    pub is_active: Option<bool>,
    pub event_type: Option<EventType>,
    pub is_recurring: Option<bool>,
    pub recurring_day: Option<String>,
}

impl Record for Event {
    type Draft = CreateEventRequest;
    type Patch = UpdateEventRequest;

    fn id(&self) -> i64 {
        self.id
    }

    fn from_draft(id: i64, req: CreateEventRequest, _now: DateTime<Utc>) -> Self {
        Event {
            id,
            title: req.title,
            description: req.description,
            date: req.date,
            end_date: req.end_date,
            start_time: req.start_time,
            end_time: req.end_time,
            location: req.location,
            organizer: req.organizer,
            is_active: req.is_active,
            event_type: req.event_type,
            is_recurring: req.is_recurring,
            recurring_day: req.recurring_day,
        }
    }

    fn apply_patch(&mut self, patch: UpdateEventRequest) {
        merge(&mut self.title, patch.title);
        merge(&mut self.description, patch.description);
        merge(&mut self.date, patch.date);
        merge_opt(&mut self.end_date, patch.end_date);
        merge(&mut self.start_time, patch.start_time);
        merge_opt(&mut self.end_time, patch.end_time);
        merge(&mut self.location, patch.location);
        merge_opt(&mut self.organizer, patch.organizer);
        merge(&mut self.is_active, patch.is_active);
        merge(&mut self.event_type, patch.event_type);
        merge(&mut self.is_recurring, patch.is_recurring);
        merge_opt(&mut self.recurring_day, patch.recurring_day);
    }

    fn active(&self) -> Option<bool> {
        Some(self.is_active)
    }
}

// Neither `is_recurring => recurring_day` nor `end_date >= date` is checked
// here; existing clients submit events that violate both.
impl Validate for CreateEventRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .required("title", &self.title)
            .required("description", &self.description)
            .required("startTime", &self.start_time)
            .required("location", &self.location)
            .finish()
    }
}
