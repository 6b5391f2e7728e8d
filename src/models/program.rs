use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{defaults, merge, merge_opt};
use crate::{
    store::Record,
    validation::{Validate, ValidationErrors, Validator},
};

/// A recurring class or circle (Qur'an study, youth halaqa, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Free text, e.g. "Saturdays and Sundays".
    pub schedule: String,
    pub time: Option<String>,
    pub instructor: Option<String>,
    pub image: Option<String>,
    pub location: String,
    pub cost: Option<String>,
    pub registration_required: bool,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProgramRequest {
    pub title: String,
    pub description: String,
    pub schedule: String,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub instructor: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default = "defaults::program_location")]
    pub location: String,
    #[serde(default)]
    pub cost: Option<String>,
    #[serde(default = "defaults::registration_required")]
    pub registration_required: bool,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default = "defaults::active")]
    pub is_active: bool,
}

impl CreateProgramRequest {
    /// Request with only the required fields; everything else defaulted.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        schedule: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            schedule: schedule.into(),
            time: None,
            instructor: None,
            image: None,
            location: defaults::program_location(),
            cost: None,
            registration_required: defaults::registration_required(),
            start_date: None,
            end_date: None,
            is_active: defaults::active(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProgramRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub schedule: Option<String>,
    pub time: Option<String>,
    pub instructor: Option<String>,
    pub image: Option<String>,
    pub location: Option<String>,
    pub cost: Option<String>,
    pub registration_required: Option<bool>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub is_active: Option<bool>,
}

impl Record for Program {
    type Draft = CreateProgramRequest;
    type Patch = UpdateProgramRequest;

    fn id(&self) -> i64 {
        self.id
    }

    fn from_draft(id: i64, req: CreateProgramRequest, _now: DateTime<Utc>) -> Self {
        Program {
            id,
            title: req.title,
            description: req.description,
            schedule: req.schedule,
            time: req.time,
            instructor: req.instructor,
            image: req.image,
            location: req.location,
            cost: req.cost,
            registration_required: req.registration_required,
            start_date: req.start_date,
            end_date: req.end_date,
            is_active: req.is_active,
        }
    }

    fn apply_patch(&mut self, patch: UpdateProgramRequest) {
        merge(&mut self.title, patch.title);
        merge(&mut self.description, patch.description);
        merge(&mut self.schedule, patch.schedule);
        merge_opt(&mut self.time, patch.time);
        merge_opt(&mut self.instructor, patch.instructor);
        merge_opt(&mut self.image, patch.image);
        merge(&mut self.location, patch.location);
        merge_opt(&mut self.cost, patch.cost);
        merge(&mut self.registration_required, patch.registration_required);
        merge_opt(&mut self.start_date, patch.start_date);
        merge_opt(&mut self.end_date, patch.end_date);
        merge(&mut self.is_active, patch.is_active);
    }

    fn active(&self) -> Option<bool> {
        Some(self.is_active)
    }
}

impl Validate for CreateProgramRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .required("title", &self.title)
            .required("description", &self.description)
            .required("schedule", &self.schedule)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_defaults_match_constructor_defaults() {
        let from_json: CreateProgramRequest = serde_json::from_str(
            r#"{ "title": "X", "description": "Tajweed basics", "schedule": "Mon" }"#,
        )
        .unwrap();
        let built = CreateProgramRequest::new("X", "Tajweed basics", "Mon");

        assert_eq!(from_json.location, "Main Prayer Hall");
        assert_eq!(from_json.location, built.location);
        assert!(from_json.registration_required && built.registration_required);
        assert!(from_json.is_active && built.is_active);
    }

    #[test]
    fn serializes_camel_case() {
        let program =
            Program::from_draft(1, CreateProgramRequest::new("X", "d", "Mon"), Utc::now());
        let value = serde_json::to_value(&program).unwrap();
        assert_eq!(value["registrationRequired"], true);
        assert_eq!(value["isActive"], true);
        assert!(value["startDate"].is_null());
    }
}
