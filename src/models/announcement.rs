use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{defaults, merge};
use crate::{
    store::Record,
    validation::{Validate, ValidationErrors, Validator},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub date: DateTime<Utc>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAnnouncementRequest {
    pub title: String,
    pub content: String,
    /// Publication time; creation time when omitted.
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default = "defaults::active")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAnnouncementRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub is_active: Option<bool>,
}

impl Record for Announcement {
    type Draft = CreateAnnouncementRequest;
    type Patch = UpdateAnnouncementRequest;

    fn id(&self) -> i64 {
        self.id
    }

    fn from_draft(id: i64, req: CreateAnnouncementRequest, now: DateTime<Utc>) -> Self {
        Announcement {
            id,
            title: req.title,
            content: req.content,
            date: req.date.unwrap_or(now),
            is_active: req.is_active,
        }
    }

    fn apply_patch(&mut self, patch: UpdateAnnouncementRequest) {
        merge(&mut self.title, patch.title);
        merge(&mut self.content, patch.content);
        merge(&mut self.date, patch.date);
        merge(&mut self.is_active, patch.is_active);
    }

    fn active(&self) -> Option<bool> {
        Some(self.is_active)
    }
}

impl Validate for CreateAnnouncementRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .required("title", &self.title)
            .required("content", &self.content)
            .finish()
    }
}
