use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{defaults, merge, merge_opt};
use crate::{
    store::Record,
    validation::{Validate, ValidationErrors, Validator},
};

/// A community business directory listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Business {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub category: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub logo_url: Option<String>,
    /// Offer for community members, e.g. "10% off with mosque ID".
    pub discount: Option<String>,
    pub featured: bool,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBusinessRequest {
    pub name: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub discount: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default = "defaults::active")]
    pub active: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBusinessRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub logo_url: Option<String>,
    pub discount: Option<String>,
    pub featured: Option<bool>,
    pub active: Option<bool>,
}

impl Record for Business {
    type Draft = CreateBusinessRequest;
    type Patch = UpdateBusinessRequest;

    fn id(&self) -> i64 {
        self.id
    }

    fn from_draft(id: i64, req: CreateBusinessRequest, now: DateTime<Utc>) -> Self {
        Business {
            id,
            name: req.name,
            description: req.description,
            category: req.category,
            address: req.address,
            phone: req.phone,
            email: req.email,
            website: req.website,
            logo_url: req.logo_url,
            discount: req.discount,
            featured: req.featured,
            active: req.active,
            created_at: now,
        }
    }

    fn apply_patch(&mut self, patch: UpdateBusinessRequest) {
        merge(&mut self.name, patch.name);
        merge(&mut self.description, patch.description);
        merge(&mut self.category, patch.category);
        merge_opt(&mut self.address, patch.address);
        merge_opt(&mut self.phone, patch.phone);
        merge_opt(&mut self.email, patch.email);
        merge_opt(&mut self.website, patch.website);
        merge_opt(&mut self.logo_url, patch.logo_url);
        merge_opt(&mut self.discount, patch.discount);
        merge(&mut self.featured, patch.featured);
        merge(&mut self.active, patch.active);
    }

    fn active(&self) -> Option<bool> {
        Some(self.active)
    }
}

impl Validate for CreateBusinessRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .required("name", &self.name)
            .required("description", &self.description)
            .required("category", &self.category)
            .optional_email("email", self.email.as_deref())
            .finish()
    }
}
