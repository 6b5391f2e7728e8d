use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::merge_opt;
use crate::{
    store::Record,
    validation::{Validate, ValidationErrors, Validator},
};

/// Funds reported by name in metrics; any other fund counts as "other".
pub const KNOWN_FUNDS: &[&str] = &["General", "Zakat", "Sadaqah", "Masjid Expansion", "Education"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    pub id: i64,
    /// Minor currency units (cents).
    pub amount: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    /// "one-time" or "monthly".
    pub donation_type: String,
    pub fund: String,
    pub transaction_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDonationRequest {
    pub amount: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub donation_type: String,
    pub fund: String,
    #[serde(default)]
    pub transaction_id: Option<String>,
}

/// The payment processor reference arrives after the pledge is recorded.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDonationRequest {
    pub transaction_id: Option<String>,
}

impl Donation {
    /// `fund` folded onto [`KNOWN_FUNDS`] or `"other"`.
    pub fn fund_label(&self) -> &'static str {
        let fund = self.fund.trim();
        KNOWN_FUNDS
            .iter()
            .find(|known| known.eq_ignore_ascii_case(fund))
            .copied()
            .unwrap_or("other")
    }

    pub fn donation_type_label(&self) -> &'static str {
        match self.donation_type.trim().to_ascii_lowercase().as_str() {
            "one-time" => "one-time",
            "monthly" => "monthly",
            _ => "other",
        }
    }
}

impl Record for Donation {
    type Draft = CreateDonationRequest;
    type Patch = UpdateDonationRequest;

    fn id(&self) -> i64 {
        self.id
    }

    fn from_draft(id: i64, req: CreateDonationRequest, now: DateTime<Utc>) -> Self {
        Donation {
            id,
            amount: req.amount,
            name: req.name,
            email: req.email,
            donation_type: req.donation_type,
            fund: req.fund,
            transaction_id: req.transaction_id,
            created_at: now,
        }
    }

    fn apply_patch(&mut self, patch: UpdateDonationRequest) {
        merge_opt(&mut self.transaction_id, patch.transaction_id);
    }
}

impl Validate for CreateDonationRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .positive("amount", self.amount)
            .optional_email("email", self.email.as_deref())
            .required("donationType", &self.donation_type)
            .required("fund", &self.fund)
            .finish()
    }
}
