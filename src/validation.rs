//! Field-level input checks.
//!
//! Request bodies implement [`Validate`]; the checks accumulate every failing
//! field instead of stopping at the first one so the client can fix the whole
//! form in one round trip.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn fields(&self) -> &[FieldError] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{joined}")
    }
}

impl std::error::Error for ValidationErrors {}

pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError { field, message: message.into() });
    }

    pub fn required(&mut self, field: &'static str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.fail(field, "is required");
        }
        self
    }

    pub fn min_len(&mut self, field: &'static str, value: &str, min: usize) -> &mut Self {
        if value.trim().chars().count() < min {
            self.fail(field, format!("must be at least {min} characters"));
        }
        self
    }

    pub fn email(&mut self, field: &'static str, value: &str) -> &mut Self {
        if !is_valid_email(value) {
            self.fail(field, "must be a valid email address");
        }
        self
    }

    pub fn optional_email(&mut self, field: &'static str, value: Option<&str>) -> &mut Self {
        match value {
            Some(v) if !v.trim().is_empty() => self.email(field, v),
            _ => self,
        }
    }

    pub fn positive(&mut self, field: &'static str, value: i64) -> &mut Self {
        if value <= 0 {
            self.fail(field, "must be greater than 0");
        }
        self
    }

    pub fn range(&mut self, field: &'static str, value: i64, min: i64, max: i64) -> &mut Self {
        if value < min || value > max {
            self.fail(field, format!("must be between {min} and {max}"));
        }
        self
    }

    pub fn finish(&mut self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(std::mem::take(&mut self.errors)))
        }
    }
}

fn is_valid_email(s: &str) -> bool {
    let s = s.trim();
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("imam@masjid.org"));
        assert!(is_valid_email("first.last+tag@sub.example.com"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        let bad_emails = [
            "",
            "no-at-sign",
            "@masjid.org",
            "a@b",
            "a@.org",
            "a@org.",
            "a b@c.org",
            "a@b@c.org",
        ];
        for bad in bad_emails {
            assert!(!is_valid_email(bad), "{bad} should be rejected");
        }
    }

    #[test]
    fn collects_every_failing_field() {
        let mut v = Validator::new();
        v.required("name", "")
            .email("email", "bad")
            .positive("amount", 0)
            .range("attendees", 25, 1, 20);
        let errors = v.finish().unwrap_err();
        let fields: Vec<_> = errors.fields().iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "email", "amount", "attendees"]);
    }

    #[test]
    fn optional_email_skips_absent_values() {
        let mut v = Validator::new();
        v.optional_email("email", None).optional_email("email", Some("  "));
        assert!(v.finish().is_ok());
    }
}
