//! Lead record captured by the signup form, and its validation rules.

use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use regex::Regex;

/// `local@domain.tld` with no whitespace and exactly one `@` per part
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Contact and company details a prospect submits through the signup form.
///
/// Field names double as the column names of the remote HR users table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeadRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company_name: String,
}

/// One input of the signup form
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LeadField {
    FirstName,
    LastName,
    Email,
    CompanyName,
}

impl LeadField {
    /// All fields in form order
    pub const ALL: [LeadField; 4] = [
        LeadField::FirstName,
        LeadField::LastName,
        LeadField::Email,
        LeadField::CompanyName,
    ];

    /// Column name in the remote table
    pub fn column(&self) -> &'static str {
        match self {
            LeadField::FirstName => "first_name",
            LeadField::LastName => "last_name",
            LeadField::Email => "email",
            LeadField::CompanyName => "company_name",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            LeadField::FirstName => "First Name",
            LeadField::LastName => "Last Name",
            LeadField::Email => "Work Email",
            LeadField::CompanyName => "Company Name",
        }
    }

    /// HTML input type
    pub fn input_type(&self) -> &'static str {
        match self {
            LeadField::Email => "email",
            _ => "text",
        }
    }

    pub fn autocomplete(&self) -> &'static str {
        match self {
            LeadField::FirstName => "given-name",
            LeadField::LastName => "family-name",
            LeadField::Email => "email",
            LeadField::CompanyName => "organization",
        }
    }
}

impl std::fmt::Display for LeadField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.placeholder())
    }
}

/// Everything that can stop a lead from being captured
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LeadError {
    #[error("{0} is required")]
    MissingField(LeadField),

    #[error("Email address is not valid")]
    InvalidEmail,

    #[error("Lead could not be saved")]
    SubmissionFailure,
}

impl LeadError {
    /// Stable machine-readable code used in API responses
    pub fn code(&self) -> &'static str {
        match self {
            LeadError::MissingField(_) => "MISSING_FIELD",
            LeadError::InvalidEmail => "INVALID_EMAIL",
            LeadError::SubmissionFailure => "SUBMISSION_FAILED",
        }
    }
}

impl LeadRecord {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        company_name: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            company_name: company_name.into(),
        }
    }

    pub fn get(&self, field: LeadField) -> &str {
        match field {
            LeadField::FirstName => &self.first_name,
            LeadField::LastName => &self.last_name,
            LeadField::Email => &self.email,
            LeadField::CompanyName => &self.company_name,
        }
    }

    pub fn set(&mut self, field: LeadField, value: impl Into<String>) {
        let slot = match field {
            LeadField::FirstName => &mut self.first_name,
            LeadField::LastName => &mut self.last_name,
            LeadField::Email => &mut self.email,
            LeadField::CompanyName => &mut self.company_name,
        };
        *slot = value.into();
    }

    /// Check presence of every field, then the email shape.
    ///
    /// Presence means non-empty; whitespace-only values count as present.
    pub fn validate(&self) -> Result<(), LeadError> {
        if let Some(field) = LeadField::ALL
            .into_iter()
            .find(|field| self.get(*field).is_empty())
        {
            return Err(LeadError::MissingField(field));
        }

        if !is_valid_email(&self.email) {
            return Err(LeadError::InvalidEmail);
        }

        Ok(())
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> LeadRecord {
        LeadRecord::new("Jane", "Doe", "jane@acme.com", "Acme")
    }

    #[test]
    fn test_valid_record_passes() {
        assert_eq!(jane().validate(), Ok(()));
    }

    #[test]
    fn test_each_empty_field_is_missing() {
        for field in LeadField::ALL {
            let mut lead = jane();
            lead.set(field, "");
            assert_eq!(lead.validate(), Err(LeadError::MissingField(field)));
        }
    }

    #[test]
    fn test_empty_record_reports_first_field() {
        let lead = LeadRecord::default();
        assert_eq!(
            lead.validate(),
            Err(LeadError::MissingField(LeadField::FirstName))
        );
    }

    #[test]
    fn test_missing_field_wins_over_bad_email() {
        let mut lead = jane();
        lead.email = "not-an-email".to_string();
        lead.company_name.clear();
        assert_eq!(
            lead.validate(),
            Err(LeadError::MissingField(LeadField::CompanyName))
        );
    }

    #[test]
    fn test_whitespace_only_counts_as_present() {
        let mut lead = jane();
        lead.last_name = "   ".to_string();
        assert_eq!(lead.validate(), Ok(()));
    }

    #[test]
    fn test_email_shapes() {
        let accepted = ["a@b.co", "jane@acme.com", "first.last@mail.example.org", "x+tag@y.z"];
        let rejected = [
            "a@b",
            "a.b.com",
            "@b.co",
            "a@.co",
            "a@b.",
            "a b@c.de",
            "a@b c.de",
            "a@@b.co",
            "a@b@c.de",
            "",
        ];

        for email in accepted {
            assert!(is_valid_email(email), "{email} should be accepted");
        }
        for email in rejected {
            assert!(!is_valid_email(email), "{email} should be rejected");
        }
    }

    #[test]
    fn test_invalid_email_error() {
        let mut lead = jane();
        lead.email = "jane@acme".to_string();
        assert_eq!(lead.validate(), Err(LeadError::InvalidEmail));
    }

    #[test]
    fn test_set_and_get_roundtrip_per_field() {
        let mut lead = LeadRecord::default();
        lead.set(LeadField::Email, "a@b.co");
        lead.set(LeadField::CompanyName, String::from("Acme"));

        assert_eq!(lead.get(LeadField::Email), "a@b.co");
        assert_eq!(lead.get(LeadField::CompanyName), "Acme");
        assert_eq!(lead.get(LeadField::FirstName), "");
    }

    #[test]
    fn test_serializes_with_table_columns() {
        let value = serde_json::to_value(jane()).unwrap();
        for field in LeadField::ALL {
            assert_eq!(value[field.column()], jane().get(field));
        }
        assert_eq!(value.as_object().unwrap().len(), 4);
    }

    #[test]
    fn test_error_codes_and_messages() {
        let missing = LeadError::MissingField(LeadField::Email);
        assert_eq!(missing.code(), "MISSING_FIELD");
        assert_eq!(missing.to_string(), "Work Email is required");
        assert_eq!(LeadError::InvalidEmail.code(), "INVALID_EMAIL");
        assert_eq!(LeadError::SubmissionFailure.code(), "SUBMISSION_FAILED");
    }
}
