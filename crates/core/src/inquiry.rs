//! Export and contact inquiry records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Email, InquiryId, InquiryStatus, InquiryType};
use crate::validate::{FieldError, require_non_empty};

/// An inquiry submission payload from the export or contact form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInquiry {
    #[serde(rename = "type")]
    pub inquiry_type: InquiryType,
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

impl NewInquiry {
    /// Validate the payload, returning every invalid field.
    ///
    /// # Errors
    ///
    /// Returns a field error for a blank name, a malformed email, or a blank
    /// message.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        require_non_empty(&mut errors, "name", &self.name);
        if let Err(e) = Email::parse(self.email.trim()) {
            errors.push(FieldError::new("email", e.to_string()));
        }
        require_non_empty(&mut errors, "message", &self.message);

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// A recorded inquiry, created from an accepted submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: InquiryId,
    #[serde(rename = "type")]
    pub inquiry_type: InquiryType,
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub status: InquiryStatus,
    pub created_at: DateTime<Utc>,
}

impl Inquiry {
    /// Create an inquiry record from an accepted submission. New inquiries
    /// always start in the `new` status.
    #[must_use]
    pub fn create(id: InquiryId, new: NewInquiry, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            inquiry_type: new.inquiry_type,
            name: new.name,
            email: new.email,
            message: new.message,
            company: new.company,
            country: new.country,
            subject: new.subject,
            status: InquiryStatus::New,
            created_at,
        }
    }
}
