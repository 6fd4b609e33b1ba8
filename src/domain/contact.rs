//! Contact form model.
//!
//! There is no backend: a valid submission is stored locally after a short
//! simulated send delay handled by the app layer.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validate::is_valid_email;
use crate::error::ValidationError;

/// Shortest accepted message, in characters after trimming.
pub const MIN_MESSAGE_LEN: usize = 10;

/// Topic picked from the subject dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactSubject {
    General,
    Nutrition,
    Fitness,
    Mental,
    Feedback,
}

impl ContactSubject {
    pub const ALL: [ContactSubject; 5] = [
        ContactSubject::General,
        ContactSubject::Nutrition,
        ContactSubject::Fitness,
        ContactSubject::Mental,
        ContactSubject::Feedback,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ContactSubject::General => "General Inquiry",
            ContactSubject::Nutrition => "Nutrition Question",
            ContactSubject::Fitness => "Fitness Advice",
            ContactSubject::Mental => "Mental Health Support",
            ContactSubject::Feedback => "Website Feedback",
        }
    }
}

impl fmt::Display for ContactSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw form contents as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: Option<ContactSubject>,
    pub message: String,
    pub newsletter: bool,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            subject: None,
            message: String::new(),
            newsletter: true,
        }
    }
}

impl ContactForm {
    /// Check the form and produce the record to store.
    ///
    /// Order of checks: required fields, email format, message length.
    pub fn validate(&self, timestamp: DateTime<Utc>) -> Result<ContactSubmission, ValidationError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();

        let Some(subject) = self.subject else {
            return Err(ValidationError::MissingContactFields);
        };
        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(ValidationError::MissingContactFields);
        }
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }
        if message.chars().count() < MIN_MESSAGE_LEN {
            return Err(ValidationError::MessageTooShort {
                min_len: MIN_MESSAGE_LEN,
            });
        }

        Ok(ContactSubmission {
            name: name.to_string(),
            email: email.to_string(),
            subject,
            message: message.to_string(),
            newsletter: self.newsletter,
            timestamp,
        })
    }
}

/// One stored contact form submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: ContactSubject,
    pub message: String,
    pub newsletter: bool,
    pub timestamp: DateTime<Utc>,
}
