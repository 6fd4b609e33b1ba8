//! Mock implementations and fixtures for integration tests.
//!
//! Re-exports the mocks from `healthhub::adapters::mock` and adds canned
//! data.

pub use healthhub::adapters::mock::{InMemoryStore, MockPlayer};

use healthhub::domain::{ContactForm, ContactSubject};
use healthhub::storage::PREFERENCES_KEY;

/// A contact form that passes validation.
pub fn valid_contact_form() -> ContactForm {
    ContactForm {
        name: "Ana Silva".to_string(),
        email: "ana@example.com".to_string(),
        subject: Some(ContactSubject::Nutrition),
        message: "Which snacks keep energy up in the afternoon?".to_string(),
        newsletter: false,
    }
}

/// A store already holding `json` as the preference record.
pub fn store_with_prefs(json: &str) -> InMemoryStore {
    InMemoryStore::with_value(PREFERENCES_KEY, json)
}
