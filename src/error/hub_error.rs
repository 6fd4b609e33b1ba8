//! Unified error type for the hub.
//!
//! `HubError` wraps the three domain error families so callers that do not
//! care which one occurred can still categorize it and pick the right
//! user-facing treatment.

use thiserror::Error;

use super::category::ErrorCategory;
use super::persistence::PersistenceError;
use super::playback::{PlaybackError, PLAYBACK_USER_MESSAGE};
use super::validation::ValidationError;

/// Unified error type for the hub.
#[derive(Debug, Error)]
pub enum HubError {
    /// Input was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Storage failed.
    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    /// Media failed.
    #[error(transparent)]
    Playback(#[from] PlaybackError),
}

impl HubError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            HubError::Validation(_) => ErrorCategory::Validation,
            HubError::Persistence(_) => ErrorCategory::Persistence,
            HubError::Playback(_) => ErrorCategory::Playback,
        }
    }

    /// Whether the error should appear in the notification bar.
    pub fn is_user_visible(&self) -> bool {
        self.category().is_user_visible()
    }

    /// Message for the notification bar.
    ///
    /// Validation errors carry their own wording; playback errors share one
    /// generic message; persistence errors are never shown but still get
    /// a sensible string for completeness.
    pub fn user_message(&self) -> String {
        match self {
            HubError::Validation(err) => err.to_string(),
            HubError::Playback(_) => PLAYBACK_USER_MESSAGE.to_string(),
            HubError::Persistence(_) => self.category().description().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_validation_is_visible_with_own_message() {
        let err: HubError = ValidationError::IncompleteAssessment.into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.is_user_visible());
        assert_eq!(err.user_message(), "Please answer all questions");
    }

    #[test]
    fn test_persistence_is_silent() {
        let err: HubError = PersistenceError::Unavailable {
            key: "k".to_string(),
            reason: "full".to_string(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Persistence);
        assert!(!err.is_user_visible());
    }

    #[test]
    fn test_playback_uses_generic_message() {
        let err: HubError = PlaybackError::SourceMissing {
            track: "t".to_string(),
            path: PathBuf::from("/nope"),
        }
        .into();
        assert_eq!(err.user_message(), PLAYBACK_USER_MESSAGE);
        // Details stay in the Display text for logs
        assert!(err.to_string().contains("/nope"));
    }
}
