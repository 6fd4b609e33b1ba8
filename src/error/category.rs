//! Error category classification.
//!
//! Every failure in the hub falls into one of three categories, and the
//! category alone decides how it reaches the user.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// User input out of range or malformed.
    /// Shown as an error notification; the user corrects and retries.
    Validation,

    /// Storage read/write failure.
    /// Logged and swallowed; the app keeps running on in-memory state.
    Persistence,

    /// Media playback failure.
    /// Logged and surfaced as a generic notification.
    Playback,
}

impl ErrorCategory {
    /// Whether errors in this category reach the notification bar.
    pub fn is_user_visible(&self) -> bool {
        !matches!(self, ErrorCategory::Persistence)
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Validation => "validation",
            ErrorCategory::Persistence => "persistence",
            ErrorCategory::Playback => "playback",
        }
    }

    /// Returns a user-friendly description of the category.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCategory::Validation => "Invalid input",
            ErrorCategory::Persistence => "Could not save your data",
            ErrorCategory::Playback => "Audio problem",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
