//! Validation errors raised by the calculators and the contact form.
//!
//! The `Display` text of each variant is the exact message shown to the user.

use thiserror::Error;

/// User input that cannot be used.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Water calculator weight missing or outside its range.
    #[error("Please enter a valid weight between {min} and {max} kg")]
    WaterWeight { min: f64, max: f64 },

    /// Calorie calculator duration missing or outside its range.
    #[error("Please enter duration between {min} and {max} minutes")]
    Duration { min: f64, max: f64 },

    /// Calorie calculator weight missing or outside its range.
    #[error("Please enter weight between {min} and {max} kg")]
    ActivityWeight { min: f64, max: f64 },

    /// One or more assessment questions unanswered.
    #[error("Please answer all questions")]
    IncompleteAssessment,

    /// A required contact field is blank.
    #[error("Please fill in all required fields.")]
    MissingContactFields,

    /// Contact email failed the format check.
    #[error("Please enter a valid email address.")]
    InvalidEmail,

    /// Contact message shorter than the minimum.
    #[error("Please provide a more detailed message (at least {min_len} characters).")]
    MessageTooShort { min_len: usize },
}
