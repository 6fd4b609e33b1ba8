//! Domain objects for the hub.
//!
//! Everything here is pure data and pure functions; nothing touches the
//! terminal, the clock or the disk.
//!
//! ## Domain Objects
//!
//! - [`ViewId`] - The five page views
//! - [`validate`] - Range clamping and email checks
//! - [`calculators`] - Water, calories and wellness assessment
//! - [`UserPreferences`] - The persisted preference record
//! - [`ContactForm`] / [`ContactSubmission`] - The mock contact form
//! - [`MeditationTrack`] - Guided meditation audio
//! - [`tips`] - Daily health tip rotation

pub mod calculators;
pub mod contact;
pub mod meditation;
pub mod preferences;
pub mod tips;
pub mod validate;
pub mod view;

pub use calculators::{
    assess, calories_burned, water_intake, Activity, AssessmentInput, AssessmentResult,
    CalorieResult, Tier, WaterResult,
};
pub use contact::{ContactForm, ContactSubject, ContactSubmission};
pub use meditation::{MeditationTrack, PlaybackCommand};
pub use preferences::{LastActivity, LastAssessment, UserPreferences};
pub use validate::{is_valid_email, parse_number, validate_range, RangeCheck};
pub use view::ViewId;
