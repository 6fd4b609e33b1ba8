//! Type definitions for the application state.
//!
//! - [`Field`] - Focusable controls, per view
//! - [`FieldKind`] - How a control takes input
//! - [`AppEvent`] - Input to [`App::dispatch`](super::App::dispatch)
//! - [`Effect`] - Side effects requested by dispatch

use crate::domain::{ContactSubmission, PlaybackCommand, UserPreferences, ViewId};

/// A focusable control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Feature card on the home view linking to another view.
    FeatureCard(ViewId),
    WaterWeight,
    CalculateWater,
    Activity,
    Duration,
    ActivityWeight,
    CalculateCalories,
    Anxiety,
    Sleep,
    Energy,
    CalculateAssessment,
    /// Meditation track selector and play/pause button.
    Track,
    ContactName,
    ContactEmail,
    ContactSubject,
    ContactMessage,
    Newsletter,
    SubmitContact,
}

/// How a field takes input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    Text,
    /// Number clamped to `[min, max]` when focus leaves the field.
    Numeric { min: f64, max: f64 },
    /// Cycled with Left/Right.
    Choice,
    Checkbox,
    Button,
    Link,
}

const HOME_FIELDS: &[Field] = &[
    Field::FeatureCard(ViewId::Nutrition),
    Field::FeatureCard(ViewId::Fitness),
    Field::FeatureCard(ViewId::Mental),
    Field::FeatureCard(ViewId::Contact),
];

const NUTRITION_FIELDS: &[Field] = &[Field::WaterWeight, Field::CalculateWater];

const FITNESS_FIELDS: &[Field] = &[
    Field::Activity,
    Field::Duration,
    Field::ActivityWeight,
    Field::CalculateCalories,
];

const MENTAL_FIELDS: &[Field] = &[
    Field::Anxiety,
    Field::Sleep,
    Field::Energy,
    Field::CalculateAssessment,
    Field::Track,
];

const CONTACT_FIELDS: &[Field] = &[
    Field::ContactName,
    Field::ContactEmail,
    Field::ContactSubject,
    Field::ContactMessage,
    Field::Newsletter,
    Field::SubmitContact,
];

impl Field {
    /// Focus order of the fields on `view`.
    pub fn for_view(view: ViewId) -> &'static [Field] {
        match view {
            ViewId::Home => HOME_FIELDS,
            ViewId::Nutrition => NUTRITION_FIELDS,
            ViewId::Fitness => FITNESS_FIELDS,
            ViewId::Mental => MENTAL_FIELDS,
            ViewId::Contact => CONTACT_FIELDS,
        }
    }

    pub fn kind(&self) -> FieldKind {
        use crate::domain::calculators::{
            ACTIVITY_WEIGHT_RANGE, DURATION_RANGE, WATER_WEIGHT_RANGE,
        };
        let numeric = |(min, max): (f64, f64)| FieldKind::Numeric { min, max };
        match self {
            Field::FeatureCard(_) => FieldKind::Link,
            Field::WaterWeight => numeric(WATER_WEIGHT_RANGE),
            Field::Duration => numeric(DURATION_RANGE),
            Field::ActivityWeight => numeric(ACTIVITY_WEIGHT_RANGE),
            Field::Activity
            | Field::Anxiety
            | Field::Sleep
            | Field::Energy
            | Field::Track
            | Field::ContactSubject => FieldKind::Choice,
            Field::ContactName | Field::ContactEmail | Field::ContactMessage => FieldKind::Text,
            Field::Newsletter => FieldKind::Checkbox,
            Field::CalculateWater
            | Field::CalculateCalories
            | Field::CalculateAssessment
            | Field::SubmitContact => FieldKind::Button,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::FeatureCard(view) => view.title(),
            Field::WaterWeight => "Weight (kg)",
            Field::CalculateWater => "Calculate",
            Field::Activity => "Activity",
            Field::Duration => "Duration (minutes)",
            Field::ActivityWeight => "Weight (kg)",
            Field::CalculateCalories => "Calculate",
            Field::Anxiety => "How often do you feel anxious?",
            Field::Sleep => "How would you rate your sleep problems?",
            Field::Energy => "How would you rate your energy levels?",
            Field::CalculateAssessment => "Get Results",
            Field::Track => "Guided meditation",
            Field::ContactName => "Name",
            Field::ContactEmail => "Email",
            Field::ContactSubject => "Subject",
            Field::ContactMessage => "Message",
            Field::Newsletter => "Subscribe to our newsletter",
            Field::SubmitContact => "Send Message",
        }
    }
}

/// Input to the app state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Clock advanced; fire due timers.
    Tick,
    /// User asked for a view (tab key, feature card).
    Navigate(ViewId),
    /// History cursor moved to this view.
    HistoryPop(ViewId),
    Back,
    Forward,
    FocusNext,
    FocusPrev,
    Char(char),
    Backspace,
    /// Step a choice field: -1 left, +1 right.
    Adjust(i8),
    /// Enter on the focused field.
    Activate,
    /// Restart the selected meditation track.
    Restart,
    Scroll(i16),
    /// Close the notification.
    Dismiss,
    /// An effect failed in a way the user should hear about.
    EffectFailed(String),
    Quit,
}

/// Side effect requested by dispatch, executed by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Persist the whole preference record.
    SavePreferences(UserPreferences),
    AppendSubmission(ContactSubmission),
    PushHistory(ViewId),
    HistoryBack,
    HistoryForward,
    Playback {
        command: PlaybackCommand,
        track: String,
    },
}
