//! Editable form state for each view.

use crate::domain::{
    parse_number, validate_range, Activity, AssessmentInput, AssessmentResult, CalorieResult,
    ContactForm, ContactSubject, ContactSubmission, RangeCheck, WaterResult,
};
use crate::traits::PlayerStatus;

use super::timers::TimerToken;
use super::types::FieldKind;

/// Append `c` to a field buffer if the field accepts it.
///
/// Returns `true` if the buffer changed.
pub fn push_char(buffer: &mut String, c: char, kind: FieldKind) -> bool {
    let accepted = match kind {
        FieldKind::Text => !c.is_control(),
        FieldKind::Numeric { .. } => c.is_ascii_digit() || c == '.' || c == '-',
        _ => false,
    };
    if accepted {
        buffer.push(c);
    }
    accepted
}

/// Clamp a numeric buffer into `[min, max]`.
///
/// Returns the warning to show when the value was clamped. Empty or
/// unparsable buffers are left alone; the calculator reports them.
pub fn clamp_buffer(buffer: &mut String, min: f64, max: f64) -> Option<String> {
    let value = parse_number(buffer)?;
    match validate_range(value, min, max) {
        RangeCheck::Clamped { value, warning } => {
            *buffer = value.to_string();
            Some(warning)
        }
        RangeCheck::Ok(_) | RangeCheck::Rejected => None,
    }
}

/// Step a 1-5 rating. Unanswered starts from the end nearest the step.
pub fn step_rating(rating: Option<u8>, delta: i8) -> Option<u8> {
    match rating {
        None if delta > 0 => Some(1),
        None => Some(5),
        Some(r) => Some((r as i16 + delta as i16).clamp(1, 5) as u8),
    }
}

/// Step an index through `len` entries, wrapping.
pub fn step_index(index: usize, delta: i8, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (index as i64 + delta as i64).rem_euclid(len as i64) as usize
}

/// Water calculator on the nutrition view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WaterForm {
    pub weight: String,
    pub result: Option<WaterResult>,
}

/// Calorie calculator on the fitness view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityForm {
    /// Index into [`Activity::CHOICES`].
    pub activity: usize,
    pub duration: String,
    pub weight: String,
    pub result: Option<CalorieResult>,
}

impl ActivityForm {
    pub fn selected_activity(&self) -> Activity {
        Activity::CHOICES
            .get(self.activity)
            .cloned()
            .unwrap_or(Activity::Walking)
    }
}

/// Wellness questionnaire on the mental view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssessmentForm {
    pub input: AssessmentInput,
    pub result: Option<AssessmentResult>,
}

/// Contact form submission state.
#[derive(Debug, Clone, PartialEq)]
pub enum ContactStatus {
    Editing,
    /// Waiting for the simulated send to complete.
    Sending {
        token: TimerToken,
        submission: ContactSubmission,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactState {
    pub form: ContactForm,
    pub status: ContactStatus,
}

impl Default for ContactState {
    fn default() -> Self {
        Self {
            form: ContactForm::default(),
            status: ContactStatus::Editing,
        }
    }
}

impl ContactState {
    pub fn is_sending(&self) -> bool {
        matches!(self.status, ContactStatus::Sending { .. })
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_sending() {
            "Sending..."
        } else {
            "Send Message"
        }
    }

    /// Step the subject select: unselected, then each subject in order.
    pub fn step_subject(&mut self, delta: i8) {
        let position = self
            .form
            .subject
            .and_then(|s| ContactSubject::ALL.iter().position(|x| *x == s))
            .map(|i| i + 1)
            .unwrap_or(0);
        let next = step_index(position, delta, ContactSubject::ALL.len() + 1);
        self.form.subject = next.checked_sub(1).map(|i| ContactSubject::ALL[i]);
    }
}

/// Meditation player selection and the last reported status.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerPanel {
    pub selected: usize,
    pub status: PlayerStatus,
}

impl Default for PlayerPanel {
    fn default() -> Self {
        Self {
            selected: 0,
            status: PlayerStatus::Stopped,
        }
    }
}
