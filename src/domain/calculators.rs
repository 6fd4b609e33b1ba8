//! Water, calorie and wellness-assessment calculators.
//!
//! All three are pure: they take already-parsed numbers and either reject
//! them with a [`ValidationError`] or return a result. Persisting and
//! displaying the result is the caller's job.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::validate::in_range;
use crate::error::ValidationError;

/// Accepted body weight for the water calculator (kg).
pub const WATER_WEIGHT_RANGE: (f64, f64) = (30.0, 200.0);
/// Liters of water per kg of body weight.
pub const WATER_LITERS_PER_KG: f64 = 0.035;

/// Accepted activity duration (minutes).
pub const DURATION_RANGE: (f64, f64) = (10.0, 180.0);
/// Accepted body weight for the calorie calculator (kg).
pub const ACTIVITY_WEIGHT_RANGE: (f64, f64) = (40.0, 150.0);
/// MET used for activities missing from the table.
pub const DEFAULT_MET: f64 = 5.0;

/// Lowest and highest answer on each assessment question.
pub const RATING_RANGE: (u8, u8) = (1, 5);

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

// ============================================================================
// Water
// ============================================================================

/// Recommended daily water intake.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterResult {
    pub weight_kg: f64,
    /// Liters, rounded to 2 decimals.
    pub liters: f64,
}

impl WaterResult {
    pub fn summary(&self) -> String {
        format!("Recommended Daily Water: {:.2} liters", self.liters)
    }
}

/// Daily water need: 35 ml per kg of body weight.
pub fn water_intake(weight_kg: f64) -> Result<WaterResult, ValidationError> {
    let (min, max) = WATER_WEIGHT_RANGE;
    if !in_range(weight_kg, min, max) {
        return Err(ValidationError::WaterWeight { min, max });
    }
    Ok(WaterResult {
        weight_kg,
        liters: round_to(weight_kg * WATER_LITERS_PER_KG, 2),
    })
}

// ============================================================================
// Calories
// ============================================================================

/// Exercise type for the calorie calculator.
///
/// Stored under the short names used by the activity picker (`weight` for
/// weight training). Names outside the table survive as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Activity {
    Walking,
    Running,
    Cycling,
    Swimming,
    WeightTraining,
    Other(String),
}

impl Activity {
    /// The picker choices, in display order.
    pub const CHOICES: [Activity; 5] = [
        Activity::Walking,
        Activity::Running,
        Activity::Cycling,
        Activity::Swimming,
        Activity::WeightTraining,
    ];

    /// Metabolic equivalent of task.
    pub fn met(&self) -> f64 {
        match self {
            Activity::Walking => 3.5,
            Activity::Running => 10.0,
            Activity::Cycling => 8.0,
            Activity::Swimming => 6.0,
            Activity::WeightTraining => 5.0,
            Activity::Other(_) => DEFAULT_MET,
        }
    }

    /// Stored identifier.
    pub fn as_str(&self) -> &str {
        match self {
            Activity::Walking => "walking",
            Activity::Running => "running",
            Activity::Cycling => "cycling",
            Activity::Swimming => "swimming",
            Activity::WeightTraining => "weight",
            Activity::Other(name) => name,
        }
    }

    /// Label for the picker.
    pub fn label(&self) -> &str {
        match self {
            Activity::Walking => "Walking (moderate pace)",
            Activity::Running => "Running (6 mph)",
            Activity::Cycling => "Cycling (moderate)",
            Activity::Swimming => "Swimming (general)",
            Activity::WeightTraining => "Weight Training",
            Activity::Other(name) => name,
        }
    }
}

impl From<String> for Activity {
    fn from(name: String) -> Self {
        match name.as_str() {
            "walking" => Activity::Walking,
            "running" => Activity::Running,
            "cycling" => Activity::Cycling,
            "swimming" => Activity::Swimming,
            "weight" | "weightTraining" => Activity::WeightTraining,
            _ => Activity::Other(name),
        }
    }
}

impl From<&str> for Activity {
    fn from(name: &str) -> Self {
        Activity::from(name.to_string())
    }
}

impl From<Activity> for String {
    fn from(activity: Activity) -> Self {
        activity.as_str().to_string()
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Calories burned during one activity session.
#[derive(Debug, Clone, PartialEq)]
pub struct CalorieResult {
    pub activity: Activity,
    pub duration_min: f64,
    pub weight_kg: f64,
    pub calories: u32,
}

impl CalorieResult {
    pub fn summary(&self) -> String {
        format!("Estimated Calories Burned: {} kcal", self.calories)
    }
}

/// `MET x weight(kg) x time(h)`, rounded to whole kcal.
///
/// Duration is checked before weight, so an input with both out of range
/// reports the duration.
pub fn calories_burned(
    activity: Activity,
    duration_min: f64,
    weight_kg: f64,
) -> Result<CalorieResult, ValidationError> {
    let (dmin, dmax) = DURATION_RANGE;
    if !in_range(duration_min, dmin, dmax) {
        return Err(ValidationError::Duration {
            min: dmin,
            max: dmax,
        });
    }
    let (wmin, wmax) = ACTIVITY_WEIGHT_RANGE;
    if !in_range(weight_kg, wmin, wmax) {
        return Err(ValidationError::ActivityWeight {
            min: wmin,
            max: wmax,
        });
    }

    let calories = (activity.met() * weight_kg * duration_min / 60.0).round() as u32;
    Ok(CalorieResult {
        activity,
        duration_min,
        weight_kg,
        calories,
    })
}

// ============================================================================
// Assessment
// ============================================================================

/// Answers to the three wellness questions. `None` means unanswered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssessmentInput {
    /// 1 = rarely anxious, 5 = constantly
    pub anxiety: Option<u8>,
    /// 1 = sleeping well, 5 = very poorly
    pub sleep: Option<u8>,
    /// 1 = exhausted, 5 = energetic (scored inverted)
    pub energy: Option<u8>,
}

impl AssessmentInput {
    pub fn new(anxiety: u8, sleep: u8, energy: u8) -> Self {
        Self {
            anxiety: Some(anxiety),
            sleep: Some(sleep),
            energy: Some(energy),
        }
    }

    fn rated(value: Option<u8>) -> Option<u8> {
        value.filter(|v| (RATING_RANGE.0..=RATING_RANGE.1).contains(v))
    }
}

/// Score band. Lower scores are better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Excellent,
    Good,
    Moderate,
    HighConcern,
}

impl Tier {
    /// Band for a score already rounded to one decimal.
    pub fn for_score(score: f64) -> Tier {
        if score <= 2.0 {
            Tier::Excellent
        } else if score <= 3.0 {
            Tier::Good
        } else if score <= 4.0 {
            Tier::Moderate
        } else {
            Tier::HighConcern
        }
    }

    /// 1 (best) through 4.
    pub fn level(&self) -> u8 {
        match self {
            Tier::Excellent => 1,
            Tier::Good => 2,
            Tier::Moderate => 3,
            Tier::HighConcern => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::Excellent => "Excellent",
            Tier::Good => "Good",
            Tier::Moderate => "Moderate",
            Tier::HighConcern => "High concern",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Tier::Excellent => {
                "Excellent! You seem to be managing your mental well-being effectively."
            }
            Tier::Good => {
                "Good! You're doing well, but consider incorporating more self-care practices."
            }
            Tier::Moderate => {
                "Moderate. Consider practicing stress management techniques more regularly."
            }
            Tier::HighConcern => {
                "High. It might be beneficial to seek professional support or increase self-care activities."
            }
        }
    }

    /// Display colour as `(r, g, b)`.
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            Tier::Excellent => (0x4C, 0xAF, 0x50),
            Tier::Good => (0x8B, 0xC3, 0x4A),
            Tier::Moderate => (0xFF, 0xC1, 0x07),
            Tier::HighConcern => (0xF4, 0x43, 0x36),
        }
    }
}

/// Assessment score and band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssessmentResult {
    /// Average of the three answers, rounded to one decimal.
    pub score: f64,
    pub tier: Tier,
}

impl AssessmentResult {
    /// Score as shown to the user, e.g. `3.7/5`.
    pub fn score_label(&self) -> String {
        format!("{:.1}/5", self.score)
    }
}

/// Average the three answers with energy inverted.
pub fn assess(input: AssessmentInput) -> Result<AssessmentResult, ValidationError> {
    let (Some(anxiety), Some(sleep), Some(energy)) = (
        AssessmentInput::rated(input.anxiety),
        AssessmentInput::rated(input.sleep),
        AssessmentInput::rated(input.energy),
    ) else {
        return Err(ValidationError::IncompleteAssessment);
    };

    let energy_score = 6 - energy;
    let total = f64::from(anxiety) + f64::from(sleep) + f64::from(energy_score);
    let score = round_to(total / 3.0, 1);

    Ok(AssessmentResult {
        score,
        tier: Tier::for_score(score),
    })
}
