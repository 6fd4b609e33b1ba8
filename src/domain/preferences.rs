//! Persisted user preferences.
//!
//! The record is stored as one JSON object. Keys the current build does not
//! know about, and known keys whose value cannot be read, are kept in
//! [`UserPreferences::extra`] so a save never drops data written by another
//! version.
//!
//! Older records hold calculator results as numeric strings (`"2.45"`,
//! `"350"`); numbers are accepted in either form.

use chrono::{DateTime, Utc};
use serde::de::{Deserializer, Error as _};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::calculators::{Activity, AssessmentResult, CalorieResult, WaterResult};
use super::validate::parse_number;

/// A JSON number, or a string holding one.
fn number_from(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_number(s),
        _ => None,
    }
}

fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    number_from(&value)
        .ok_or_else(|| D::Error::custom(format!("expected a number, got {}", value)))
}

fn lenient_whole<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let n = lenient_number(deserializer)?;
    if !(0.0..=u32::MAX as f64).contains(&n) {
        return Err(D::Error::custom(format!("{} is not a calorie count", n)));
    }
    Ok(n.round() as u32)
}

/// Last calorie calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastActivity {
    #[serde(rename = "type")]
    pub activity: Activity,
    #[serde(deserialize_with = "lenient_number")]
    pub duration: f64,
    #[serde(deserialize_with = "lenient_number")]
    pub weight: f64,
    #[serde(deserialize_with = "lenient_whole")]
    pub calories_burned: u32,
}

impl From<&CalorieResult> for LastActivity {
    fn from(result: &CalorieResult) -> Self {
        Self {
            activity: result.activity.clone(),
            duration: result.duration_min,
            weight: result.weight_kg,
            calories_burned: result.calories,
        }
    }
}

/// Last completed wellness assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastAssessment {
    #[serde(deserialize_with = "lenient_number")]
    pub score: f64,
    pub date: DateTime<Utc>,
    pub message: String,
}

impl LastAssessment {
    pub fn from_result(result: &AssessmentResult, date: DateTime<Utc>) -> Self {
        Self {
            score: result.score,
            date,
            message: result.tier.message().to_string(),
        }
    }
}

const WEIGHT: &str = "weight";
const WATER_NEEDED: &str = "waterNeeded";
const LAST_ACTIVITY: &str = "lastActivity";
const LAST_ASSESSMENT: &str = "lastAssessment";
const NEWSLETTER: &str = "newsletter";
const NAME: &str = "name";
const EMAIL: &str = "email";

/// Everything the hub remembers between runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water_needed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_activity: Option<LastActivity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_assessment: Option<LastAssessment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub newsletter: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Keys written by other versions, and unreadable known keys, verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Remove `key` from `map` if `read` understands its value.
///
/// Unreadable values stay in the map. Nulls count as absent.
fn take<T>(
    map: &mut Map<String, Value>,
    key: &str,
    read: impl FnOnce(&Value) -> Option<T>,
) -> Option<T> {
    let value = map.get(key)?;
    if value.is_null() {
        map.remove(key);
        return None;
    }
    match read(value) {
        Some(parsed) => {
            map.remove(key);
            Some(parsed)
        }
        None => {
            tracing::warn!(key, "keeping unreadable preference as stored");
            None
        }
    }
}

fn record_from<T: serde::de::DeserializeOwned>(value: &Value) -> Option<T> {
    serde_json::from_value(value.clone()).ok()
}

impl<'de> Deserialize<'de> for UserPreferences {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut extra = Map::<String, Value>::deserialize(deserializer)?;
        Ok(Self {
            weight: take(&mut extra, WEIGHT, number_from),
            water_needed: take(&mut extra, WATER_NEEDED, number_from),
            last_activity: take(&mut extra, LAST_ACTIVITY, record_from),
            last_assessment: take(&mut extra, LAST_ASSESSMENT, record_from),
            newsletter: take(&mut extra, NEWSLETTER, Value::as_bool),
            name: take(&mut extra, NAME, |v| v.as_str().map(str::to_string)),
            email: take(&mut extra, EMAIL, |v| v.as_str().map(str::to_string)),
            extra,
        })
    }
}

impl UserPreferences {
    /// Create new empty preferences.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Drop raw copies of keys that are about to get a typed value.
    fn supersede(&mut self, keys: &[&str]) {
        for key in keys {
            self.extra.remove(*key);
        }
    }

    pub fn record_water(&mut self, result: &WaterResult) {
        self.supersede(&[WEIGHT, WATER_NEEDED]);
        self.weight = Some(result.weight_kg);
        self.water_needed = Some(result.liters);
    }

    pub fn record_activity(&mut self, result: &CalorieResult) {
        self.supersede(&[LAST_ACTIVITY]);
        self.last_activity = Some(LastActivity::from(result));
    }

    pub fn record_assessment(&mut self, result: &AssessmentResult, date: DateTime<Utc>) {
        self.supersede(&[LAST_ASSESSMENT]);
        self.last_assessment = Some(LastAssessment::from_result(result, date));
    }

    pub fn record_contact(&mut self, name: &str, email: &str, newsletter: bool) {
        self.supersede(&[NAME, EMAIL, NEWSLETTER]);
        self.name = Some(name.to_string());
        self.email = Some(email.to_string());
        self.newsletter = Some(newsletter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::calculators::{assess, calories_burned, water_intake, AssessmentInput};
    use chrono::TimeZone;

    fn sample_date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_empty_serializes_to_empty_object() {
        let prefs = UserPreferences::new();
        assert!(prefs.is_empty());
        assert_eq!(serde_json::to_string(&prefs).unwrap(), "{}");
    }

    #[test]
    fn test_keys_are_camel_case() {
        let mut prefs = UserPreferences::new();
        prefs.record_water(&water_intake(70.0).unwrap());
        prefs.record_activity(&calories_burned(Activity::Running, 30.0, 70.0).unwrap());

        let value = serde_json::to_value(&prefs).unwrap();
        assert_eq!(value["weight"], 70.0);
        assert_eq!(value["waterNeeded"], 2.45);
        assert_eq!(value["lastActivity"]["type"], "running");
        assert_eq!(value["lastActivity"]["caloriesBurned"], 350);
    }

    #[test]
    fn test_round_trip() {
        let mut prefs = UserPreferences::new();
        prefs.record_water(&water_intake(82.0).unwrap());
        prefs.record_assessment(&assess(AssessmentInput::new(2, 3, 4)).unwrap(), sample_date());
        prefs.record_contact("Ada", "ada@example.com", false);

        let json = serde_json::to_string(&prefs).unwrap();
        let back: UserPreferences = serde_json::from_str(&json).unwrap();
        assert_eq!(back, prefs);
    }

    #[test]
    fn test_unknown_keys_survive() {
        let json = r#"{"weight":65,"theme":"dark","widgets":{"a":1}}"#;
        let mut prefs: UserPreferences = serde_json::from_str(json).unwrap();
        assert_eq!(prefs.weight, Some(65.0));
        assert_eq!(prefs.extra["theme"], "dark");

        prefs.newsletter = Some(true);
        let value = serde_json::to_value(&prefs).unwrap();
        assert_eq!(value["theme"], "dark");
        assert_eq!(value["widgets"]["a"], 1);
        assert_eq!(value["newsletter"], true);
    }

    #[test]
    fn test_numeric_strings_load() {
        let json = r#"{
            "weight": 70,
            "waterNeeded": "2.45",
            "lastActivity": {"type": "weight", "duration": 45, "weight": 80, "caloriesBurned": "300"},
            "lastAssessment": {"score": "2.3", "date": "2026-03-14T09:30:00.000Z", "message": "Good."},
            "theme": "dark"
        }"#;
        let prefs: UserPreferences = serde_json::from_str(json).unwrap();
        assert_eq!(prefs.weight, Some(70.0));
        assert_eq!(prefs.water_needed, Some(2.45));

        let activity = prefs.last_activity.as_ref().unwrap();
        assert_eq!(activity.activity, Activity::WeightTraining);
        assert_eq!(activity.calories_burned, 300);
        assert_eq!(prefs.last_assessment.as_ref().unwrap().score, 2.3);
        assert_eq!(prefs.last_assessment.as_ref().unwrap().date, sample_date());

        assert_eq!(prefs.extra.len(), 1);
        assert_eq!(prefs.extra["theme"], "dark");
    }

    #[test]
    fn test_unreadable_known_key_is_kept_raw() {
        let json = r#"{"weight":70,"waterNeeded":"lots","newsletter":"yes"}"#;
        let prefs: UserPreferences = serde_json::from_str(json).unwrap();
        assert_eq!(prefs.weight, Some(70.0));
        assert!(prefs.water_needed.is_none());
        assert!(prefs.newsletter.is_none());

        let value = serde_json::to_value(&prefs).unwrap();
        assert_eq!(value["waterNeeded"], "lots");
        assert_eq!(value["newsletter"], "yes");
    }

    #[test]
    fn test_recording_replaces_raw_copy() {
        let mut prefs: UserPreferences =
            serde_json::from_str(r#"{"waterNeeded":"lots"}"#).unwrap();
        prefs.record_water(&water_intake(70.0).unwrap());

        let json = serde_json::to_string(&prefs).unwrap();
        assert_eq!(json.matches("waterNeeded").count(), 1);
        assert!(prefs.extra.is_empty());
    }

    #[test]
    fn test_null_counts_as_absent() {
        let prefs: UserPreferences = serde_json::from_str(r#"{"name":null}"#).unwrap();
        assert!(prefs.is_empty());
    }

    #[test]
    fn test_assessment_record_carries_tier_message() {
        let mut prefs = UserPreferences::new();
        let result = assess(AssessmentInput::new(5, 5, 1)).unwrap();
        prefs.record_assessment(&result, sample_date());

        let last = prefs.last_assessment.unwrap();
        assert_eq!(last.score, 5.0);
        assert!(last.message.starts_with("High."));
        assert_eq!(last.date, sample_date());
    }
}
