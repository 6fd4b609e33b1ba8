//! Persistence of the preference record and the contact submission log.
//!
//! Both live as JSON blobs in a [`KeyValueStore`]. Reads never fail from the
//! caller's point of view: a missing or malformed blob loads as empty.

use crate::domain::{ContactSubmission, UserPreferences};
use crate::error::PersistenceError;
use crate::traits::KeyValueStore;

/// Key of the preference object.
pub const PREFERENCES_KEY: &str = "healthhub_preferences";

/// Key of the contact submission array.
pub const SUBMISSIONS_KEY: &str = "contact_submissions";

/// Loads and saves [`UserPreferences`].
#[derive(Debug, Clone)]
pub struct PreferenceStore<S> {
    store: S,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the stored preferences.
    ///
    /// Returns an empty record if the blob doesn't exist, can't be read or
    /// isn't a JSON object.
    pub fn load(&self) -> UserPreferences {
        let raw = match self.store.get(PREFERENCES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return UserPreferences::default(),
            Err(e) => {
                tracing::warn!(error = %e, "could not read preferences, starting empty");
                return UserPreferences::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(prefs) => prefs,
            Err(e) => {
                tracing::warn!(error = %e, "stored preferences are malformed, starting empty");
                UserPreferences::default()
            }
        }
    }

    /// Overwrite the stored preferences with `prefs`.
    pub fn save(&mut self, prefs: &UserPreferences) -> Result<(), PersistenceError> {
        let json =
            serde_json::to_string(prefs).map_err(|source| PersistenceError::Serialization {
                key: PREFERENCES_KEY.to_string(),
                source,
            })?;
        self.store.set(PREFERENCES_KEY, &json)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Append-only log of contact form submissions.
#[derive(Debug, Clone)]
pub struct SubmissionLog<S> {
    store: S,
}

impl<S: KeyValueStore> SubmissionLog<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Every stored submission, oldest first.
    ///
    /// A missing or malformed log reads as empty.
    pub fn all(&self) -> Vec<ContactSubmission> {
        match self.store.get(SUBMISSIONS_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "stored submissions are malformed, starting a new log");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "could not read submissions");
                Vec::new()
            }
        }
    }

    /// Add `submission` to the end of the log.
    pub fn append(&mut self, submission: ContactSubmission) -> Result<(), PersistenceError> {
        let mut submissions = self.all();
        submissions.push(submission);
        let json = serde_json::to_string(&submissions).map_err(|source| {
            PersistenceError::Serialization {
                key: SUBMISSIONS_KEY.to_string(),
                source,
            }
        })?;
        self.store.set(SUBMISSIONS_KEY, &json)?;
        tracing::info!(count = submissions.len(), "contact submission stored");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::InMemoryStore;
    use crate::adapters::FileStore;
    use crate::domain::{ContactSubject, WaterResult};
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn submission(name: &str) -> ContactSubmission {
        ContactSubmission {
            name: name.to_string(),
            email: format!("{}@example.com", name),
            subject: ContactSubject::General,
            message: "Hello there, team".to_string(),
            newsletter: true,
            timestamp: Utc.with_ymd_and_hms(2026, 1, 15, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_load_absent_is_empty() {
        let store = PreferenceStore::new(InMemoryStore::new());
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_malformed_is_empty() {
        let store = PreferenceStore::new(InMemoryStore::with_value(PREFERENCES_KEY, "{not json"));
        assert!(store.load().is_empty());

        let store = PreferenceStore::new(InMemoryStore::with_value(PREFERENCES_KEY, "[1,2]"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_read_failure_is_empty() {
        let backing = InMemoryStore::with_value(PREFERENCES_KEY, r#"{"weight":70}"#);
        backing.set_get_should_fail(true);
        assert!(PreferenceStore::new(backing).load().is_empty());
    }

    #[test]
    fn test_save_then_load_is_identity() {
        let mut store = PreferenceStore::new(InMemoryStore::new());
        let mut prefs = UserPreferences::new();
        prefs.record_water(&WaterResult {
            weight_kg: 70.0,
            liters: 2.45,
        });
        prefs.newsletter = Some(false);

        store.save(&prefs).unwrap();
        assert_eq!(store.load(), prefs);
    }

    #[test]
    fn test_save_failure_is_reported() {
        let backing = InMemoryStore::new();
        backing.set_set_should_fail(true);
        let mut store = PreferenceStore::new(backing);
        assert!(store.save(&UserPreferences::new()).is_err());
    }

    #[test]
    fn test_unknown_keys_survive_round_trip() {
        let backing = InMemoryStore::with_value(PREFERENCES_KEY, r#"{"theme":"dark","weight":60}"#);
        let mut store = PreferenceStore::new(backing.clone());

        let mut prefs = store.load();
        prefs.newsletter = Some(true);
        store.save(&prefs).unwrap();

        let saved: serde_json::Value =
            serde_json::from_str(&backing.value(PREFERENCES_KEY).unwrap()).unwrap();
        assert_eq!(saved["theme"], "dark");
        assert_eq!(saved["weight"], 60.0);
        assert_eq!(saved["newsletter"], true);
    }

    #[test]
    fn test_submission_log_appends() {
        let mut log = SubmissionLog::new(InMemoryStore::new());
        assert!(log.all().is_empty());

        log.append(submission("ana")).unwrap();
        log.append(submission("ben")).unwrap();

        let names: Vec<_> = log.all().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["ana", "ben"]);
    }

    #[test]
    fn test_submission_log_replaces_malformed() {
        let mut log = SubmissionLog::new(InMemoryStore::with_value(SUBMISSIONS_KEY, "oops"));
        log.append(submission("ana")).unwrap();
        assert_eq!(log.all().len(), 1);
    }

    #[test]
    fn test_file_backed_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = PreferenceStore::new(FileStore::new(temp_dir.path()));
        let mut prefs = UserPreferences::new();
        prefs.record_contact("Ana", "ana@example.com", true);
        store.save(&prefs).unwrap();

        let reopened = PreferenceStore::new(FileStore::new(temp_dir.path()));
        assert_eq!(reopened.load(), prefs);
    }
}
