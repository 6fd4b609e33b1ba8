//! Result type alias for hub operations.

use super::hub_error::HubError;

/// Type alias for Results using [`HubError`].
pub type HubResult<T> = Result<T, HubError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{PlaybackError, ValidationError};

    #[test]
    fn test_hub_result_alias() {
        fn fails() -> HubResult<()> {
            Err(ValidationError::MissingContactFields.into())
        }
        assert!(fails().is_err());
    }

    #[test]
    fn test_question_mark_converts_domain_errors() {
        fn play() -> HubResult<()> {
            Err(PlaybackError::Device("busy".to_string()))?;
            Ok(())
        }
        assert!(matches!(play(), Err(HubError::Playback(_))));
    }
}
