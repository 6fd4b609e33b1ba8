//! Media playback errors.

use std::path::PathBuf;

use thiserror::Error;

/// Message shown for every playback failure; details go to the log.
pub const PLAYBACK_USER_MESSAGE: &str = "Could not play audio. Please try again.";

/// Playback could not start.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlaybackError {
    /// No track with this id is registered.
    #[error("unknown track '{0}'")]
    UnknownTrack(String),

    /// The track's audio source is not on disk.
    #[error("audio source for '{track}' not found at {path:?}")]
    SourceMissing { track: String, path: PathBuf },

    /// The output device rejected the request.
    #[error("audio device error: {0}")]
    Device(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            PlaybackError::UnknownTrack("rain".to_string()).to_string(),
            "unknown track 'rain'"
        );
        let missing = PlaybackError::SourceMissing {
            track: "body-scan".to_string(),
            path: PathBuf::from("/tmp/body-scan.mp3"),
        };
        assert!(missing.to_string().contains("body-scan"));
    }
}
