//! Mock implementations for testing.
//!
//! Test doubles for the trait abstractions, usable without a data
//! directory or audio files.
//!
//! # Available Mocks
//!
//! - [`InMemoryStore`] - Key-value storage with failure injection
//! - [`MockPlayer`] - Media player that records commands

pub mod player;
pub mod storage;

pub use player::MockPlayer;
pub use storage::InMemoryStore;
