//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`FileStore`] - One JSON file per key under the data directory
//! - [`StackHistory`] - In-process back/forward history
//! - [`SessionPlayer`] - Timed meditation sessions
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::InMemoryStore`] - Shared in-memory storage
//! - [`mock::MockPlayer`] - Command-recording player

pub mod file_store;
pub mod mock;
pub mod session_player;
pub mod stack_history;

pub use file_store::FileStore;
pub use mock::{InMemoryStore, MockPlayer};
pub use session_player::SessionPlayer;
pub use stack_history::StackHistory;
