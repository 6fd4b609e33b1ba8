//! Error handling for the hub.
//!
//! - **Error Categories**: how a failure reaches the user
//! - **Domain Errors**: validation, persistence, playback
//! - **Unified Error Type**: `HubError` consolidates all error types
//! - **Result Alias**: `HubResult<T>`
//!
//! No error is fatal to the application:
//!
//! | Category | Reaches the user | Handling |
//! |----------|------------------|----------|
//! | Validation | Yes, own message | Reject or clamp, user retries |
//! | Persistence | No | Logged, app continues in memory |
//! | Playback | Yes, generic message | Logged |

mod category;
mod hub_error;
mod persistence;
mod playback;
mod result;
mod validation;

pub use category::ErrorCategory;
pub use hub_error::HubError;
pub use persistence::PersistenceError;
pub use playback::{PlaybackError, PLAYBACK_USER_MESSAGE};
pub use result::HubResult;
pub use validation::ValidationError;
