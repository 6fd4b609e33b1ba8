//! Navigation history trait abstraction.
//!
//! The browser-history contract the router relies on: push an entry when
//! the user navigates, and report the entry to restore when the user goes
//! back or forward.

use crate::domain::ViewId;

/// Back/forward navigation history.
pub trait NavigationHistory {
    /// Record `view` as the newest entry, discarding any forward entries.
    fn push(&mut self, view: ViewId);

    /// Step back. Returns the view to restore, or `None` at the oldest entry.
    fn back(&mut self) -> Option<ViewId>;

    /// Step forward. Returns the view to restore, or `None` at the newest entry.
    fn forward(&mut self) -> Option<ViewId>;

    /// The entry the history cursor points at.
    fn current(&self) -> Option<ViewId>;
}
