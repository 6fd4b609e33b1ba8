//! In-process navigation history.
//!
//! A list of visited views plus a cursor, with browser semantics: pushing
//! after going back discards the forward entries.

use crate::domain::ViewId;
use crate::traits::NavigationHistory;

/// Cap on retained entries; the oldest entries are dropped first.
pub const MAX_HISTORY_ENTRIES: usize = 100;

#[derive(Debug, Clone, Default)]
pub struct StackHistory {
    entries: Vec<ViewId>,
    cursor: usize,
}

impl StackHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// History seeded with the view shown at startup.
    pub fn starting_at(view: ViewId) -> Self {
        Self {
            entries: vec![view],
            cursor: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }
}

impl NavigationHistory for StackHistory {
    fn push(&mut self, view: ViewId) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push(view);
        if self.entries.len() > MAX_HISTORY_ENTRIES {
            let excess = self.entries.len() - MAX_HISTORY_ENTRIES;
            self.entries.drain(..excess);
        }
        self.cursor = self.entries.len() - 1;
    }

    fn back(&mut self) -> Option<ViewId> {
        if !self.can_go_back() {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor).copied()
    }

    fn forward(&mut self) -> Option<ViewId> {
        if !self.can_go_forward() {
            return None;
        }
        self.cursor += 1;
        self.entries.get(self.cursor).copied()
    }

    fn current(&self) -> Option<ViewId> {
        self.entries.get(self.cursor).copied()
    }
}
