//! Default keybindings for the application.
//!
//! Maps key combinations to [`AppEvent`]s. Keys not bound here fall
//! through to text entry (see [`super::map_key`]).

use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

use crate::app::AppEvent;
use crate::domain::ViewId;

/// Represents a key combination (key code + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Creates a key combo with no modifiers.
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Creates a key combo with Control modifier.
    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    /// Creates a key combo with Shift modifier.
    pub const fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }

    /// Creates a key combo with Alt modifier.
    pub const fn alt(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::ALT)
    }
}

/// Keybinding configuration for the application.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    /// Bindings active on every view
    pub global: HashMap<KeyCombo, AppEvent>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    /// Creates a new keybinding configuration with default bindings.
    pub fn new() -> Self {
        let mut global = HashMap::new();

        // View tabs: F1-F5 in navigation order
        for (i, view) in ViewId::ALL.iter().enumerate() {
            global.insert(
                KeyCombo::plain(KeyCode::F(i as u8 + 1)),
                AppEvent::Navigate(*view),
            );
        }

        // History
        global.insert(KeyCombo::alt(KeyCode::Left), AppEvent::Back);
        global.insert(KeyCombo::alt(KeyCode::Right), AppEvent::Forward);

        // Focus
        global.insert(KeyCombo::plain(KeyCode::Tab), AppEvent::FocusNext);
        global.insert(KeyCombo::plain(KeyCode::Down), AppEvent::FocusNext);
        global.insert(KeyCombo::plain(KeyCode::BackTab), AppEvent::FocusPrev);
        global.insert(KeyCombo::shift(KeyCode::BackTab), AppEvent::FocusPrev);
        global.insert(KeyCombo::plain(KeyCode::Up), AppEvent::FocusPrev);

        // Field controls
        global.insert(KeyCombo::plain(KeyCode::Left), AppEvent::Adjust(-1));
        global.insert(KeyCombo::plain(KeyCode::Right), AppEvent::Adjust(1));
        global.insert(KeyCombo::plain(KeyCode::Enter), AppEvent::Activate);
        global.insert(KeyCombo::plain(KeyCode::Backspace), AppEvent::Backspace);
        global.insert(KeyCombo::ctrl(KeyCode::Char('r')), AppEvent::Restart);

        // Scrolling
        global.insert(KeyCombo::plain(KeyCode::PageUp), AppEvent::Scroll(-10));
        global.insert(KeyCombo::plain(KeyCode::PageDown), AppEvent::Scroll(10));

        global.insert(KeyCombo::plain(KeyCode::Esc), AppEvent::Dismiss);
        global.insert(KeyCombo::ctrl(KeyCode::Char('c')), AppEvent::Quit);

        Self { global }
    }

    /// Look up a bound event.
    pub fn get(&self, combo: &KeyCombo) -> Option<&AppEvent> {
        self.global.get(combo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_keys_switch_views() {
        let config = KeybindingConfig::new();
        assert_eq!(
            config.get(&KeyCombo::plain(KeyCode::F(1))),
            Some(&AppEvent::Navigate(ViewId::Home))
        );
        assert_eq!(
            config.get(&KeyCombo::plain(KeyCode::F(5))),
            Some(&AppEvent::Navigate(ViewId::Contact))
        );
        assert!(config.get(&KeyCombo::plain(KeyCode::F(6))).is_none());
    }

    #[test]
    fn test_history_bindings() {
        let config = KeybindingConfig::new();
        assert_eq!(config.get(&KeyCombo::alt(KeyCode::Left)), Some(&AppEvent::Back));
        assert_eq!(config.get(&KeyCombo::alt(KeyCode::Right)), Some(&AppEvent::Forward));
    }
}
