//! Keyboard input.
//!
//! ```text
//! KeyEvent -> map_key() -> AppEvent -> App::dispatch
//! ```
//!
//! Bound combinations come from [`KeybindingConfig`]; any other printable
//! character is text entry for the focused field.

pub mod keybindings;

pub use keybindings::{KeyCombo, KeybindingConfig};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::AppEvent;

/// Translate a key press into an app event.
///
/// Key releases and repeats of unbound keys are ignored.
pub fn map_key(key: &KeyEvent, bindings: &KeybindingConfig) -> Option<AppEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let combo = KeyCombo::new(key.code, key.modifiers);
    if let Some(event) = bindings.get(&combo) {
        return Some(event.clone());
    }

    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(AppEvent::Char(c))
        }
        _ => None,
    }
}
