//! Entering and leaving the alternate screen.

use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Switch to raw mode on the alternate screen with the cursor hidden.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    enable_raw_mode()?;
    execute!(writer, EnterAlternateScreen, Hide)
}

/// Undo [`enter_tui_mode`]. Never fails; safe to call more than once.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, LeaveAlternateScreen, Show);
    let _ = writer.flush();
}

/// Best-effort restore on stdout, for panic paths.
pub fn emergency_restore() {
    leave_tui_mode(&mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leave_tui_mode_writes_escape_sequences() {
        let mut buffer = Vec::new();
        leave_tui_mode(&mut buffer);
        assert!(!buffer.is_empty());
    }

    #[test]
    fn test_emergency_restore_does_not_panic() {
        emergency_restore();
    }
}
