//! Terminal ownership.
//!
//! [`TerminalManager`] puts the terminal into TUI mode on creation and
//! restores it when dropped, on both the normal exit path and early `?`
//! returns. [`setup_panic_hook`] covers panics.
//!
//! ```no_run
//! use healthhub::terminal::{setup_panic_hook, TerminalManager};
//!
//! fn main() -> color_eyre::Result<()> {
//!     setup_panic_hook();
//!     let mut manager = TerminalManager::new()?;
//!     manager.terminal().draw(|_frame| {})?;
//!     Ok(())
//! }
//! ```

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode};

use color_eyre::Result;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

/// Restores the terminal on drop unless already restored.
struct TerminalGuard {
    restored: bool,
}

impl TerminalGuard {
    fn restore(&mut self) {
        if !self.restored {
            self.restored = true;
            leave_tui_mode(&mut io::stdout());
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.restore();
    }
}

pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    guard: TerminalGuard,
}

impl TerminalManager {
    /// Enter TUI mode and create the ratatui terminal.
    pub fn new() -> Result<Self> {
        let mut stdout = io::stdout();
        enter_tui_mode(&mut stdout)?;
        // From here on the guard restores the terminal, including when
        // building the terminal below fails.
        let guard = TerminalGuard { restored: false };

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.clear()?;

        Ok(Self { terminal, guard })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Restore the terminal now instead of at drop.
    pub fn restore(&mut self) -> Result<()> {
        self.guard.restore();
        self.terminal.show_cursor()?;
        Ok(())
    }
}
