//! Panic hook for terminal restoration.

use super::setup::emergency_restore;
use std::panic;

/// Install a panic hook that restores the terminal and logs the panic
/// before handing off to the previous hook.
///
/// Call early in `main()`, after `color_eyre::install()` so its report is
/// the one printed.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        tracing::error!(panic = %panic_info, "application panicked");
        original_hook(panic_info);
    }));
}
