//! Color theme constants for the HealthHub UI

use ratatui::style::Color;

use crate::app::Severity;
use crate::domain::Tier;

/// Brand green for the logo and the active tab
pub const COLOR_BRAND: Color = Color::Rgb(76, 175, 80); // #4CAF50

/// Primary border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for focused elements
pub const COLOR_ACCENT: Color = Color::White;

/// Dim text for labels and hints
pub const COLOR_DIM: Color = Color::DarkGray;

/// Calculator results
pub const COLOR_RESULT: Color = Color::Cyan;

/// Background of editable fields
pub const COLOR_INPUT_BG: Color = Color::Rgb(20, 20, 30);

// ============================================================================
// Notification Colors
// ============================================================================

pub const COLOR_INFO: Color = Color::Rgb(33, 150, 243); // #2196F3
pub const COLOR_SUCCESS: Color = Color::Rgb(76, 175, 80); // #4CAF50
pub const COLOR_ERROR: Color = Color::Rgb(244, 67, 54); // #F44336

pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Info => COLOR_INFO,
        Severity::Error => COLOR_ERROR,
        Severity::Success => COLOR_SUCCESS,
    }
}

/// Assessment tier color.
pub fn tier_color(tier: Tier) -> Color {
    let (r, g, b) = tier.color();
    Color::Rgb(r, g, b)
}
