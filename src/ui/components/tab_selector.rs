//! Tab Selector Component
//!
//! The navigation bar across the top of the hub. Uses `▶` marker for the
//! highlighted view with responsive label sizing.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::domain::ViewId;
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_BRAND, COLOR_DIM};

/// A single tab item in the selector
#[derive(Debug, Clone)]
pub struct TabItem<'a> {
    /// Function key that opens the tab
    pub key: &'a str,
    /// Full label displayed on normal-sized terminals
    pub label: &'a str,
    /// Short label displayed on compact terminals
    pub short_label: &'a str,
}

impl<'a> TabItem<'a> {
    pub fn new(key: &'a str, label: &'a str, short_label: &'a str) -> Self {
        Self {
            key,
            label,
            short_label,
        }
    }
}

const FUNCTION_KEYS: [&str; 5] = ["F1", "F2", "F3", "F4", "F5"];

/// One tab per view, in navigation order.
pub fn view_tabs() -> Vec<TabItem<'static>> {
    ViewId::ALL
        .iter()
        .zip(FUNCTION_KEYS)
        .map(|(view, key)| TabItem::new(key, view.title(), view.short_title()))
        .collect()
}

/// Render a horizontal tab selector
///
/// # Arguments
/// * `items` - The tab items to display
/// * `selected` - Index of the highlighted tab
/// * `dimmed` - Whether a transition is in progress
/// * `ctx` - Layout context for responsive sizing
pub fn render_tab_selector(
    items: &[TabItem<'_>],
    selected: usize,
    dimmed: bool,
    ctx: &LayoutContext,
) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();

    spans.push(Span::raw(" "));

    for (idx, item) in items.iter().enumerate() {
        let label = if ctx.is_compact() {
            item.short_label
        } else {
            item.label
        };

        if !ctx.is_extra_small() {
            spans.push(Span::styled(
                format!("{} ", item.key),
                Style::default().fg(COLOR_DIM),
            ));
        }

        if idx == selected {
            let marker_style = if dimmed {
                Style::default().fg(COLOR_DIM)
            } else {
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD)
            };
            spans.push(Span::styled("▶ ".to_string(), marker_style));
            spans.push(Span::styled(
                label.to_string(),
                Style::default()
                    .fg(COLOR_BRAND)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            let text_style = Style::default().fg(COLOR_DIM);
            spans.push(Span::styled("  ".to_string(), text_style));
            spans.push(Span::styled(label.to_string(), text_style));
        }

        if idx + 1 < items.len() {
            let spacing = if ctx.is_extra_small() { " " } else { "   " };
            spans.push(Span::raw(spacing.to_string()));
        }
    }

    Line::from(spans)
}

// ============================================================================
// Tests
// ============================================================================
