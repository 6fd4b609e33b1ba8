//! UI rendering for HealthHub
//!
//! Draws one frame from the [`App`] state:
//! - Header with the brand and the navigation tabs
//! - Body: the active view in a centered, scrollable column
//! - Notification bar, while a notice is shown
//! - Footer with key hints
//!
//! The body is dimmed while a view transition is less than half visible.
//! Rendering never mutates the app.

pub mod components;
pub mod layout;
pub mod theme;
mod views;

pub use layout::{breakpoints, LayoutContext};
pub use views::view_lines;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use components::{render_notification_bar, render_tab_selector, view_tabs};
use theme::{COLOR_BORDER, COLOR_BRAND, COLOR_DIM};

/// Opacity below which the body is drawn dimmed.
const DIM_BELOW: f32 = 0.5;

const KEY_HINTS: &str =
    "F1-F5 views  Alt+\u{2190}/\u{2192} back/fwd  Tab/\u{2191}\u{2193} focus  \u{2190}/\u{2192} adjust  Enter select  PgUp/PgDn scroll  Esc dismiss  Ctrl+C quit";
const KEY_HINTS_COMPACT: &str = "F1-F5 views  Tab focus  Enter select  ^C quit";

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the whole hub at monotonic time `now_ms`.
pub fn render(frame: &mut Frame, app: &App, now_ms: u64) {
    let area = frame.area();
    let ctx = LayoutContext::new(area.width, area.height);

    let header_height = if ctx.is_extra_small() { 1 } else { 3 };
    let notice_height = if app.notifications.current().is_some() {
        ctx.notification_height()
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Min(1),
            Constraint::Length(notice_height),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(frame, chunks[0], app, now_ms, &ctx);
    render_body(frame, chunks[1], app, now_ms, &ctx);
    if let Some(notice) = app.notifications.current() {
        render_notification_bar(frame, centered(chunks[2], ctx.content_width()), notice, &ctx);
    }
    render_footer(frame, chunks[3], app, &ctx);
}

/// Horizontally center a column of `width` inside `area`.
fn centered(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App, now_ms: u64, ctx: &LayoutContext) {
    let tabs = render_tab_selector(
        &view_tabs(),
        app.router.highlighted().index(),
        app.router.opacity(now_ms) < DIM_BELOW,
        ctx,
    );

    let mut paragraph = Paragraph::new(tabs);
    if !ctx.is_extra_small() {
        paragraph = paragraph.block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(COLOR_BORDER))
                .title(Span::styled(
                    " \u{271A} HealthHub ",
                    Style::default()
                        .fg(COLOR_BRAND)
                        .add_modifier(Modifier::BOLD),
                )),
        );
    }
    frame.render_widget(paragraph, area);
}

fn render_body(frame: &mut Frame, area: Rect, app: &App, now_ms: u64, ctx: &LayoutContext) {
    let column = centered(area, ctx.content_width() + 2);

    let mut style = Style::default();
    if app.router.opacity(now_ms) < DIM_BELOW {
        style = style.add_modifier(Modifier::DIM);
    }

    let mut paragraph = Paragraph::new(view_lines(app, ctx))
        .style(style)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));
    if !ctx.is_extra_small() {
        paragraph = paragraph.block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(COLOR_BORDER))
                .title(format!(" {} ", app.active_view().title())),
        );
    }
    frame.render_widget(paragraph, column);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let hints = if ctx.is_compact() {
        KEY_HINTS_COMPACT
    } else {
        KEY_HINTS
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(" {}", hints),
            Style::default().fg(COLOR_DIM),
        ))),
        area,
    );

    if !ctx.is_compact() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("\u{00A9} {} HealthHub ", app.year),
                Style::default().fg(COLOR_DIM),
            )))
            .alignment(Alignment::Right),
            area,
        );
    }
}
