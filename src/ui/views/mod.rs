//! Page views.
//!
//! Each view renders to a list of lines that the frame draws as one
//! scrollable paragraph inside the content column.

mod contact;
mod fitness;
mod home;
mod mental;
mod nutrition;

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::app::App;
use crate::domain::ViewId;
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_BRAND, COLOR_DIM, COLOR_RESULT};

/// Lines for the active view.
pub fn view_lines(app: &App, ctx: &LayoutContext) -> Vec<Line<'static>> {
    match app.active_view() {
        ViewId::Home => home::lines(app, ctx),
        ViewId::Nutrition => nutrition::lines(app, ctx),
        ViewId::Fitness => fitness::lines(app, ctx),
        ViewId::Mental => mental::lines(app, ctx),
        ViewId::Contact => contact::lines(app, ctx),
    }
}

pub(crate) fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(COLOR_BRAND)
            .add_modifier(Modifier::BOLD),
    ))
}

pub(crate) fn text(text: &str) -> Line<'static> {
    Line::from(text.to_string())
}

pub(crate) fn hint(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("    {}", text),
        Style::default().fg(COLOR_DIM),
    ))
}

pub(crate) fn bullets(items: &[&str]) -> Vec<Line<'static>> {
    items
        .iter()
        .map(|item| Line::from(format!("  \u{2022} {}", item)))
        .collect()
}

/// Calculator output, or nothing before the first calculation.
pub(crate) fn result(summary: Option<String>) -> Option<Line<'static>> {
    summary.map(|s| {
        Line::from(Span::styled(
            s,
            Style::default()
                .fg(COLOR_RESULT)
                .add_modifier(Modifier::BOLD),
        ))
    })
}
