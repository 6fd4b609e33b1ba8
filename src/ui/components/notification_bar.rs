//! Notification bar.
//!
//! Renders the current [`Notice`] in the severity color. A fading notice
//! is drawn dimmed.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{Notice, NoticePhase, Severity};
use crate::ui::layout::LayoutContext;
use crate::ui::theme::severity_color;

fn icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "i",
        Severity::Error => "\u{2717}",
        Severity::Success => "\u{2713}",
    }
}

fn notice_style(notice: &Notice) -> Style {
    let style = Style::default().fg(severity_color(notice.severity));
    match notice.phase {
        NoticePhase::Visible => style.add_modifier(Modifier::BOLD),
        NoticePhase::Fading => style.add_modifier(Modifier::DIM),
    }
}

/// Message line for `notice`.
pub fn notice_line(notice: &Notice) -> Line<'static> {
    let style = notice_style(notice);
    Line::from(vec![
        Span::styled(format!("{} ", icon(notice.severity)), style),
        Span::styled(notice.message.clone(), style),
    ])
}

pub fn render_notification_bar(
    frame: &mut Frame,
    area: Rect,
    notice: &Notice,
    ctx: &LayoutContext,
) {
    let mut paragraph = Paragraph::new(notice_line(notice)).wrap(Wrap { trim: true });
    if !ctx.is_extra_small() {
        paragraph = paragraph.block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(notice_style(notice))
                .title(Span::styled(
                    format!(" {} ", notice.severity.as_str()),
                    notice_style(notice),
                )),
        );
    }
    frame.render_widget(paragraph, area);
}
