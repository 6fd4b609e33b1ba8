//! Form Field Component
//!
//! Line-based form controls for the calculator and contact views. Every
//! control renders to plain [`Line`]s so a view can stack them into one
//! scrollable paragraph.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::ui::theme::{COLOR_ACCENT, COLOR_BRAND, COLOR_DIM, COLOR_INPUT_BG};

/// Block cursor drawn after the value of a focused text field
const CURSOR: char = '\u{2588}';

/// Configuration for rendering a text or numeric input
#[derive(Debug, Clone)]
pub struct FormFieldConfig<'a> {
    /// Label displayed above the input
    pub label: &'a str,
    /// Current value of the input
    pub value: &'a str,
    /// Whether the input is currently focused
    pub focused: bool,
    /// Whether the input accepts edits
    pub locked: bool,
    /// Optional placeholder text when empty
    pub placeholder: Option<&'a str>,
    /// Columns available for the value, when known
    pub width: Option<u16>,
}

impl<'a> FormFieldConfig<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            focused: false,
            locked: false,
            placeholder: None,
            width: None,
        }
    }

    /// Set whether the input is focused
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }

    /// Set placeholder text
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Limit the value to `width` columns, keeping the end in view.
    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }
}

/// Indent of the value line
const VALUE_INDENT: &str = "    ";

/// The longest suffix of `value` that fits in `max_width` columns.
pub fn tail_fit(value: &str, max_width: usize) -> &str {
    if value.width() <= max_width {
        return value;
    }
    let mut used = 0;
    let mut start = value.len();
    for (idx, c) in value.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width {
            break;
        }
        used += w;
        start = idx;
    }
    &value[start..]
}

fn focus_marker(focused: bool) -> Span<'static> {
    if focused {
        Span::styled(
            "▶ ",
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::raw("  ")
    }
}

fn label_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(COLOR_DIM)
    }
}

/// Label line followed by the value line.
pub fn render_form_field(config: &FormFieldConfig) -> Vec<Line<'static>> {
    let label = Line::from(vec![
        focus_marker(config.focused),
        Span::styled(config.label.to_string(), label_style(config.focused)),
    ]);

    let editing = config.focused && !config.locked;
    // Leave a column for the cursor
    let room = config
        .width
        .map(|w| (w as usize).saturating_sub(VALUE_INDENT.len() + usize::from(editing)))
        .unwrap_or(usize::MAX);

    let (mut content, style) = match config.placeholder {
        Some(placeholder) if config.value.is_empty() && !editing => {
            (placeholder.to_string(), Style::default().fg(COLOR_DIM))
        }
        _ => (
            tail_fit(config.value, room).to_string(),
            Style::default().fg(Color::White),
        ),
    };
    if editing {
        content.push(CURSOR);
    }

    let value = Line::from(vec![
        Span::raw(VALUE_INDENT),
        Span::styled(content, style.bg(COLOR_INPUT_BG)),
    ]);

    vec![label, value]
}

/// `Label: ‹ value ›` for controls cycled with Left/Right.
pub fn render_choice(label: &str, value: &str, focused: bool) -> Line<'static> {
    let arrows = if focused {
        Style::default().fg(COLOR_ACCENT)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    Line::from(vec![
        focus_marker(focused),
        Span::styled(format!("{}: ", label), label_style(focused)),
        Span::styled("‹ ", arrows),
        Span::styled(value.to_string(), Style::default().fg(Color::White)),
        Span::styled(" ›", arrows),
    ])
}

pub fn render_checkbox(label: &str, checked: bool, focused: bool) -> Line<'static> {
    let mark = if checked { "[x] " } else { "[ ] " };
    Line::from(vec![
        focus_marker(focused),
        Span::styled(mark, Style::default().fg(COLOR_BRAND)),
        Span::styled(label.to_string(), label_style(focused)),
    ])
}

pub fn render_button(label: &str, focused: bool, disabled: bool) -> Line<'static> {
    let style = if disabled {
        Style::default().fg(COLOR_DIM)
    } else if focused {
        Style::default()
            .fg(Color::Black)
            .bg(COLOR_BRAND)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_BRAND)
    };
    Line::from(vec![
        focus_marker(focused),
        Span::styled(format!("[ {} ]", label), style),
    ])
}

// ============================================================================
// Tests
// ============================================================================
