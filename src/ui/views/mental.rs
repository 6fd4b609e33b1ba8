//! Mental health view: wellness self-assessment and the meditation player.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::app::{App, Field};
use crate::domain::meditation::format_clock;
use crate::traits::PlayerStatus;
use crate::ui::components::{render_button, render_choice};
use crate::ui::layout::LayoutContext;
use crate::ui::theme::tier_color;

use super::{heading, hint, text};

fn rating_label(rating: Option<u8>) -> String {
    match rating {
        Some(value) => format!("{} / 5", value),
        None => "not answered".to_string(),
    }
}

fn scale_hint(field: Field) -> &'static str {
    match field {
        Field::Anxiety => "1 = rarely, 5 = constantly",
        Field::Sleep => "1 = none, 5 = severe",
        Field::Energy => "1 = exhausted, 5 = energetic",
        _ => "",
    }
}

fn assessment(app: &App, ctx: &LayoutContext) -> Vec<Line<'static>> {
    let input = &app.assessment.input;
    let mut lines = vec![heading("Wellness Self-Assessment")];

    for (field, rating) in [
        (Field::Anxiety, input.anxiety),
        (Field::Sleep, input.sleep),
        (Field::Energy, input.energy),
    ] {
        lines.push(render_choice(
            field.label(),
            &rating_label(rating),
            app.is_focused(field),
        ));
        if !ctx.is_extra_small() {
            lines.push(hint(scale_hint(field)));
        }
    }
    lines.push(render_button(
        Field::CalculateAssessment.label(),
        app.is_focused(Field::CalculateAssessment),
        false,
    ));

    if let Some(result) = &app.assessment.result {
        let style = Style::default()
            .fg(tier_color(result.tier))
            .add_modifier(Modifier::BOLD);
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::raw("Your score: "),
            Span::styled(result.score_label(), style),
            Span::styled(format!("  ({})", result.tier.label()), style),
        ]));
        lines.push(Line::from(Span::styled(
            result.tier.message().to_string(),
            Style::default().fg(tier_color(result.tier)),
        )));
    }
    lines
}

/// Status of the selected track as shown under the selector.
fn player_status(app: &App) -> String {
    let Some(track) = app.selected_track() else {
        return "No tracks available".to_string();
    };
    let length = format_clock(track.duration);
    match &app.player.status {
        PlayerStatus::Playing { track: id, position } if *id == track.id => {
            format!("\u{25B6} Playing  {} / {}", format_clock(*position), length)
        }
        PlayerStatus::Paused { track: id, position } if *id == track.id => {
            format!("\u{23F8} Paused  {} / {}", format_clock(*position), length)
        }
        PlayerStatus::Playing { track: id, .. } => {
            let title = app
                .tracks
                .iter()
                .find(|t| t.id == *id)
                .map(|t| t.title.as_str())
                .unwrap_or(id.as_str());
            format!("Now playing: {}", title)
        }
        _ => format!("\u{25A0} Stopped  00:00 / {}", length),
    }
}

fn player(app: &App) -> Vec<Line<'static>> {
    let focused = app.is_focused(Field::Track);
    let title = app
        .selected_track()
        .map(|t| format!("{} ({})", t.title, format_clock(t.duration)))
        .unwrap_or_default();

    let mut lines = vec![
        heading("Guided Meditation"),
        render_choice(Field::Track.label(), &title, focused),
        text(&format!("    {}", player_status(app))),
    ];
    if focused {
        lines.push(hint("Space play/pause, Ctrl+R restart"));
    }
    lines
}

pub fn lines(app: &App, ctx: &LayoutContext) -> Vec<Line<'static>> {
    let mut lines = vec![
        heading("Mental Health"),
        text("Check in with yourself, then take a few minutes to unwind."),
        Line::default(),
    ];
    lines.extend(assessment(app, ctx));
    lines.push(Line::default());
    lines.extend(player(app));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::domain::{assess, AssessmentInput, UserPreferences, ViewId};
    use crate::ui::views::test_support::{app_on, joined};

    fn render(app: &App) -> String {
        joined(&lines(app, &LayoutContext::new(100, 40)))
    }

    #[test]
    fn test_unanswered_questions() {
        let app = app_on(ViewId::Mental, UserPreferences::new());
        let rendered = render(&app);
        assert!(rendered.contains("▶ How often do you feel anxious?: ‹ not answered ›"));
        assert!(rendered.contains("Deep Breathing (05:00)"));
        assert!(rendered.contains("Stopped  00:00 / 05:00"));
    }

    #[test]
    fn test_assessment_result_shows_tier_message() {
        let mut app = app_on(ViewId::Mental, UserPreferences::new());
        app.assessment.input = AssessmentInput::new(4, 4, 2);
        app.assessment.result = Some(assess(app.assessment.input).unwrap());
        let rendered = render(&app);

        assert!(rendered.contains("4 / 5"));
        assert!(rendered.contains("Your score: 4.0/5  (Moderate)"));
        assert!(rendered.contains("Moderate. Consider practicing stress management"));
    }

    #[test]
    fn test_player_status_follows_selected_track() {
        let mut app = app_on(ViewId::Mental, UserPreferences::new());
        app.player.status = PlayerStatus::Paused {
            track: "breathing".to_string(),
            position: Duration::from_secs(83),
        };
        assert!(render(&app).contains("Paused  01:23 / 05:00"));

        app.player.selected = 2;
        app.player.status = PlayerStatus::Playing {
            track: "breathing".to_string(),
            position: Duration::from_secs(5),
        };
        let rendered = render(&app);
        assert!(rendered.contains("Sleep Meditation (15:00)"));
        assert!(rendered.contains("Now playing: Deep Breathing"));
    }
}
