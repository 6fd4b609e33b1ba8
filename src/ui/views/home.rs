//! Home view: feature cards, tip of the day and saved progress.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::app::{App, Field};
use crate::domain::{UserPreferences, ViewId};
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM};

use super::{heading, hint, text};

fn card_blurb(view: ViewId) -> &'static str {
    match view {
        ViewId::Home => "",
        ViewId::Nutrition => "Balanced eating and your daily water needs",
        ViewId::Fitness => "Workout guidance and a calorie burn calculator",
        ViewId::Mental => "Wellness self-assessment and guided meditation",
        ViewId::Contact => "Questions or feedback? Get in touch",
    }
}

fn card(view: ViewId, focused: bool, ctx: &LayoutContext) -> Vec<Line<'static>> {
    let (marker, title_style) = if focused {
        (
            Span::styled("▶ ", Style::default().fg(COLOR_ACCENT)),
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (Span::raw("  "), Style::default().add_modifier(Modifier::BOLD))
    };
    let title = Line::from(vec![marker, Span::styled(view.title().to_string(), title_style)]);
    if ctx.is_extra_small() {
        vec![title]
    } else {
        vec![
            title,
            Line::from(Span::styled(
                format!("    {}", card_blurb(view)),
                Style::default().fg(COLOR_DIM),
            )),
        ]
    }
}

/// Saved results from earlier sessions.
fn progress(prefs: &UserPreferences) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if let Some(liters) = prefs.water_needed {
        lines.push(text(&format!("  Daily water goal: {:.2} liters", liters)));
    }
    if let Some(activity) = &prefs.last_activity {
        lines.push(text(&format!(
            "  Last workout: {}, {} min, {} kcal",
            activity.activity.label(),
            activity.duration,
            activity.calories_burned
        )));
    }
    if let Some(assessment) = &prefs.last_assessment {
        lines.push(text(&format!(
            "  Last assessment: {:.1}/5 on {}",
            assessment.score,
            assessment.date.format("%Y-%m-%d")
        )));
        lines.push(hint(&assessment.message));
    }
    if lines.is_empty() {
        lines.push(hint("Use the calculators to start tracking your progress."));
    }
    lines
}

pub fn lines(app: &App, ctx: &LayoutContext) -> Vec<Line<'static>> {
    let mut lines = vec![
        heading("Welcome to HealthHub"),
        text("Your companion for nutrition, fitness and mental well-being."),
        Line::default(),
    ];

    if let Some(name) = &app.prefs.name {
        lines.push(text(&format!("Welcome back, {}!", name)));
        lines.push(Line::default());
    }

    for field in Field::for_view(ViewId::Home) {
        if let Field::FeatureCard(view) = field {
            lines.extend(card(*view, app.is_focused(*field), ctx));
        }
    }

    lines.push(Line::default());
    lines.push(heading("Tip of the Day"));
    lines.push(text(app.daily_tip));

    lines.push(Line::default());
    lines.push(heading("Your Progress"));
    lines.extend(progress(&app.prefs));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Activity, LastActivity};
    use crate::ui::views::test_support::{app_on, joined};

    #[test]
    fn test_home_lists_feature_cards_and_tip() {
        let app = app_on(ViewId::Home, UserPreferences::new());
        let rendered = joined(&lines(&app, &LayoutContext::new(100, 40)));

        assert!(rendered.contains("▶ Nutrition"));
        assert!(rendered.contains("Mental Health"));
        assert!(rendered.contains(app.daily_tip));
        assert!(rendered.contains("start tracking your progress"));
    }

    #[test]
    fn test_home_shows_saved_progress() {
        let mut prefs = UserPreferences::new();
        prefs.water_needed = Some(2.45);
        prefs.name = Some("Ana".to_string());
        prefs.last_activity = Some(LastActivity {
            activity: Activity::Running,
            duration: 30.0,
            weight: 70.0,
            calories_burned: 350,
        });
        let app = app_on(ViewId::Home, prefs);
        let rendered = joined(&lines(&app, &LayoutContext::new(100, 40)));

        assert!(rendered.contains("Welcome back, Ana!"));
        assert!(rendered.contains("Daily water goal: 2.45 liters"));
        assert!(rendered.contains("Last workout: Running (6 mph), 30 min, 350 kcal"));
    }
}
