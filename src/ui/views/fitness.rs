//! Fitness view with the calorie burn calculator.

use ratatui::text::Line;

use crate::app::{App, Field};
use crate::ui::components::{render_button, render_choice, render_form_field, FormFieldConfig};
use crate::ui::layout::LayoutContext;

use super::{bullets, heading, result, text};

const GUIDELINES: [&str; 3] = [
    "At least 150 minutes of moderate aerobic activity each week.",
    "Muscle-strengthening activities on two or more days a week.",
    "Warm up before and stretch after every session.",
];

pub fn lines(app: &App, ctx: &LayoutContext) -> Vec<Line<'static>> {
    let form = &app.activity;
    let mut lines = vec![heading("Fitness"), text("Weekly activity goals:")];
    if !ctx.is_extra_small() {
        lines.extend(bullets(&GUIDELINES));
    }

    lines.push(Line::default());
    lines.push(heading("Calorie Burn Calculator"));
    lines.push(render_choice(
        Field::Activity.label(),
        form.selected_activity().label(),
        app.is_focused(Field::Activity),
    ));
    lines.extend(render_form_field(
        &FormFieldConfig::new(Field::Duration.label(), &form.duration)
            .focused(app.is_focused(Field::Duration))
            .placeholder("10 - 180")
            .width(ctx.content_width()),
    ));
    lines.extend(render_form_field(
        &FormFieldConfig::new(Field::ActivityWeight.label(), &form.weight)
            .focused(app.is_focused(Field::ActivityWeight))
            .placeholder("40 - 150")
            .width(ctx.content_width()),
    ));
    lines.push(render_button(
        Field::CalculateCalories.label(),
        app.is_focused(Field::CalculateCalories),
        false,
    ));
    if let Some(line) = result(form.result.as_ref().map(|r| r.summary())) {
        lines.push(Line::default());
        lines.push(line);
    }
    lines
}
