//! Nutrition view with the water intake calculator.

use ratatui::text::Line;

use crate::app::{App, Field};
use crate::ui::components::{render_button, render_form_field, FormFieldConfig};
use crate::ui::layout::LayoutContext;

use super::{bullets, heading, hint, result, text};

const BASICS: [&str; 4] = [
    "Fill half your plate with vegetables and fruit.",
    "Choose whole grains over refined grains.",
    "Include a source of lean protein at every meal.",
    "Limit added sugar, salt and processed food.",
];

pub fn lines(app: &App, ctx: &LayoutContext) -> Vec<Line<'static>> {
    let mut lines = vec![heading("Nutrition"), text("Healthy eating basics:")];
    if !ctx.is_extra_small() {
        lines.extend(bullets(&BASICS));
    }

    lines.push(Line::default());
    lines.push(heading("Water Intake Calculator"));
    lines.extend(render_form_field(
        &FormFieldConfig::new(Field::WaterWeight.label(), &app.water.weight)
            .focused(app.is_focused(Field::WaterWeight))
            .placeholder("30 - 200")
            .width(ctx.content_width()),
    ));
    lines.push(render_button(
        Field::CalculateWater.label(),
        app.is_focused(Field::CalculateWater),
        false,
    ));
    if let Some(line) = result(app.water.result.map(|r| r.summary())) {
        lines.push(Line::default());
        lines.push(line);
        lines.push(hint("Based on 35 ml of water per kg of body weight."));
    }
    lines
}
