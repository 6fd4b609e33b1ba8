//! Contact view.

use ratatui::text::Line;

use crate::app::{App, Field};
use crate::ui::components::{
    render_button, render_checkbox, render_choice, render_form_field, FormFieldConfig,
};
use crate::ui::layout::LayoutContext;

use super::{heading, hint, text};

pub fn lines(app: &App, ctx: &LayoutContext) -> Vec<Line<'static>> {
    let state = &app.contact;
    let form = &state.form;
    let locked = state.is_sending();

    let mut lines = vec![heading("Contact Us")];
    if !ctx.is_extra_small() {
        lines.push(text(
            "Have a question or feedback? Send us a message and we will reply within 24-48 hours.",
        ));
    }
    lines.push(Line::default());

    let field = |field: Field, value: &str, placeholder: &'static str| {
        render_form_field(
            &FormFieldConfig::new(field.label(), value)
                .focused(app.is_focused(field))
                .locked(locked)
                .placeholder(placeholder)
                .width(ctx.content_width()),
        )
    };

    lines.extend(field(Field::ContactName, &form.name, "Your name"));
    lines.extend(field(Field::ContactEmail, &form.email, "you@example.com"));
    lines.push(render_choice(
        Field::ContactSubject.label(),
        form.subject.map(|s| s.label()).unwrap_or("Select a subject"),
        app.is_focused(Field::ContactSubject),
    ));
    lines.extend(field(
        Field::ContactMessage,
        &form.message,
        "At least 10 characters",
    ));
    lines.push(render_checkbox(
        Field::Newsletter.label(),
        form.newsletter,
        app.is_focused(Field::Newsletter),
    ));
    lines.push(render_button(
        state.button_label(),
        app.is_focused(Field::SubmitContact),
        locked,
    ));
    if locked {
        lines.push(hint("Please wait while your message is sent."));
    }
    lines
}
