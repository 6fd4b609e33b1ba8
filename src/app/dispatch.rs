//! Event dispatch.
//!
//! `App::dispatch` is the single entry point for state changes. Handlers
//! validate, calculate, update preferences and notifications, drive the
//! router, and return the side effects the runtime must perform.

use chrono::Utc;

use crate::domain::{
    assess, calories_burned, parse_number, water_intake, PlaybackCommand, ViewId,
};
use crate::error::{HubError, ValidationError};

use super::forms::{clamp_buffer, push_char, step_index, step_rating, ContactState, ContactStatus};
use super::router::{NavOrigin, NavOutcome};
use super::timers::TimerKind;
use super::types::{AppEvent, Effect, Field, FieldKind};
use super::{App, Severity};

impl App {
    /// Apply `event` at monotonic time `now_ms`.
    pub fn dispatch(&mut self, event: AppEvent, now_ms: u64) -> Vec<Effect> {
        let effects = match event {
            AppEvent::Tick => return self.fire_timers(now_ms),
            AppEvent::Navigate(view) => self.navigate(view, NavOrigin::User, now_ms),
            AppEvent::HistoryPop(view) => self.navigate(view, NavOrigin::History, now_ms),
            AppEvent::Back => vec![Effect::HistoryBack],
            AppEvent::Forward => vec![Effect::HistoryForward],
            AppEvent::FocusNext => {
                self.move_focus(1, now_ms);
                Vec::new()
            }
            AppEvent::FocusPrev => {
                self.move_focus(-1, now_ms);
                Vec::new()
            }
            AppEvent::Char(c) => self.handle_char(c),
            AppEvent::Backspace => {
                self.handle_backspace();
                Vec::new()
            }
            AppEvent::Adjust(delta) => {
                self.handle_adjust(delta);
                Vec::new()
            }
            AppEvent::Activate => self.activate(now_ms),
            AppEvent::Restart => self.restart_track(),
            AppEvent::Scroll(delta) => {
                self.scroll = (self.scroll as i32 + delta as i32).clamp(0, u16::MAX as i32) as u16;
                Vec::new()
            }
            AppEvent::Dismiss => {
                self.notifications.dismiss(&mut self.timers);
                Vec::new()
            }
            AppEvent::EffectFailed(message) => {
                self.notify(message, Severity::Error, now_ms);
                Vec::new()
            }
            AppEvent::Quit => {
                self.should_quit = true;
                Vec::new()
            }
        };
        self.needs_redraw = true;
        effects
    }

    /// Fire every due timer, including timers scheduled by other timers
    /// that are already due.
    fn fire_timers(&mut self, now_ms: u64) -> Vec<Effect> {
        let mut effects = Vec::new();
        if self.router.is_transitioning() || self.notifications.current().is_some() {
            // Fades animate on every tick
            self.needs_redraw = true;
        }
        loop {
            let due = self.timers.pop_due(now_ms);
            if due.is_empty() {
                return effects;
            }
            self.needs_redraw = true;
            for fired in due {
                match fired.kind {
                    TimerKind::SwapView | TimerKind::FinishFadeIn => {
                        if let Some(swap) = self.router.on_timer(
                            fired.token,
                            fired.kind,
                            fired.due_ms,
                            &mut self.timers,
                        ) {
                            self.scroll = 0;
                            if swap.origin == NavOrigin::User {
                                effects.push(Effect::PushHistory(swap.to));
                            }
                        }
                    }
                    TimerKind::FadeNotification | TimerKind::ClearNotification => {
                        self.notifications.on_timer(
                            fired.token,
                            fired.kind,
                            fired.due_ms,
                            &mut self.timers,
                        );
                    }
                    TimerKind::FinishContactSend => {
                        effects.extend(self.finish_contact_send(fired.token, fired.due_ms));
                    }
                }
            }
        }
    }

    fn navigate(&mut self, view: ViewId, origin: NavOrigin, now_ms: u64) -> Vec<Effect> {
        match self
            .router
            .navigate_to(view, origin, now_ms, &mut self.timers)
        {
            NavOutcome::Reverted { record: true } => vec![Effect::PushHistory(view)],
            _ => Vec::new(),
        }
    }

    fn notify(&mut self, message: impl Into<String>, severity: Severity, now_ms: u64) {
        self.notifications
            .show(message, severity, now_ms, &mut self.timers);
    }

    /// Show `error` if its category reaches the user.
    fn show_error(&mut self, error: impl Into<HubError>, now_ms: u64) {
        let error = error.into();
        if error.is_user_visible() {
            self.notify(error.user_message(), Severity::Error, now_ms);
        } else {
            tracing::warn!(category = %error.category(), %error, "error not shown");
        }
    }

    fn focus_on(&mut self, field: Field) {
        let view = self.active_view();
        if let Some(index) = Field::for_view(view).iter().position(|f| *f == field) {
            self.focus[view.index()] = index;
        }
    }

    // ------------------------------------------------------------------
    // Focus and editing
    // ------------------------------------------------------------------

    fn move_focus(&mut self, delta: i8, now_ms: u64) {
        self.blur(now_ms);
        let view = self.active_view();
        let len = Field::for_view(view).len();
        let slot = &mut self.focus[view.index()];
        *slot = step_index(*slot, delta, len);
    }

    /// Focus is leaving the current field: clamp numeric input.
    fn blur(&mut self, now_ms: u64) {
        let field = self.focused_field();
        let FieldKind::Numeric { min, max } = field.kind() else {
            return;
        };
        let warning = self
            .numeric_buffer(field)
            .and_then(|buffer| clamp_buffer(buffer, min, max));
        if let Some(warning) = warning {
            self.notify(warning, Severity::Error, now_ms);
        }
    }

    fn numeric_buffer(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::WaterWeight => Some(&mut self.water.weight),
            Field::Duration => Some(&mut self.activity.duration),
            Field::ActivityWeight => Some(&mut self.activity.weight),
            _ => None,
        }
    }

    fn text_buffer(&mut self, field: Field) -> Option<&mut String> {
        let sending = self.contact.is_sending();
        match field {
            Field::ContactName | Field::ContactEmail | Field::ContactMessage if sending => None,
            Field::ContactName => Some(&mut self.contact.form.name),
            Field::ContactEmail => Some(&mut self.contact.form.email),
            Field::ContactMessage => Some(&mut self.contact.form.message),
            other => self.numeric_buffer(other),
        }
    }

    fn handle_char(&mut self, c: char) -> Vec<Effect> {
        let field = self.focused_field();
        match (field, c) {
            (Field::Newsletter, ' ') => {
                self.toggle_newsletter();
                Vec::new()
            }
            (Field::Track, 'r' | 'R') => self.restart_track(),
            (Field::Track, ' ') => self.toggle_playback(),
            _ => {
                let kind = field.kind();
                if let Some(buffer) = self.text_buffer(field) {
                    push_char(buffer, c, kind);
                }
                Vec::new()
            }
        }
    }

    fn handle_backspace(&mut self) {
        let field = self.focused_field();
        if let Some(buffer) = self.text_buffer(field) {
            buffer.pop();
        }
    }

    fn handle_adjust(&mut self, delta: i8) {
        match self.focused_field() {
            Field::Activity => {
                self.activity.activity = step_index(
                    self.activity.activity,
                    delta,
                    crate::domain::Activity::CHOICES.len(),
                );
            }
            Field::Anxiety => {
                self.assessment.input.anxiety = step_rating(self.assessment.input.anxiety, delta)
            }
            Field::Sleep => {
                self.assessment.input.sleep = step_rating(self.assessment.input.sleep, delta)
            }
            Field::Energy => {
                self.assessment.input.energy = step_rating(self.assessment.input.energy, delta)
            }
            Field::Track => {
                self.player.selected = step_index(self.player.selected, delta, self.tracks.len());
            }
            Field::ContactSubject if !self.contact.is_sending() => {
                self.contact.step_subject(delta)
            }
            _ => {}
        }
    }

    fn toggle_newsletter(&mut self) {
        if !self.contact.is_sending() {
            self.contact.form.newsletter = !self.contact.form.newsletter;
        }
    }

    /// Enter on the focused field.
    fn activate(&mut self, now_ms: u64) -> Vec<Effect> {
        match self.focused_field() {
            Field::FeatureCard(view) => self.navigate(view, NavOrigin::User, now_ms),
            Field::WaterWeight | Field::CalculateWater => self.calculate_water(now_ms),
            Field::Activity | Field::Duration | Field::ActivityWeight | Field::CalculateCalories => {
                self.calculate_calories(now_ms)
            }
            Field::Anxiety | Field::Sleep | Field::Energy | Field::CalculateAssessment => {
                self.calculate_assessment(now_ms)
            }
            Field::Track => self.toggle_playback(),
            Field::Newsletter => {
                self.toggle_newsletter();
                Vec::new()
            }
            Field::ContactName
            | Field::ContactEmail
            | Field::ContactSubject
            | Field::ContactMessage
            | Field::SubmitContact => self.submit_contact(now_ms),
        }
    }

    // ------------------------------------------------------------------
    // Calculators
    // ------------------------------------------------------------------

    fn calculate_water(&mut self, now_ms: u64) -> Vec<Effect> {
        let weight = parse_number(&self.water.weight).unwrap_or(f64::NAN);
        match water_intake(weight) {
            Ok(result) => {
                self.prefs.record_water(&result);
                self.water.result = Some(result);
                self.notify(
                    format!(
                        "Great! Drink {:.2} liters of water daily for optimal health.",
                        result.liters
                    ),
                    Severity::Success,
                    now_ms,
                );
                tracing::info!(weight, liters = result.liters, "water intake calculated");
                vec![Effect::SavePreferences(self.prefs.clone())]
            }
            Err(e) => {
                self.show_error(e, now_ms);
                self.focus_on(Field::WaterWeight);
                Vec::new()
            }
        }
    }

    fn calculate_calories(&mut self, now_ms: u64) -> Vec<Effect> {
        let duration = parse_number(&self.activity.duration).unwrap_or(f64::NAN);
        let weight = parse_number(&self.activity.weight).unwrap_or(f64::NAN);
        let activity = self.activity.selected_activity();

        match calories_burned(activity, duration, weight) {
            Ok(result) => {
                self.prefs.record_activity(&result);
                self.notify(
                    format!(
                        "Great workout! You burned approximately {} calories.",
                        result.calories
                    ),
                    Severity::Success,
                    now_ms,
                );
                tracing::info!(
                    activity = %result.activity,
                    duration,
                    weight,
                    calories = result.calories,
                    "calories calculated"
                );
                self.activity.result = Some(result);
                vec![Effect::SavePreferences(self.prefs.clone())]
            }
            Err(e) => {
                match e {
                    ValidationError::Duration { .. } => self.focus_on(Field::Duration),
                    ValidationError::ActivityWeight { .. } => self.focus_on(Field::ActivityWeight),
                    _ => {}
                }
                self.show_error(e, now_ms);
                Vec::new()
            }
        }
    }

    fn calculate_assessment(&mut self, now_ms: u64) -> Vec<Effect> {
        match assess(self.assessment.input) {
            Ok(result) => {
                self.prefs.record_assessment(&result, Utc::now());
                self.assessment.result = Some(result);
                self.notify(
                    "Assessment completed! Check your results above.",
                    Severity::Success,
                    now_ms,
                );
                tracing::info!(score = result.score, tier = result.tier.label(), "assessment completed");
                vec![Effect::SavePreferences(self.prefs.clone())]
            }
            Err(e) => {
                self.show_error(e, now_ms);
                Vec::new()
            }
        }
    }

    // ------------------------------------------------------------------
    // Contact form
    // ------------------------------------------------------------------

    fn submit_contact(&mut self, now_ms: u64) -> Vec<Effect> {
        if self.contact.is_sending() {
            return Vec::new();
        }
        match self.contact.form.validate(Utc::now()) {
            Ok(submission) => {
                let token = self
                    .timers
                    .schedule(TimerKind::FinishContactSend, now_ms + self.contact_delay_ms);
                self.contact.status = ContactStatus::Sending { token, submission };
                tracing::debug!("contact form sending");
            }
            Err(e) => self.show_error(e, now_ms),
        }
        Vec::new()
    }

    fn finish_contact_send(&mut self, token: u64, now_ms: u64) -> Vec<Effect> {
        let submission = match &self.contact.status {
            ContactStatus::Sending {
                token: pending,
                submission,
            } if *pending == token => submission.clone(),
            _ => return Vec::new(),
        };

        self.prefs
            .record_contact(&submission.name, &submission.email, submission.newsletter);
        self.contact = ContactState::default();
        self.notify(
            "Message sent successfully! We will get back to you within 24-48 hours.",
            Severity::Success,
            now_ms,
        );
        tracing::info!(subject = %submission.subject, "contact form sent");

        vec![
            Effect::AppendSubmission(submission),
            Effect::SavePreferences(self.prefs.clone()),
        ]
    }

    // ------------------------------------------------------------------
    // Meditation player
    // ------------------------------------------------------------------

    fn toggle_playback(&self) -> Vec<Effect> {
        let Some(track) = self.selected_track() else {
            return Vec::new();
        };
        let track = track.id.clone();
        let playing_this = self.player.status.is_playing()
            && self.player.status.track() == Some(track.as_str());
        let command = if playing_this {
            PlaybackCommand::Pause
        } else {
            PlaybackCommand::Play
        };
        vec![Effect::Playback { command, track }]
    }

    fn restart_track(&mut self) -> Vec<Effect> {
        match self.selected_track() {
            Some(track) => vec![Effect::Playback {
                command: PlaybackCommand::Restart,
                track: track.id.clone(),
            }],
            None => Vec::new(),
        }
    }
}
