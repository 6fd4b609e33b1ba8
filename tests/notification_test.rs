//! Feedback messages: auto-dismiss timing, replacement and Esc.

mod common;

use common::TestHub;
use healthhub::adapters::InMemoryStore;
use healthhub::app::{AppEvent, Field, NoticePhase, Severity};
use healthhub::config::HubConfig;
use healthhub::domain::ViewId;

/// Trigger the water calculator's empty-input error.
fn trigger_error(hub: &mut TestHub) {
    hub.send(AppEvent::Activate);
}

#[test]
fn test_notice_fades_then_clears() {
    let mut hub = TestHub::new(ViewId::Nutrition);
    trigger_error(&mut hub);

    let notice = hub.app.notifications.current().unwrap();
    assert_eq!(notice.severity, Severity::Error);
    assert_eq!(notice.phase, NoticePhase::Visible);

    hub.advance_to(4999);
    assert_eq!(
        hub.app.notifications.current().unwrap().phase,
        NoticePhase::Visible
    );

    hub.advance_to(5000);
    assert_eq!(
        hub.app.notifications.current().unwrap().phase,
        NoticePhase::Fading
    );

    hub.advance_to(5500);
    assert!(hub.app.notifications.current().is_none());
}

#[test]
fn test_new_message_restarts_the_clock() {
    let mut hub = TestHub::new(ViewId::Nutrition);
    trigger_error(&mut hub);

    hub.advance_to(3000);
    hub.type_text("70");
    hub.send(AppEvent::Activate);
    assert_eq!(
        hub.notice().as_deref(),
        Some("Great! Drink 2.45 liters of water daily for optimal health.")
    );

    // The first message's timers no longer apply
    hub.advance_to(5500);
    assert_eq!(
        hub.app.notifications.current().unwrap().phase,
        NoticePhase::Visible
    );
    hub.advance_to(8000);
    assert_eq!(
        hub.app.notifications.current().unwrap().phase,
        NoticePhase::Fading
    );
    hub.advance_to(8500);
    assert!(hub.notice().is_none());
}

#[test]
fn test_escape_dismisses() {
    let mut hub = TestHub::new(ViewId::Nutrition);
    trigger_error(&mut hub);
    hub.send(AppEvent::Dismiss);
    assert!(hub.notice().is_none());

    // Stale timers do nothing
    hub.advance_to(6000);
    assert!(hub.notice().is_none());
}

#[test]
fn test_clamp_warning_on_blur() {
    let mut hub = TestHub::new(ViewId::Nutrition);
    hub.type_text("250");
    hub.send(AppEvent::FocusNext);

    assert_eq!(hub.app.water.weight, "200");
    assert_eq!(hub.notice().as_deref(), Some("Maximum value is 200"));
}

#[test]
fn test_configured_durations() {
    let config = HubConfig::default()
        .with_notification_ms(1000)
        .with_notification_fade_ms(100);
    let mut hub = TestHub::with_config(ViewId::Nutrition, InMemoryStore::new(), config);
    trigger_error(&mut hub);

    hub.advance_to(1000);
    assert!(hub.notice().is_some());
    hub.advance_to(1100);
    assert!(hub.notice().is_none());
}

#[test]
fn test_playback_failure_shows_generic_message() {
    let mut hub = TestHub::new(ViewId::Mental);
    hub.player.set_play_should_fail(true);
    hub.focus(Field::Track);
    hub.send(AppEvent::Char(' '));

    assert_eq!(
        hub.notice().as_deref(),
        Some("Could not play audio. Please try again.")
    );
}
