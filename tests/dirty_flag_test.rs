//! Tests for the dirty flag mechanism
//!
//! The dirty flag (`needs_redraw`) limits drawing to frames where something
//! changed. Idle ticks must leave it clear; animations must keep setting it.

mod common;

use common::TestHub;
use healthhub::app::AppEvent;
use healthhub::domain::ViewId;

#[test]
fn test_app_initializes_with_needs_redraw_true() {
    let hub = TestHub::new(ViewId::Home);
    assert!(hub.app.needs_redraw, "App should initialize with needs_redraw=true");
}

#[test]
fn test_idle_tick_does_not_redraw() {
    let mut hub = TestHub::new(ViewId::Home);
    hub.app.needs_redraw = false;
    hub.advance(50);
    assert!(!hub.app.needs_redraw);
}

#[test]
fn test_key_input_marks_dirty() {
    let mut hub = TestHub::new(ViewId::Nutrition);
    hub.app.needs_redraw = false;
    hub.send(AppEvent::Char('7'));
    assert!(hub.app.needs_redraw);
}

#[test]
fn test_transition_ticks_mark_dirty() {
    let mut hub = TestHub::new(ViewId::Home);
    hub.send(AppEvent::Navigate(ViewId::Contact));
    for _ in 0..10 {
        hub.app.needs_redraw = false;
        hub.advance(50);
        assert!(hub.app.needs_redraw, "fade frame at {}ms", hub.now_ms);
    }
}

#[test]
fn test_visible_notice_keeps_redrawing_until_cleared() {
    let mut hub = TestHub::new(ViewId::Nutrition);
    hub.send(AppEvent::Activate);
    hub.app.needs_redraw = false;
    hub.advance(50);
    assert!(hub.app.needs_redraw);

    hub.advance_to(5500);
    hub.app.needs_redraw = false;
    hub.advance(50);
    assert!(!hub.app.needs_redraw);
}
