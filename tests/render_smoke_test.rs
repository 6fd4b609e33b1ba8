//! Render every view through a `TestBackend` at several terminal sizes.

mod common;

use common::TestHub;
use healthhub::app::{AppEvent, Field};
use healthhub::domain::ViewId;
use healthhub::ui;
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

const SIZES: [(u16, u16); 4] = [(160, 50), (100, 30), (70, 20), (40, 12)];

fn draw(hub: &TestHub, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|f| ui::render(f, &hub.app, hub.now_ms))
        .unwrap();
    buffer_text(terminal.backend().buffer())
}

fn buffer_text(buffer: &Buffer) -> String {
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_every_view_at_every_size() {
    for view in ViewId::ALL {
        let hub = TestHub::new(view);
        for (width, height) in SIZES {
            let text = draw(&hub, width, height);
            assert!(
                text.contains(view.short_title()) || text.contains(view.title()),
                "{:?} at {}x{}",
                view,
                width,
                height
            );
        }
    }
}

#[test]
fn test_water_result_is_drawn() {
    let mut hub = TestHub::new(ViewId::Nutrition);
    hub.type_text("70");
    hub.send(AppEvent::Activate);

    let text = draw(&hub, 120, 40);
    assert!(text.contains("Recommended Daily Water: 2.45 liters"));
    assert!(text.contains("Great! Drink 2.45 liters"));
}

#[test]
fn test_contact_sending_is_drawn() {
    let mut hub = TestHub::new(ViewId::Contact);
    hub.fill(Field::ContactName, "Ana");
    hub.fill(Field::ContactEmail, "ana@example.com");
    hub.focus(Field::ContactSubject);
    hub.send(AppEvent::Adjust(1));
    hub.fill(Field::ContactMessage, "Hello from the terminal");
    hub.send(AppEvent::Activate);

    let text = draw(&hub, 120, 40);
    assert!(text.contains("[ Sending... ]"));
    assert!(text.contains("General Inquiry"));
}

#[test]
fn test_mid_transition_frames() {
    let mut hub = TestHub::new(ViewId::Home);
    hub.send(AppEvent::Navigate(ViewId::Fitness));

    for now in (0..=800).step_by(50) {
        hub.advance_to(now);
        let text = draw(&hub, 120, 40);
        let expected = if now < 300 {
            "Welcome to HealthHub"
        } else {
            "Calorie Burn Calculator"
        };
        assert!(text.contains(expected), "at {}ms", now);
    }
}

#[test]
fn test_scrolled_past_content() {
    let mut hub = TestHub::new(ViewId::Mental);
    hub.send(AppEvent::Scroll(500));
    let text = draw(&hub, 100, 30);
    assert!(text.contains("HealthHub"));
}
