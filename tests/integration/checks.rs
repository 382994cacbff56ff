// =====
// TESTS: 9
// =====
//
// End-to-end check scenarios.
// Drive key events through the dispatcher, let the background check run
// against a mock probe, and assert on the rendered frame.

use crossterm::event::KeyCode;
use pretty_assertions::assert_eq;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Position;
use url_check::app::{App, Phase};
use url_check::check::CheckError;

use crate::helpers::{
    MockProbe, deliver_check_result, press, render_frame_to_string, test_app, type_text,
};

fn cursor_after_render(app: &App) -> Position {
    let mut terminal = Terminal::new(TestBackend::new(60, 10)).expect("create test terminal");
    terminal.draw(|f| url_check::ui::render(f, app)).expect("draw frame");
    terminal.get_cursor_position().expect("cursor position")
}

#[tokio::test]
async fn successful_check_shows_status_and_empty_focused_input() {
    let probe = MockProbe::returning(200);
    let mut app = test_app(probe.clone());

    type_text(&mut app, "https://example.com");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.phase(), Phase::Loading);

    deliver_check_result(&mut app).await;

    assert_eq!(probe.calls(), vec!["https://example.com".to_owned()]);
    assert_eq!(app.phase(), Phase::Result);
    assert!(app.input.is_empty());
    assert!(app.input.focused());

    let frame = render_frame_to_string(&app, 60, 10);
    assert!(frame.contains("Status: 200 OK"));
    assert!(frame.contains("Enter the URL"));
    assert!(!frame.contains("https://example.com"));
}

#[tokio::test]
async fn not_found_renders_reason_phrase() {
    let mut app = test_app(MockProbe::returning(404));
    type_text(&mut app, "https://example.com/missing");
    press(&mut app, KeyCode::Enter);
    deliver_check_result(&mut app).await;

    assert!(render_frame_to_string(&app, 60, 10).contains("Status: 404 Not Found"));
}

#[tokio::test]
async fn empty_submit_shows_error_without_network_call() {
    let probe = MockProbe::returning(200);
    let mut app = test_app(probe.clone());

    press(&mut app, KeyCode::Enter);

    assert!(probe.calls().is_empty());
    assert!(app.event_rx.try_recv().is_err());
    assert!(!app.loading);
    assert!(app.input.focused());
    assert!(render_frame_to_string(&app, 60, 10).contains("Error: URL can't be empty"));
}

#[tokio::test]
async fn timeout_shows_description_and_no_status_code() {
    let description =
        "error sending request for url (http://unreachable.invalid/): operation timed out";
    let mut app = test_app(MockProbe::failing(CheckError::Timeout(description.to_owned())));

    type_text(&mut app, "http://unreachable.invalid");
    press(&mut app, KeyCode::Enter);
    deliver_check_result(&mut app).await;

    assert!(app.input.is_empty());
    assert!(app.input.focused());
    let frame = render_frame_to_string(&app, 120, 10);
    assert!(frame.contains(&format!("Error: {description}")));
    assert!(!frame.contains("Status:"));
}

#[tokio::test]
async fn loading_frame_shows_only_checking_text() {
    let mut app = test_app(MockProbe::returning(200));
    type_text(&mut app, "https://example.com");
    press(&mut app, KeyCode::Enter);

    let frame = render_frame_to_string(&app, 60, 10);
    assert!(frame.contains("Checking URL..."));
    assert!(!frame.contains("https://example.com"));
    assert!(!frame.contains("Press Enter"));
}

#[tokio::test]
async fn second_enter_while_loading_does_not_dispatch_again() {
    let probe = MockProbe::returning(200);
    let mut app = test_app(probe.clone());
    type_text(&mut app, "https://example.com");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);

    deliver_check_result(&mut app).await;
    tokio::task::yield_now().await;

    assert_eq!(probe.calls().len(), 1);
    assert!(app.event_rx.try_recv().is_err());
}

#[tokio::test]
async fn user_can_retry_after_failure() {
    let probe = MockProbe::failing(CheckError::Connect("connection refused".to_owned()));
    let mut app = test_app(probe.clone());

    type_text(&mut app, "http://localhost:1");
    press(&mut app, KeyCode::Enter);
    deliver_check_result(&mut app).await;
    assert!(render_frame_to_string(&app, 60, 10).contains("Error: connection refused"));

    type_text(&mut app, "http://localhost:2");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.phase(), Phase::Loading);
    deliver_check_result(&mut app).await;

    assert_eq!(
        probe.calls(),
        vec!["http://localhost:1".to_owned(), "http://localhost:2".to_owned()]
    );
}

#[tokio::test]
async fn initial_frame_shows_prompt_and_help() {
    let app = test_app(MockProbe::returning(200));
    let frame = render_frame_to_string(&app, 60, 10);
    assert!(frame.contains("Enter a URL to check its status:"));
    assert!(frame.contains("Press Enter to submit or Ctrl+C to quit."));
}

#[tokio::test]
async fn cursor_follows_typed_text() {
    let mut app = test_app(MockProbe::returning(200));
    // Screen inset (2, 1), field on the third line, prompt is two columns.
    assert_eq!(cursor_after_render(&app), Position::new(4, 3));

    type_text(&mut app, "http");
    assert_eq!(cursor_after_render(&app), Position::new(8, 3));
}
