// =====
// TESTS: 4
// =====
//
// Quit handling across phases. `q`, `esc` and `ctrl+c` end the session
// whether idle, loading or showing a result.

use crossterm::event::{KeyCode, KeyModifiers};
use url_check::app::{App, Phase};

use crate::helpers::{MockProbe, deliver_check_result, press, press_with, test_app, type_text};

fn quit_keys() -> [(KeyCode, KeyModifiers); 3] {
    [
        (KeyCode::Char('q'), KeyModifiers::NONE),
        (KeyCode::Esc, KeyModifiers::NONE),
        (KeyCode::Char('c'), KeyModifiers::CONTROL),
    ]
}

fn assert_quits(mut app: App, expected: Phase, (code, modifiers): (KeyCode, KeyModifiers)) {
    assert_eq!(app.phase(), expected);
    press_with(&mut app, code, modifiers);
    assert!(app.should_quit, "{code:?} did not quit from {expected:?}");
}

#[tokio::test]
async fn quit_from_idle() {
    for key in quit_keys() {
        assert_quits(test_app(MockProbe::returning(200)), Phase::Idle, key);
    }
}

#[tokio::test]
async fn quit_from_loading() {
    for key in quit_keys() {
        let mut app = test_app(MockProbe::returning(200));
        type_text(&mut app, "https://example.com");
        press(&mut app, KeyCode::Enter);
        assert_quits(app, Phase::Loading, key);
    }
}

#[tokio::test]
async fn quit_from_result() {
    for key in quit_keys() {
        let mut app = test_app(MockProbe::returning(500));
        type_text(&mut app, "https://example.com");
        press(&mut app, KeyCode::Enter);
        deliver_check_result(&mut app).await;
        assert_quits(app, Phase::Result, key);
    }
}

#[tokio::test]
async fn q_quits_even_mid_url() {
    let mut app = test_app(MockProbe::returning(200));
    type_text(&mut app, "https://example.com/");
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);
    assert_eq!(app.input.value(), "https://example.com/");
}
