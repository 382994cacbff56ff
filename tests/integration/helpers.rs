use async_trait::async_trait;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use url_check::app::{App, AppEvent};
use url_check::check::{CheckError, StatusProbe};

/// Scripted probe that records every URL it is asked about.
pub struct MockProbe {
    outcome: Result<u16, CheckError>,
    calls: Mutex<Vec<String>>,
}

impl MockProbe {
    pub fn returning(code: u16) -> Arc<Self> {
        Arc::new(Self { outcome: Ok(code), calls: Mutex::new(Vec::new()) })
    }

    pub fn failing(err: CheckError) -> Arc<Self> {
        Arc::new(Self { outcome: Err(err), calls: Mutex::new(Vec::new()) })
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl StatusProbe for MockProbe {
    async fn status(&self, url: &str) -> Result<u16, CheckError> {
        self.calls.lock().unwrap().push(url.to_owned());
        self.outcome.clone()
    }
}

/// Build an `App` wired to `probe`. No terminal, just state.
pub fn test_app(probe: Arc<MockProbe>) -> App {
    App::new(probe)
}

pub fn press(app: &mut App, code: KeyCode) {
    press_with(app, code, KeyModifiers::NONE);
}

pub fn press_with(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    let key = KeyEvent::new(code, modifiers);
    url_check::app::dispatch(app, AppEvent::Terminal(Event::Key(key)));
}

pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Wait for the background check to report back and feed the result in.
pub async fn deliver_check_result(app: &mut App) {
    let event = tokio::time::timeout(Duration::from_secs(5), app.event_rx.recv())
        .await
        .expect("check result within 5s")
        .expect("event channel open");
    url_check::app::dispatch(app, event);
}

pub fn render_frame_to_string(app: &App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("create test terminal");
    terminal.draw(|f| url_check::ui::render(f, app)).expect("draw frame");

    let mut out = String::new();
    let buffer = terminal.backend().buffer();
    for y in 0..height {
        for x in 0..width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
