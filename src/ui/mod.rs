// url-check — An interactive terminal URL status checker
// Copyright (C) 2025  Simon Peter Rothgang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

mod input;
pub mod theme;

use crate::app::{App, Screen};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub const LOADING_TEXT: &str = "Checking URL...";
pub const PROMPT_TEXT: &str = "Enter a URL to check its status:";
pub const HELP_TEXT: &str = "Press Enter to submit or Ctrl+C to quit.";

/// Inset from the left edge and top of the terminal.
const SCREEN_PAD_X: u16 = 2;
const SCREEN_PAD_Y: u16 = 1;

/// Derived screen content. `input_row` is the line index of the input
/// field, absent while a check is loading.
pub struct View {
    pub lines: Vec<Line<'static>>,
    pub input_row: Option<u16>,
}

impl View {
    /// Plain text of the view, one line per entry.
    #[must_use]
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// "200 OK", "404 Not Found"; unknown codes render as the bare number.
#[must_use]
pub fn status_text(code: u16) -> String {
    let reason =
        reqwest::StatusCode::from_u16(code).ok().and_then(|status| status.canonical_reason());
    match reason {
        Some(reason) => format!("{code} {reason}"),
        None => code.to_string(),
    }
}

/// Pure function of state: which lines to show and where the field sits.
#[must_use]
pub fn view(app: &App) -> View {
    let field = input::line(&app.input);
    match app.screen() {
        Screen::Loading => View {
            lines: vec![Line::from(Span::styled(
                LOADING_TEXT,
                Style::default().fg(theme::STATUS_RUNNING),
            ))],
            input_row: None,
        },
        Screen::Error(err) => View {
            lines: vec![
                Line::from(Span::styled(
                    format!("Error: {err}"),
                    Style::default().fg(theme::STATUS_ERROR),
                )),
                Line::default(),
                field,
            ],
            input_row: Some(2),
        },
        Screen::Status(code) => View {
            lines: vec![
                Line::from(vec![
                    Span::raw("Status: "),
                    Span::styled(
                        status_text(code),
                        Style::default()
                            .fg(theme::status_color(code))
                            .add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::default(),
                field,
            ],
            input_row: Some(2),
        },
        Screen::Prompt => View {
            lines: vec![
                Line::from(PROMPT_TEXT),
                Line::default(),
                field,
                Line::default(),
                Line::from(Span::styled(HELP_TEXT, Style::default().fg(theme::DIM))),
            ],
            input_row: Some(2),
        },
    }
}

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let padded = Rect {
        x: area.x + SCREEN_PAD_X.min(area.width),
        y: area.y + SCREEN_PAD_Y.min(area.height),
        width: area.width.saturating_sub(SCREEN_PAD_X),
        height: area.height.saturating_sub(SCREEN_PAD_Y),
    };

    let view = view(app);
    frame.render_widget(Paragraph::new(view.lines), padded);

    // Cursor only when the field is on screen and accepting input
    if let Some(row) = view.input_row
        && app.input.focused()
    {
        let cursor_x = padded.x.saturating_add(input::cursor_x(&app.input));
        let cursor_y = padded.y.saturating_add(row);
        if cursor_x < padded.right() && cursor_y < padded.bottom() {
            frame.set_cursor_position((cursor_x, cursor_y));
        }
    }
}
