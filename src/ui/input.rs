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

use crate::app::InputState;
use crate::ui::theme;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthChar;

/// Prompt prefix width: "❯ " = 2 columns
pub(super) const PROMPT_WIDTH: u16 = 2;

/// One-line view of the field: prompt, then either the visible window of
/// the value or the dimmed placeholder.
pub(super) fn line(input: &InputState) -> Line<'static> {
    let prompt = Span::styled(
        format!("{} ", theme::PROMPT_CHAR),
        Style::default().fg(theme::RUST_ORANGE),
    );
    if input.is_empty() {
        let placeholder = truncate_to_width(&input.placeholder, usize::from(input.width));
        return Line::from(vec![prompt, Span::styled(placeholder, Style::default().fg(theme::DIM))]);
    }
    Line::from(vec![prompt, Span::raw(input.visible_text())])
}

/// Cursor x offset from the start of the field, prompt included.
pub(super) fn cursor_x(input: &InputState) -> u16 {
    PROMPT_WIDTH + input.cursor_column()
}

fn truncate_to_width(text: &str, width: usize) -> String {
    let mut used = 0;
    text.chars()
        .take_while(|c| {
            used += c.width().unwrap_or(0);
            used <= width
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn empty_field_shows_placeholder() {
        let input = InputState::new();
        assert_eq!(text(&line(&input)), "❯ Enter the URL");
        assert_eq!(cursor_x(&input), PROMPT_WIDTH);
    }

    #[test]
    fn long_value_is_windowed_to_field_width() {
        let mut input = InputState::new();
        input.set_value(&"x".repeat(100));
        let rendered = text(&line(&input));
        assert_eq!(rendered.chars().count(), 2 + 29);
        assert_eq!(cursor_x(&input), PROMPT_WIDTH + 29);
    }

    #[test]
    fn truncate_counts_columns() {
        assert_eq!(truncate_to_width("abcdef", 3), "abc");
        assert_eq!(truncate_to_width("日本語", 4), "日本");
    }
}
