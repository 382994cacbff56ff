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

use ratatui::style::Color;

// Accent
pub const RUST_ORANGE: Color = Color::Rgb(244, 118, 0);

// UI chrome
pub const DIM: Color = Color::DarkGray;
pub const PROMPT_CHAR: &str = "❯";

// Status colors
pub const STATUS_RUNNING: Color = Color::Cyan;
pub const STATUS_SUCCESS: Color = Color::Green;
pub const STATUS_REDIRECT: Color = Color::Yellow;
pub const STATUS_ERROR: Color = Color::Red;

/// Color for an HTTP status line, by status class.
pub fn status_color(code: u16) -> Color {
    match code {
        200..=299 => STATUS_SUCCESS,
        300..=399 => STATUS_REDIRECT,
        400..=599 => STATUS_ERROR,
        _ => Color::White,
    }
}
