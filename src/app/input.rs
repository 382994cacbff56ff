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

use unicode_width::UnicodeWidthChar;

pub const PLACEHOLDER: &str = "Enter the URL";
/// Maximum number of characters the buffer accepts.
pub const CHAR_LIMIT: usize = 256;
/// Visible width of the field in terminal columns.
pub const INPUT_WIDTH: u16 = 30;

/// Single-line editable buffer for the URL.
///
/// `cursor` and `offset` are character indices. `offset` is the first
/// character of the visible window; it follows the cursor so the cursor cell
/// always lies inside `width` columns.
#[derive(Debug, Clone)]
pub struct InputState {
    value: String,
    cursor: usize,
    offset: usize,
    focused: bool,
    pub placeholder: String,
    pub char_limit: usize,
    pub width: u16,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            offset: 0,
            focused: false,
            placeholder: PLACEHOLDER.to_owned(),
            char_limit: CHAR_LIMIT,
            width: INPUT_WIDTH,
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    #[must_use]
    pub fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    #[must_use]
    pub fn focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Clear the value and move the cursor home. Focus is left untouched.
    pub fn reset(&mut self) {
        self.value.clear();
        self.cursor = 0;
        self.offset = 0;
    }

    /// Replace the value, truncated to the char limit, with the cursor at the end.
    pub fn set_value(&mut self, value: &str) {
        self.value = value.chars().filter(|c| !c.is_control()).take(self.char_limit).collect();
        self.cursor = self.char_count();
        self.rescroll();
    }

    /// Insert a character at the cursor. Returns `false` when the buffer is full.
    pub fn insert_char(&mut self, c: char) -> bool {
        if c.is_control() || self.char_count() >= self.char_limit {
            return false;
        }
        let byte_idx = char_to_byte_index(&self.value, self.cursor);
        self.value.insert(byte_idx, c);
        self.cursor += 1;
        self.rescroll();
        true
    }

    /// Insert pasted text. Line breaks and other control characters are
    /// dropped; anything past the char limit is discarded.
    pub fn insert_str(&mut self, s: &str) {
        for c in s.chars().filter(|c| !c.is_control()) {
            if !self.insert_char(c) {
                break;
            }
        }
    }

    pub fn delete_char_before(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let byte_idx = char_to_byte_index(&self.value, self.cursor);
        self.value.remove(byte_idx);
        self.rescroll();
    }

    pub fn delete_char_after(&mut self) {
        if self.cursor >= self.char_count() {
            return;
        }
        let byte_idx = char_to_byte_index(&self.value, self.cursor);
        self.value.remove(byte_idx);
        self.rescroll();
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
        self.rescroll();
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
        self.rescroll();
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
        self.rescroll();
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
        self.rescroll();
    }

    pub fn move_word_left(&mut self) {
        self.cursor = self.word_start_before(self.cursor);
        self.rescroll();
    }

    pub fn move_word_right(&mut self) {
        self.cursor = self.word_end_after(self.cursor);
        self.rescroll();
    }

    pub fn delete_word_before(&mut self) {
        let start = self.word_start_before(self.cursor);
        self.remove_range(start, self.cursor);
        self.cursor = start;
        self.rescroll();
    }

    pub fn delete_word_after(&mut self) {
        let end = self.word_end_after(self.cursor);
        self.remove_range(self.cursor, end);
        self.rescroll();
    }

    pub fn delete_to_start(&mut self) {
        self.remove_range(0, self.cursor);
        self.cursor = 0;
        self.rescroll();
    }

    pub fn delete_to_end(&mut self) {
        self.remove_range(self.cursor, self.char_count());
        self.rescroll();
    }

    /// The slice of the value that fits in the field, starting at the scroll offset.
    #[must_use]
    pub fn visible_text(&self) -> String {
        let width = usize::from(self.width);
        let mut used = 0;
        let mut out = String::new();
        for c in self.value.chars().skip(self.offset) {
            let w = c.width().unwrap_or(0);
            if used + w > width {
                break;
            }
            used += w;
            out.push(c);
        }
        out
    }

    /// Column of the cursor relative to the start of the visible window.
    #[must_use]
    pub fn cursor_column(&self) -> u16 {
        u16::try_from(self.columns(self.offset, self.cursor)).unwrap_or(self.width)
    }

    fn columns(&self, from: usize, to: usize) -> usize {
        self.value
            .chars()
            .skip(from)
            .take(to.saturating_sub(from))
            .map(|c| c.width().unwrap_or(0))
            .sum()
    }

    fn rescroll(&mut self) {
        let width = usize::from(self.width);
        if self.cursor < self.offset {
            self.offset = self.cursor;
        }
        while self.offset < self.cursor && self.columns(self.offset, self.cursor) >= width {
            self.offset += 1;
        }
        // Pull the window back when deletions freed room on the right.
        let len = self.char_count();
        while self.offset > 0 && self.columns(self.offset - 1, len) < width {
            self.offset -= 1;
        }
    }

    fn remove_range(&mut self, from: usize, to: usize) {
        if from >= to {
            return;
        }
        let start = char_to_byte_index(&self.value, from);
        let end = char_to_byte_index(&self.value, to);
        self.value.replace_range(start..end, "");
    }

    /// Skip whitespace to the left, then the word before it.
    fn word_start_before(&self, from: usize) -> usize {
        let chars: Vec<char> = self.value.chars().collect();
        let mut idx = from.min(chars.len());
        while idx > 0 && chars[idx - 1].is_whitespace() {
            idx -= 1;
        }
        while idx > 0 && !chars[idx - 1].is_whitespace() {
            idx -= 1;
        }
        idx
    }

    /// Skip whitespace to the right, then the word after it.
    fn word_end_after(&self, from: usize) -> usize {
        let chars: Vec<char> = self.value.chars().collect();
        let mut idx = from.min(chars.len());
        while idx < chars.len() && chars[idx].is_whitespace() {
            idx += 1;
        }
        while idx < chars.len() && !chars[idx].is_whitespace() {
            idx += 1;
        }
        idx
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a character index to a byte index within a string.
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices().nth(char_idx).map_or(s.len(), |(i, _)| i)
}
