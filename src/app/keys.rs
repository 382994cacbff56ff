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

use super::InputState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Editing operations on the input buffer, decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum InputAction {
    Insert(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    WordLeft,
    WordRight,
    DeleteWordBefore,
    DeleteWordAfter,
    DeleteToStart,
    DeleteToEnd,
}

fn is_ctrl_shortcut(modifiers: KeyModifiers) -> bool {
    modifiers.contains(KeyModifiers::CONTROL) && !modifiers.contains(KeyModifiers::ALT)
}

fn is_ctrl_char_shortcut(key: KeyEvent, expected: char) -> bool {
    is_ctrl_shortcut(key.modifiers)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&expected))
}

/// `ctrl+c`, a bare `q`, or `esc`. Checked before anything else, so `q`
/// can never be typed into the field (pasting still works).
pub(super) fn is_quit_key(key: KeyEvent) -> bool {
    if is_ctrl_char_shortcut(key, 'c') {
        return true;
    }
    match key.code {
        KeyCode::Esc => true,
        KeyCode::Char('q') => key.modifiers.difference(KeyModifiers::SHIFT).is_empty(),
        _ => false,
    }
}

pub(super) fn is_submit_key(key: KeyEvent) -> bool {
    key.code == KeyCode::Enter
}

pub(super) fn input_action(key: KeyEvent) -> Option<InputAction> {
    let ctrl = is_ctrl_shortcut(key.modifiers);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    let action = match key.code {
        KeyCode::Backspace if alt || ctrl => InputAction::DeleteWordBefore,
        KeyCode::Backspace => InputAction::Backspace,
        KeyCode::Delete => InputAction::Delete,
        KeyCode::Left if alt || ctrl => InputAction::WordLeft,
        KeyCode::Right if alt || ctrl => InputAction::WordRight,
        KeyCode::Left => InputAction::Left,
        KeyCode::Right => InputAction::Right,
        KeyCode::Home => InputAction::Home,
        KeyCode::End => InputAction::End,
        KeyCode::Char(c) if ctrl => match c.to_ascii_lowercase() {
            'a' => InputAction::Home,
            'e' => InputAction::End,
            'b' => InputAction::Left,
            'f' => InputAction::Right,
            'h' => InputAction::Backspace,
            'd' => InputAction::Delete,
            'w' => InputAction::DeleteWordBefore,
            'u' => InputAction::DeleteToStart,
            'k' => InputAction::DeleteToEnd,
            _ => return None,
        },
        KeyCode::Char(c) if alt => match c {
            'b' => InputAction::WordLeft,
            'f' => InputAction::WordRight,
            'd' => InputAction::DeleteWordAfter,
            _ => return None,
        },
        KeyCode::Char(c) => InputAction::Insert(c),
        _ => return None,
    };
    Some(action)
}

pub(super) fn apply(input: &mut InputState, action: InputAction) {
    match action {
        InputAction::Insert(c) => {
            if !input.insert_char(c) {
                tracing::trace!("input at char limit, dropping {c:?}");
            }
        }
        InputAction::Backspace => input.delete_char_before(),
        InputAction::Delete => input.delete_char_after(),
        InputAction::Left => input.move_left(),
        InputAction::Right => input.move_right(),
        InputAction::Home => input.move_home(),
        InputAction::End => input.move_end(),
        InputAction::WordLeft => input.move_word_left(),
        InputAction::WordRight => input.move_word_right(),
        InputAction::DeleteWordBefore => input.delete_word_before(),
        InputAction::DeleteWordAfter => input.delete_word_after(),
        InputAction::DeleteToStart => input.delete_to_start(),
        InputAction::DeleteToEnd => input.delete_to_end(),
    }
}
