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

use super::App;
use super::keys;
use crate::check::{CheckError, spawn_check};
use crossterm::event::{Event, KeyEvent, KeyEventKind};
use std::sync::Arc;

/// Everything the state machine reacts to.
#[derive(Debug)]
pub enum AppEvent {
    Terminal(Event),
    CheckSucceeded(u16),
    CheckFailed(CheckError),
}

/// Side effect requested by a transition, executed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Check(String),
    Quit,
}

/// Apply one event to the session state. Pure apart from logging: any I/O
/// is returned as a [`Command`] for the caller to run.
pub fn update(app: &mut App, event: AppEvent) -> Option<Command> {
    match event {
        AppEvent::Terminal(event) => handle_terminal_event(app, event),
        AppEvent::CheckSucceeded(code) => {
            handle_check_result(app, Ok(code));
            None
        }
        AppEvent::CheckFailed(err) => {
            handle_check_result(app, Err(err));
            None
        }
    }
}

/// Run a command produced by [`update`].
pub fn execute(app: &mut App, command: Command) {
    match command {
        Command::Check(url) => {
            tracing::debug!(%url, "dispatching check");
            // Detached: the handle is dropped, there is no cancellation.
            drop(spawn_check(Arc::clone(&app.probe), url, app.event_tx.clone()));
        }
        Command::Quit => app.should_quit = true,
    }
}

/// `update` followed by `execute`; what the event loop calls per event.
pub fn dispatch(app: &mut App, event: AppEvent) {
    if let Some(command) = update(app, event) {
        execute(app, command);
    }
}

fn handle_terminal_event(app: &mut App, event: Event) -> Option<Command> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Paste(text) => {
            if app.loading || !app.input.focused() {
                return None;
            }
            app.input.insert_str(&text);
            None
        }
        // Resize, focus and mouse events only need a redraw.
        _ => None,
    }
}

fn handle_key(app: &mut App, key: KeyEvent) -> Option<Command> {
    if keys::is_quit_key(key) {
        return Some(Command::Quit);
    }
    if app.loading {
        tracing::trace!(?key, "ignoring key while a check is in flight");
        return None;
    }
    if keys::is_submit_key(key) {
        return submit(app);
    }
    if app.input.focused()
        && let Some(action) = keys::input_action(key)
    {
        keys::apply(&mut app.input, action);
    }
    None
}

fn submit(app: &mut App) -> Option<Command> {
    let url = app.input.value().to_owned();
    if url.is_empty() {
        app.last_error = Some(CheckError::EmptyUrl);
        app.input.focus();
        return None;
    }

    app.loading = true;
    app.last_error = None;
    app.input.blur();
    Some(Command::Check(url))
}

fn handle_check_result(app: &mut App, outcome: Result<u16, CheckError>) {
    if !app.loading {
        tracing::warn!(?outcome, "check result arrived with no check in flight");
        return;
    }
    app.finish_check(outcome);
}
