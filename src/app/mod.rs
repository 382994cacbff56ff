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

mod events;
mod input;
mod keys;
mod state;

pub use events::{AppEvent, Command, dispatch, execute, update};
pub use input::{CHAR_LIMIT, INPUT_WIDTH, InputState, PLACEHOLDER};
pub use state::{App, Phase, Screen};

use crate::error::AppError;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste, Event, EventStream};
use futures::{Stream, StreamExt};

// ---------------------------------------------------------------------------
// TUI event loop
// ---------------------------------------------------------------------------

/// Take over the terminal, run until a quit command, then restore it.
/// The terminal is restored on every exit path, including loop errors.
pub async fn run_tui(app: &mut App) -> anyhow::Result<()> {
    let mut terminal = ratatui::try_init().map_err(|e| AppError::TerminalInit(e.to_string()))?;

    // Bracketed paste lets URLs containing `q` be pasted in. Not fatal when unsupported.
    if let Err(e) = crossterm::execute!(std::io::stdout(), EnableBracketedPaste) {
        tracing::warn!("failed to enable bracketed paste: {e}");
    }

    let mut events = EventStream::new();
    let result = drive(app, &mut events, |app| {
        terminal.draw(|f| crate::ui::render(f, app))?;
        Ok(())
    })
    .await;

    if let Err(e) = crossterm::execute!(std::io::stdout(), DisableBracketedPaste) {
        tracing::warn!("failed to disable bracketed paste: {e}");
    }
    ratatui::restore();

    result
}

/// Core loop, independent of the real terminal: pulls terminal events from
/// `events`, check results from `app.event_rx`, and calls `render` once per batch.
///
/// The terminal stream is only ever polled from `select!`, never with a
/// no-op waker, so its wakeups always reach this task.
pub async fn drive<S, R>(app: &mut App, events: &mut S, mut render: R) -> anyhow::Result<()>
where
    S: Stream<Item = std::io::Result<Event>> + Unpin,
    R: FnMut(&App) -> anyhow::Result<()>,
{
    render(app)?;

    loop {
        // Phase 1: wait for a terminal event or a check result
        tokio::select! {
            next = events.next() => match next {
                Some(Ok(event)) => dispatch(app, AppEvent::Terminal(event)),
                Some(Err(e)) => return Err(e.into()),
                None => {
                    tracing::info!("terminal event stream closed");
                    break;
                }
            },
            Some(event) = app.event_rx.recv() => {
                dispatch(app, event);
            }
        }

        // Phase 2: drain check results that are already queued
        while let Ok(event) = app.event_rx.try_recv() {
            dispatch(app, event);
        }

        if app.should_quit {
            break;
        }

        // Phase 3: render once per batch
        render(app)?;
    }

    if app.loading {
        tracing::debug!("quitting with a check still in flight; result will be dropped");
    }
    Ok(())
}
