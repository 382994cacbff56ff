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

use super::events::AppEvent;
use super::input::InputState;
use crate::check::{CheckError, StatusProbe};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Session state. Owned by the event loop and mutated only there.
pub struct App {
    pub input: InputState,
    /// True between dispatching a check and receiving its result.
    pub loading: bool,
    pub last_status: Option<u16>,
    pub last_error: Option<CheckError>,
    pub should_quit: bool,
    /// Background checks report back through this channel.
    pub event_tx: mpsc::UnboundedSender<AppEvent>,
    pub event_rx: mpsc::UnboundedReceiver<AppEvent>,
    pub probe: Arc<dyn StatusProbe>,
}

/// Coarse interaction phase, derived from the session fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Editing,
    Loading,
    Result,
}

/// What the screen shows, in display-priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen<'a> {
    Loading,
    Error(&'a CheckError),
    Status(u16),
    Prompt,
}

impl App {
    pub fn new(probe: Arc<dyn StatusProbe>) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let mut input = InputState::new();
        input.focus();
        Self {
            input,
            loading: false,
            last_status: None,
            last_error: None,
            should_quit: false,
            event_tx,
            event_rx,
            probe,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.last_error.is_some() || self.last_status.is_some() {
            Phase::Result
        } else if self.input.is_empty() {
            Phase::Idle
        } else {
            Phase::Editing
        }
    }

    /// Error wins over status; neither means the prompt.
    #[must_use]
    pub fn screen(&self) -> Screen<'_> {
        if self.loading {
            Screen::Loading
        } else if let Some(err) = &self.last_error {
            Screen::Error(err)
        } else if let Some(code) = self.last_status {
            Screen::Status(code)
        } else {
            Screen::Prompt
        }
    }

    /// Record the outcome of the in-flight check and get ready for the next URL.
    pub(super) fn finish_check(&mut self, outcome: Result<u16, CheckError>) {
        match outcome {
            Ok(code) => self.last_status = Some(code),
            Err(err) => self.last_error = Some(err),
        }
        self.loading = false;
        self.input.reset();
        self.input.focus();
    }
}
