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

/// Fatal errors that end the program before or outside the interactive loop.
/// Per-request failures never surface here; see [`crate::check::CheckError`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error("Terminal initialization failed: {0}")]
    TerminalInit(String),
    #[error("Async runtime failed to start: {0}")]
    Runtime(String),
    #[error("HTTP client could not be built: {0}")]
    HttpClient(String),
}

impl AppError {
    pub const TERMINAL_INIT_EXIT_CODE: i32 = 20;
    pub const RUNTIME_EXIT_CODE: i32 = 21;
    pub const HTTP_CLIENT_EXIT_CODE: i32 = 22;

    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::TerminalInit(_) => Self::TERMINAL_INIT_EXIT_CODE,
            Self::Runtime(_) => Self::RUNTIME_EXIT_CODE,
            Self::HttpClient(_) => Self::HTTP_CLIENT_EXIT_CODE,
        }
    }

    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::TerminalInit(_) => {
                "Could not initialize the terminal. Run urlcheck from an interactive terminal."
            }
            Self::Runtime(_) => "Could not start the async runtime.",
            Self::HttpClient(_) => "Could not set up the HTTP client (TLS backend unavailable?).",
        }
    }

    /// Underlying cause as reported by the failing subsystem.
    #[must_use]
    pub fn detail(&self) -> &str {
        match self {
            Self::TerminalInit(detail) | Self::Runtime(detail) | Self::HttpClient(detail) => {
                detail
            }
        }
    }
}
