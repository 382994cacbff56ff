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

use crate::app::AppEvent;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Fixed client timeout for a single check. Not user-configurable.
pub const CHECK_TIMEOUT: Duration = Duration::from_secs(10);

/// Outcome of a failed check, shown verbatim after `Error: `.
///
/// Network variants carry the full description of the underlying failure
/// (the `reqwest` error plus its source chain).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckError {
    #[error("URL can't be empty")]
    EmptyUrl,
    #[error("{0}")]
    Timeout(String),
    #[error("{0}")]
    Connect(String),
    #[error("{0}")]
    InvalidUrl(String),
    #[error("{0}")]
    Request(String),
}

impl CheckError {
    #[must_use]
    pub fn from_reqwest(err: &reqwest::Error) -> Self {
        let description = describe(err);
        if err.is_timeout() {
            Self::Timeout(description)
        } else if err.is_builder() {
            Self::InvalidUrl(description)
        } else if err.is_connect() {
            Self::Connect(description)
        } else {
            Self::Request(description)
        }
    }
}

/// Flatten an error and its sources into one line, skipping sources whose
/// text is already part of the message.
fn describe(err: &(dyn std::error::Error + 'static)) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !text.is_empty() && !out.contains(&text) {
            out.push_str(": ");
            out.push_str(&text);
        }
        source = cause.source();
    }
    out
}

/// Something that can answer "what status does GET <url> return".
#[async_trait]
pub trait StatusProbe: Send + Sync {
    async fn status(&self, url: &str) -> Result<u16, CheckError>;
}

/// `StatusProbe` backed by a default `reqwest` client with [`CHECK_TIMEOUT`].
#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpProbe {
    pub fn new() -> reqwest::Result<Self> {
        Self::with_timeout(CHECK_TIMEOUT)
    }

    pub(crate) fn with_timeout(timeout: Duration) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, timeout })
    }

    /// Total request timeout the client was built with.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl StatusProbe for HttpProbe {
    async fn status(&self, url: &str) -> Result<u16, CheckError> {
        let response =
            self.client.get(url).send().await.map_err(|e| CheckError::from_reqwest(&e))?;
        Ok(response.status().as_u16())
    }
}

/// Run one check in the background and deliver exactly one result event.
///
/// The task never touches `App`; it only sends on `event_tx`. If the event
/// loop is gone by the time the request finishes, the result is dropped.
pub fn spawn_check(
    probe: Arc<dyn StatusProbe>,
    url: String,
    event_tx: mpsc::UnboundedSender<AppEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let started = Instant::now();
        let event = match probe.status(&url).await {
            Ok(code) => {
                tracing::debug!(%url, code, elapsed = ?started.elapsed(), "check succeeded");
                AppEvent::CheckSucceeded(code)
            }
            Err(err) => {
                tracing::debug!(%url, error = %err, elapsed = ?started.elapsed(), "check failed");
                AppEvent::CheckFailed(err)
            }
        };
        if event_tx.send(event).is_err() {
            tracing::debug!(%url, "check result dropped: event loop already closed");
        }
    })
}
