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

pub mod app;
pub mod check;
pub mod error;
pub mod ui;

use clap::Parser;
use std::path::PathBuf;

/// Interactive HTTP status checker. Run without arguments to open the prompt.
#[derive(Parser, Debug)]
#[command(name = "urlcheck", version, about = "Check the HTTP status of a URL from the terminal")]
pub struct Cli {
    /// Write tracing diagnostics to this file (disabled when omitted)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Tracing filter directives such as `url_check=debug` (defaults to RUST_LOG, then `info`)
    #[arg(long, value_name = "DIRECTIVES")]
    pub log_filter: Option<String>,

    /// Append to the log file instead of truncating it
    #[arg(long, requires = "log_file")]
    pub log_append: bool,
}
