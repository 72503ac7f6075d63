/*
 * Copyright (c):
 * 2025 zephyrj
 * zephyrj@protonmail.com
 *
 * This file is part of lap-time-sim.
 *
 * lap-time-sim is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * lap-time-sim is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with lap-time-sim. If not, see <https://www.gnu.org/licenses/>.
 */

use std::fs;
use std::str::FromStr;
use tracing::{info, Level};
use crate::error::{Error, ErrorKind, Result};
use crate::settings::LoggingSettings;

/// Send all tracing output to the log file described by `settings`.
///
/// Can only succeed once per process
pub fn init(settings: &LoggingSettings) -> Result<()> {
    let level = Level::from_str(&settings.level).map_err(|e| {
        Error::new(ErrorKind::ConfigError,
                   format!("Unknown log level '{}'. {}", settings.level, e.to_string()))
    })?;
    fs::create_dir_all(&settings.directory)?;

    let file_appender = tracing_appender::rolling::never(&settings.directory, &settings.filename);
    let subscriber = tracing_subscriber::fmt()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_max_level(level)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber).map_err(|e| {
        Error::new(ErrorKind::LoggingError, format!("Failed to init logging. {}", e.to_string()))
    })?;
    info!("Logging initialised");
    Ok(())
}
