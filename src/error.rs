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

use std::{error, fmt, io, result};
use std::fmt::{Display, Formatter};
use crate::vehicle::validation::ParameterError;

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    details: String
}

impl Error {
    pub(crate) fn new(kind: ErrorKind, details: String) -> Error {
        Error { kind, details }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn details(&self) -> &str {
        &self.details
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.kind.as_str(), self.details)
    }
}

impl error::Error for Error {}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::new(ErrorKind::IOError, format!("{}. {}", e.to_string(), e.kind().to_string()))
    }
}

impl From<config::ConfigError> for Error {
    fn from(e: config::ConfigError) -> Self {
        Error::new(ErrorKind::ConfigError, e.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(e: toml::ser::Error) -> Self {
        Error::new(ErrorKind::TomlEncodeError, e.to_string())
    }
}

impl From<ParameterError> for Error {
    fn from(e: ParameterError) -> Self {
        Error::new(ErrorKind::InvalidParameter, e.to_string())
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ErrorKind {
    InvalidParameter,
    ConfigError,
    IOError,
    LoggingError,
    TomlEncodeError
}

impl ErrorKind {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidParameter => "invalid vehicle parameter",
            ErrorKind::ConfigError => "config error",
            ErrorKind::IOError => "io error",
            ErrorKind::LoggingError => "logging error",
            ErrorKind::TomlEncodeError => "toml encode error"
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::{Error, ErrorKind};
    use crate::vehicle::validation::ParameterError;

    #[test]
    fn display_includes_kind_and_details() {
        let err = Error::new(ErrorKind::LoggingError, "subscriber already set".to_string());
        assert_eq!(err.to_string(), "logging error - subscriber already set");
    }

    #[test]
    fn parameter_errors_become_invalid_parameter() {
        let err: Error = ParameterError::NonPositiveMass(-1.0).into();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
        assert_eq!(err.details(), "Vehicle mass must be positive (got -1 kg)");
    }
}
