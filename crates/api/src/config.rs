// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Workflow configuration.

use chrono_tz::Tz;
use tessera_domain::parse_time_zone;
use thiserror::Error;

/// Environment variable holding the IANA time zone for local time input.
pub const TIME_ZONE_ENV: &str = "TESSERA_TIME_ZONE";

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The time zone name is not a known IANA zone.
    #[error("{source_name} is not a valid IANA time zone: {value}")]
    InvalidTimeZone { source_name: String, value: String },

    /// The environment variable is set but not valid unicode.
    #[error("{name} is not valid unicode")]
    NotUnicode { name: String },
}

/// Settings shared by every workflow the controller drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkflowConfig {
    time_zone: Tz,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self { time_zone: Tz::UTC }
    }
}

impl WorkflowConfig {
    /// Creates a configuration interpreting local times in `time_zone`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidTimeZone` if the name is not a known zone.
    pub fn new(time_zone: &str) -> Result<Self, ConfigError> {
        let time_zone: Tz =
            parse_time_zone(time_zone).map_err(|_| ConfigError::InvalidTimeZone {
                source_name: String::from("time_zone"),
                value: time_zone.to_string(),
            })?;
        Ok(Self { time_zone })
    }

    /// Reads the configuration from the process environment.
    ///
    /// An unset variable yields the default (UTC).
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if `TESSERA_TIME_ZONE` is set to something unusable.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(TIME_ZONE_ENV) {
            Ok(value) => Self::from_value(TIME_ZONE_ENV, &value),
            Err(std::env::VarError::NotPresent) => Ok(Self::default()),
            Err(std::env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode {
                name: String::from(TIME_ZONE_ENV),
            }),
        }
    }

    /// Builds the configuration from a raw setting value.
    ///
    /// Blank values fall back to the default.
    pub(crate) fn from_value(source_name: &str, value: &str) -> Result<Self, ConfigError> {
        let value: &str = value.trim();
        if value.is_empty() {
            return Ok(Self::default());
        }
        parse_time_zone(value)
            .map(|time_zone| Self { time_zone })
            .map_err(|_| ConfigError::InvalidTimeZone {
                source_name: source_name.to_string(),
                value: value.to_string(),
            })
    }

    /// Returns the time zone local time text is interpreted in.
    #[must_use]
    pub const fn time_zone(&self) -> Tz {
        self.time_zone
    }
}
