// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Conversion between local wall-clock text and absolute instants.
//!
//! Forms are edited as local text (`2026-11-02T18:30`, as produced by a
//! `datetime-local` input). Everything past the form layer works on UTC
//! instants, and the wire format is epoch milliseconds.
//!
//! ## Invariants
//!
//! - `parse_local_datetime(format_local_datetime(t, tz), tz) == t` for every
//!   instant `t` with zero seconds that is not inside a DST overlap
//! - Local times inside a DST gap are rejected, never shifted
//! - Local times inside a DST overlap resolve to the earlier instant

use crate::error::DomainError;
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Format used when rendering instants back into form fields.
pub const LOCAL_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Accepted input formats, tried in order.
const ACCEPTED_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
];

/// Parses an IANA time zone name such as `Europe/Stockholm`.
///
/// # Errors
///
/// Returns `DomainError::InvalidTimezone` if the name is unknown.
pub fn parse_time_zone(name: &str) -> Result<Tz, DomainError> {
    name.trim()
        .parse()
        .map_err(|_| DomainError::InvalidTimezone(name.to_string()))
}

/// Parses local date/time text in the given time zone into a UTC instant.
///
/// # Errors
///
/// Returns an error if:
/// - The text matches none of the accepted formats
/// - The local time does not exist in `tz` (skipped by a DST transition)
pub fn parse_local_datetime(text: &str, tz: Tz) -> Result<DateTime<Utc>, DomainError> {
    let trimmed: &str = text.trim();

    let naive: NaiveDateTime = ACCEPTED_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| DomainError::DateParseError {
            date_string: text.to_string(),
            error: String::from("expected YYYY-MM-DDTHH:MM"),
        })?;

    let local = tz
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| DomainError::NonexistentLocalTime {
            local: trimmed.to_string(),
            time_zone: tz.name().to_string(),
        })?;

    Ok(local.with_timezone(&Utc))
}

/// Formats a UTC instant as local date/time text in the given time zone.
#[must_use]
pub fn format_local_datetime(instant: DateTime<Utc>, tz: Tz) -> String {
    instant
        .with_timezone(&tz)
        .format(LOCAL_DATETIME_FORMAT)
        .to_string()
}

/// Returns the instant as milliseconds since the Unix epoch.
#[must_use]
pub fn to_epoch_millis(instant: DateTime<Utc>) -> i64 {
    instant.timestamp_millis()
}

/// Builds a UTC instant from milliseconds since the Unix epoch.
///
/// # Errors
///
/// Returns `DomainError::TimestampOutOfRange` if the value cannot be represented.
pub fn from_epoch_millis(millis: i64) -> Result<DateTime<Utc>, DomainError> {
    DateTime::<Utc>::from_timestamp_millis(millis).ok_or(DomainError::TimestampOutOfRange(millis))
}

/// Renders an instant for human-readable validation messages.
pub(crate) fn display_instant(instant: DateTime<Utc>) -> String {
    instant.format("%Y-%m-%d %H:%M UTC").to_string()
}
