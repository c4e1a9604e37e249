// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while constructing domain values.
///
/// These are distinct from [`crate::ValidationErrors`]: a `DomainError` means a
/// single value could not be built at all, while validation errors describe
/// user-correctable problems with a whole form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The IANA time zone name is not known.
    InvalidTimezone(String),
    /// Failed to parse a local date/time string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// The local time does not exist in the time zone (DST gap).
    NonexistentLocalTime {
        /// The local date/time text.
        local: String,
        /// The time zone it was interpreted in.
        time_zone: String,
    },
    /// An epoch-millisecond value is outside the representable range.
    TimestampOutOfRange(i64),
    /// Unknown notification method name.
    InvalidNotificationMethod(String),
    /// Unknown cancellation policy name.
    InvalidCancellationPolicy(String),
    /// Promo code does not satisfy the promo code format.
    InvalidPromoCode {
        /// Why the code was rejected.
        reason: &'static str,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTimezone(tz) => write!(f, "Invalid time zone: {tz}"),
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::NonexistentLocalTime { local, time_zone } => {
                write!(f, "Local time {local} does not exist in time zone {time_zone}")
            }
            Self::TimestampOutOfRange(millis) => {
                write!(f, "Timestamp {millis} is out of range")
            }
            Self::InvalidNotificationMethod(value) => {
                write!(f, "Invalid notification method: {value}")
            }
            Self::InvalidCancellationPolicy(value) => {
                write!(f, "Invalid cancellation policy: {value}")
            }
            Self::InvalidPromoCode { reason } => write!(f, "Invalid promo code: {reason}"),
        }
    }
}

impl std::error::Error for DomainError {}
