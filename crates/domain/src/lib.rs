// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod access;
mod error;
mod forms;
mod local_time;
mod release_rules;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use access::{PROMO_CODE_MAX_LEN, PROMO_CODE_MIN_LEN, PromoCode, ReleaseAccessPolicy};
pub use error::DomainError;
pub use forms::{EventForm, TicketReleaseForm, TicketTypeForm};
pub use local_time::{
    LOCAL_DATETIME_FORMAT, format_local_datetime, from_epoch_millis, parse_local_datetime,
    parse_time_zone, to_epoch_millis,
};
pub use release_rules::{OPEN_WINDOW_MESSAGE, validate_ticket_release};

// Re-export public types
pub use chrono_tz::Tz;
pub use types::{
    CancellationPolicy, Event, NotificationMethod, ReleasePhase, Ticket, TicketAllocation,
    TicketRelease, TicketRequest, TicketType,
};
pub use validation::{
    FieldError, ValidationErrors, ValidationResult, validate_event_form,
    validate_promo_code_access, validate_ticket_types,
};
