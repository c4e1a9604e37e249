// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Temporal and conditional validation of ticket release forms.
//!
//! Validation runs in two phases over an ordered rule list:
//!
//! 1. Field rules: one check per field, reporting at most one message each
//! 2. Record rules: whole-form checks that read several fields and attach
//!    their message to one of them
//!
//! Every rule runs regardless of earlier failures, so all problems surface
//! at once.
//!
//! ## Invariants
//!
//! - Validation is pure: the evaluation instant is an argument, never read from a clock
//! - Boundaries are inclusive (`open == close`, `open + window == close`,
//!   `close == event_date` are all valid) except the "in the future" checks,
//!   which reject `now` itself
//! - A zero-length open window fails the window rule

use crate::access::promo_code_problem;
use crate::forms::TicketReleaseForm;
use crate::local_time::display_instant;
use crate::validation::{ValidationErrors, ValidationResult, check_positive_count, check_text};
use chrono::{DateTime, Duration, Utc};

/// Message attached to `open_window_duration` when the window does not fit.
pub const OPEN_WINDOW_MESSAGE: &str = "This duration is not valid with the current open and close times, try changing the duration or the open and close times";

/// Inputs that come from outside the form itself.
#[derive(Debug, Clone, Copy)]
struct ReleaseContext {
    event_date: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
}

type Rule = fn(&TicketReleaseForm, &ReleaseContext, &mut ValidationErrors);

const FIELD_RULES: [Rule; 10] = [
    name_rule,
    description_rule,
    open_rule,
    close_rule,
    release_method_rule,
    open_window_duration_rule,
    max_tickets_rule,
    notification_method_rule,
    cancellation_policy_rule,
    promo_code_rule,
];

const RECORD_RULES: [Rule; 2] = [open_window_rule, event_date_rule];

/// Validates a ticket release form against its event date.
///
/// # Arguments
///
/// * `form` - The release form as entered
/// * `event_date` - The date of the owning event, if known
/// * `now` - The evaluation instant for the "in the future" checks
///
/// # Errors
///
/// Returns every violated rule, field rules first, then record rules.
pub fn validate_ticket_release(
    form: &TicketReleaseForm,
    event_date: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> ValidationResult {
    let context: ReleaseContext = ReleaseContext { event_date, now };
    let mut errors: ValidationErrors = ValidationErrors::new();

    for rule in FIELD_RULES.iter().chain(RECORD_RULES.iter()) {
        rule(form, &context, &mut errors);
    }

    errors.into_result()
}

fn name_rule(form: &TicketReleaseForm, _: &ReleaseContext, errors: &mut ValidationErrors) {
    check_text(errors, "name", &form.name, (3, 80), "Name is required");
}

fn description_rule(form: &TicketReleaseForm, _: &ReleaseContext, errors: &mut ValidationErrors) {
    check_text(
        errors,
        "description",
        &form.description,
        (5, 500),
        "Description is required",
    );
}

fn open_rule(form: &TicketReleaseForm, context: &ReleaseContext, errors: &mut ValidationErrors) {
    match form.open {
        None => errors.push("open", "Open is required"),
        Some(open) if open <= context.now => errors.push("open", "Needs to be in the future"),
        Some(_) => {}
    }
}

fn close_rule(form: &TicketReleaseForm, context: &ReleaseContext, errors: &mut ValidationErrors) {
    let Some(close) = form.close else {
        errors.push("close", "Close is required");
        return;
    };

    if form.open.is_some_and(|open| close < open) {
        errors.push("close", "Close must be after open");
    } else if close <= context.now {
        errors.push("close", "Close must be in the future");
    }
}

fn release_method_rule(form: &TicketReleaseForm, _: &ReleaseContext, errors: &mut ValidationErrors) {
    check_positive_count(
        errors,
        "ticket_release_method_id",
        form.ticket_release_method_id,
        "Ticket Release Method ID is required",
        "Ticket Release Method ID is required",
    );
}

fn open_window_duration_rule(
    form: &TicketReleaseForm,
    _: &ReleaseContext,
    errors: &mut ValidationErrors,
) {
    check_positive_count(
        errors,
        "open_window_duration",
        form.open_window_duration,
        "Open Window Duration is required",
        "Open Window Duration must be greater than or equal to 1",
    );
}

fn max_tickets_rule(form: &TicketReleaseForm, _: &ReleaseContext, errors: &mut ValidationErrors) {
    check_positive_count(
        errors,
        "max_tickets_per_user",
        form.max_tickets_per_user,
        "Max Tickets Per User is required",
        "Max Tickets Per User must be greater than or equal to 1",
    );
}

fn notification_method_rule(
    form: &TicketReleaseForm,
    _: &ReleaseContext,
    errors: &mut ValidationErrors,
) {
    if form.notification_method.is_none() {
        errors.push("notification_method", "Notification Method is required");
    }
}

fn cancellation_policy_rule(
    form: &TicketReleaseForm,
    _: &ReleaseContext,
    errors: &mut ValidationErrors,
) {
    if form.cancellation_policy.is_none() {
        errors.push("cancellation_policy", "Cancellation Policy is required");
    }
}

/// Only active for reserved releases.
fn promo_code_rule(form: &TicketReleaseForm, _: &ReleaseContext, errors: &mut ValidationErrors) {
    if !form.is_reserved {
        return;
    }

    match form.promo_code.as_deref() {
        None | Some("") => errors.push("promo_code", "Promo Code is required"),
        Some(code) => {
            if let Some(message) = promo_code_problem(code) {
                errors.push("promo_code", message);
            }
        }
    }
}

/// The open window must start at `open` and end no later than `close`.
fn open_window_rule(form: &TicketReleaseForm, _: &ReleaseContext, errors: &mut ValidationErrors) {
    let fits: bool = match (form.open, form.close, form.open_window_duration) {
        (Some(open), Some(close), Some(minutes)) if minutes > 0 && open <= close => open
            .checked_add_signed(Duration::minutes(i64::from(minutes)))
            .is_some_and(|window_end| window_end <= close),
        _ => false,
    };

    if !fits {
        errors.push("open_window_duration", OPEN_WINDOW_MESSAGE);
    }
}

/// Both `open` and `close` must fall on or before the event date.
fn event_date_rule(form: &TicketReleaseForm, context: &ReleaseContext, errors: &mut ValidationErrors) {
    let Some(event_date) = context.event_date else {
        errors.push(
            "open",
            "An event date is required before the open and close times can be checked",
        );
        return;
    };

    let fits: bool = match (form.open, form.close) {
        (Some(open), Some(close)) => open <= event_date && close <= event_date,
        _ => false,
    };

    if !fits {
        errors.push(
            "open",
            format!(
                "The open and close times must be before the event date: {}",
                display_instant(event_date)
            ),
        );
    }
}
