// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Inputs carry what a browser form posts: dates are local time text and
//! enum choices are their wire names. Conversion into domain forms only
//! rejects text that cannot be read at all; everything else is left for the
//! step validation so all field messages surface together.

use crate::config::WorkflowConfig;
use crate::error::{ApiError, push_domain_error};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tessera::{WorkflowState, WorkflowStep};
use tessera_domain::{
    CancellationPolicy, DomainError, EventForm, NotificationMethod, TicketReleaseForm,
    TicketTypeForm, ValidationErrors, format_local_datetime, parse_local_datetime,
};

/// API request carrying the event details step.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EventDetailsInput {
    pub name: String,
    pub description: String,
    /// Local date and time, `yyyy-MM-ddTHH:mm`.
    pub date: String,
    pub location: String,
    pub organization_id: Option<i64>,
    pub is_private: bool,
}

impl EventDetailsInput {
    /// Converts the input into an event form.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` if the date text cannot be read in the
    /// configured time zone.
    pub fn into_form(self, config: &WorkflowConfig) -> Result<EventForm, ApiError> {
        let mut errors: ValidationErrors = ValidationErrors::new();
        let date: Option<DateTime<Utc>> =
            parse_optional_datetime(&mut errors, "date", &self.date, config.time_zone());
        if !errors.is_empty() {
            return Err(ApiError::InvalidInput { errors });
        }

        Ok(EventForm {
            name: self.name,
            description: self.description,
            date,
            location: non_blank(self.location),
            organization_id: self.organization_id,
            is_private: self.is_private,
        })
    }

    /// Renders a stored form back into input text for redisplay.
    #[must_use]
    pub fn from_form(form: &EventForm, config: &WorkflowConfig) -> Self {
        Self {
            name: form.name.clone(),
            description: form.description.clone(),
            date: format_optional_datetime(form.date, config.time_zone()),
            location: form.location.clone().unwrap_or_default(),
            organization_id: form.organization_id,
            is_private: form.is_private,
        }
    }
}

/// API request carrying the ticket release step.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TicketReleaseInput {
    pub name: String,
    pub description: String,
    /// Local date and time, `yyyy-MM-ddTHH:mm`.
    pub open: String,
    /// Local date and time, `yyyy-MM-ddTHH:mm`.
    pub close: String,
    pub ticket_release_method_id: Option<u32>,
    /// Minutes.
    pub open_window_duration: Option<u32>,
    pub max_tickets_per_user: Option<u32>,
    /// `email` or `sms`, case-insensitive.
    pub notification_method: String,
    /// `full_refund` or `no_refund`, case-insensitive.
    pub cancellation_policy: String,
    pub is_reserved: bool,
    pub promo_code: String,
}

impl TicketReleaseInput {
    /// Converts the input into a ticket release form.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` listing every date that cannot be
    /// read in the configured time zone and every unknown enum choice.
    pub fn into_form(self, config: &WorkflowConfig) -> Result<TicketReleaseForm, ApiError> {
        let tz: Tz = config.time_zone();
        let mut errors: ValidationErrors = ValidationErrors::new();

        let open: Option<DateTime<Utc>> =
            parse_optional_datetime(&mut errors, "open", &self.open, tz);
        let close: Option<DateTime<Utc>> =
            parse_optional_datetime(&mut errors, "close", &self.close, tz);
        let notification_method: Option<NotificationMethod> =
            parse_optional_choice(&mut errors, &self.notification_method);
        let cancellation_policy: Option<CancellationPolicy> =
            parse_optional_choice(&mut errors, &self.cancellation_policy);
        if !errors.is_empty() {
            return Err(ApiError::InvalidInput { errors });
        }

        Ok(TicketReleaseForm {
            open,
            close,
            notification_method,
            cancellation_policy,
            name: self.name,
            description: self.description,
            ticket_release_method_id: self.ticket_release_method_id,
            open_window_duration: self.open_window_duration,
            max_tickets_per_user: self.max_tickets_per_user,
            is_reserved: self.is_reserved,
            promo_code: non_blank(self.promo_code),
        })
    }

    /// Renders a stored form back into input text for redisplay.
    #[must_use]
    pub fn from_form(form: &TicketReleaseForm, config: &WorkflowConfig) -> Self {
        let tz: Tz = config.time_zone();

        Self {
            name: form.name.clone(),
            description: form.description.clone(),
            open: format_optional_datetime(form.open, tz),
            close: format_optional_datetime(form.close, tz),
            ticket_release_method_id: form.ticket_release_method_id,
            open_window_duration: form.open_window_duration,
            max_tickets_per_user: form.max_tickets_per_user,
            notification_method: form
                .notification_method
                .map(|method| method.as_str().to_string())
                .unwrap_or_default(),
            cancellation_policy: form
                .cancellation_policy
                .map(|policy| policy.as_str().to_string())
                .unwrap_or_default(),
            is_reserved: form.is_reserved,
            promo_code: form.promo_code.clone().unwrap_or_default(),
        }
    }
}

/// API request carrying one ticket type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketTypeInput {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub quantity_total: u32,
}

impl From<TicketTypeInput> for TicketTypeForm {
    fn from(input: TicketTypeInput) -> Self {
        Self {
            name: input.name,
            description: input.description,
            price: input.price,
            quantity_total: input.quantity_total,
        }
    }
}

/// API response describing where the workflow stands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowStatusResponse {
    /// The 1-based step index.
    pub step: u8,
    /// The step label.
    pub label: String,
    /// Whether a submission is waiting for the transport.
    pub submission_pending: bool,
}

impl From<&WorkflowState> for WorkflowStatusResponse {
    fn from(state: &WorkflowState) -> Self {
        let step: WorkflowStep = state.step();
        Self {
            step: step.index(),
            label: step.label().to_string(),
            submission_pending: state.is_submission_pending(),
        }
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

fn parse_optional_datetime(
    errors: &mut ValidationErrors,
    field: &str,
    text: &str,
    tz: Tz,
) -> Option<DateTime<Utc>> {
    if text.trim().is_empty() {
        return None;
    }
    parse_local_datetime(text, tz)
        .map_err(|err| errors.push(field, err.to_string()))
        .ok()
}

fn parse_optional_choice<T>(errors: &mut ValidationErrors, text: &str) -> Option<T>
where
    T: FromStr<Err = DomainError>,
{
    if text.trim().is_empty() {
        return None;
    }
    text.trim()
        .parse()
        .map_err(|err| push_domain_error(errors, &err))
        .ok()
}

fn format_optional_datetime(instant: Option<DateTime<Utc>>, tz: Tz) -> String {
    instant
        .map(|instant| format_local_datetime(instant, tz))
        .unwrap_or_default()
}
