// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::access::promo_code_problem;
use crate::forms::{EventForm, TicketTypeForm};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single user-correctable problem, attached to one form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// The offending field (e.g. `open`, `ticket_types[1].price`).
    pub field: String,
    /// A human-readable reason.
    pub message: String,
}

impl FieldError {
    /// Creates a new `FieldError`.
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// All validation failures of one form, in rule evaluation order.
///
/// Returned inside `Err`, so an instance handed to callers is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

/// Outcome of validating a form.
pub type ValidationResult = Result<(), ValidationErrors>;

impl ValidationErrors {
    /// Creates an empty collector.
    #[must_use]
    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Records a failure.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    /// Appends all failures of `other`.
    pub fn extend(&mut self, other: Self) {
        self.errors.extend(other.errors);
    }

    /// Returns whether no failure has been recorded.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of failures.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns all failures in evaluation order.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Returns an iterator over the failures.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.errors.iter()
    }

    /// Returns the messages attached to `field`.
    #[must_use]
    pub fn messages_for(&self, field: &str) -> Vec<&str> {
        self.errors
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.message.as_str())
            .collect()
    }

    /// Returns whether any failure is attached to `field`.
    #[must_use]
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// Converts the collector into a validation result.
    ///
    /// # Errors
    ///
    /// Returns `self` if at least one failure was recorded.
    pub fn into_result(self) -> ValidationResult {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rendered: Vec<String> = self.errors.iter().map(ToString::to_string).collect();
        write!(f, "{}", rendered.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// Checks a required text field against a character-length range.
///
/// Blank input reports `required_message`; otherwise length is measured in characters.
pub(crate) fn check_text(
    errors: &mut ValidationErrors,
    field: &str,
    value: &str,
    (min, max): (usize, usize),
    required_message: &str,
) {
    if value.trim().is_empty() {
        errors.push(field, required_message);
        return;
    }
    let len: usize = value.chars().count();
    if len < min {
        errors.push(field, "Too short");
    } else if len > max {
        errors.push(field, "Too long");
    }
}

/// Checks that an optional count is present and at least 1.
pub(crate) fn check_positive_count(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<u32>,
    required_message: &str,
    minimum_message: &str,
) {
    match value {
        None => errors.push(field, required_message),
        Some(0) => errors.push(field, minimum_message),
        Some(_) => {}
    }
}

/// Validates the event details form.
///
/// Rules:
/// - `name`: required, 3-50 characters
/// - `description`: required, 5-500 characters
/// - `date`: required, strictly after `now`
/// - `location`: required
/// - `organization_id`: required
///
/// # Errors
///
/// Returns every violated rule, at most one per field.
pub fn validate_event_form(form: &EventForm, now: DateTime<Utc>) -> ValidationResult {
    let mut errors: ValidationErrors = ValidationErrors::new();

    check_text(&mut errors, "name", &form.name, (3, 50), "Name is required");
    check_text(
        &mut errors,
        "description",
        &form.description,
        (5, 500),
        "Description is required",
    );

    match form.date {
        None => errors.push("date", "Date is required"),
        Some(date) if date <= now => errors.push("date", "Date must be in the future"),
        Some(_) => {}
    }

    if form
        .location
        .as_deref()
        .is_none_or(|location| location.trim().is_empty())
    {
        errors.push("location", "Location is required");
    }

    if form.organization_id.is_none() {
        errors.push("organization_id", "Team is required");
    }

    errors.into_result()
}

/// Validates the ticket types entered for one release.
///
/// At least one ticket type is required. Each entry needs a name, a positive
/// price and a positive quantity. Failures are attached to
/// `ticket_types[<index>].<field>`.
///
/// # Errors
///
/// Returns every violated rule across all entries.
pub fn validate_ticket_types(ticket_types: &[TicketTypeForm]) -> ValidationResult {
    let mut errors: ValidationErrors = ValidationErrors::new();

    if ticket_types.is_empty() {
        errors.push("ticket_types", "At least one ticket type is required");
        return errors.into_result();
    }

    for (index, ticket_type) in ticket_types.iter().enumerate() {
        if ticket_type.name.trim().is_empty() {
            errors.push(format!("ticket_types[{index}].name"), "Name is required");
        }
        // Rejects NaN as well as zero and negatives
        if !(ticket_type.price.is_finite() && ticket_type.price > 0.0) {
            errors.push(
                format!("ticket_types[{index}].price"),
                "Price must be greater than 0",
            );
        }
        if ticket_type.quantity_total == 0 {
            errors.push(
                format!("ticket_types[{index}].quantity_total"),
                "Quantity must be greater than 0",
            );
        }
    }

    errors.into_result()
}

/// Validates a promo code typed by a user to unlock a reserved release.
///
/// # Errors
///
/// Returns a single `promo_code` failure if the code is empty or malformed.
pub fn validate_promo_code_access(code: &str) -> ValidationResult {
    let mut errors: ValidationErrors = ValidationErrors::new();

    if code.is_empty() {
        errors.push("promo_code", "Enter a promo code");
    } else if let Some(message) = promo_code_problem(code) {
        errors.push("promo_code", message);
    }

    errors.into_result()
}
