// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::transport::TransportError;
use tessera::{AssemblyError, CoreError};
use tessera_domain::{DomainError, ValidationErrors};

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The step input broke one or more field rules. The user can fix these.
    ValidationFailed {
        /// Every violated rule, in rule order.
        errors: ValidationErrors,
    },
    /// Input text could not be read at all.
    InvalidInput {
        /// Every unreadable field, in input order.
        errors: ValidationErrors,
    },
    /// The command does not fit the workflow's current step.
    InvalidTransition {
        /// A human-readable description of the error.
        message: String,
    },
    /// A submission is already in flight.
    SubmissionInFlight,
    /// The submission transport failed.
    TransportFailure {
        /// A human-readable description of the failure.
        message: String,
        /// Whether submitting again may succeed.
        retryable: bool,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ValidationFailed { errors } => write!(f, "Validation failed: {errors}"),
            Self::InvalidInput { errors } => write!(f, "Invalid input: {errors}"),
            Self::InvalidTransition { message } => write!(f, "Invalid transition: {message}"),
            Self::SubmissionInFlight => write!(f, "A submission is already in flight"),
            Self::TransportFailure { message, .. } => write!(f, "Submission failed: {message}"),
            Self::Internal { message } => write!(f, "Internal error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// # Arguments
///
/// * `err` - The domain error to translate
///
/// # Returns
///
/// An `ApiError` naming the input field the domain value came from.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let mut errors: ValidationErrors = ValidationErrors::new();
    push_domain_error(&mut errors, &err);
    ApiError::InvalidInput { errors }
}

/// Records `err` against the input field the domain value came from.
pub(crate) fn push_domain_error(errors: &mut ValidationErrors, err: &DomainError) {
    let field: &str = match err {
        DomainError::InvalidTimezone(_) => "time_zone",
        DomainError::DateParseError { .. }
        | DomainError::NonexistentLocalTime { .. }
        | DomainError::TimestampOutOfRange(_) => "date",
        DomainError::InvalidNotificationMethod(_) => "notification_method",
        DomainError::InvalidCancellationPolicy(_) => "cancellation_policy",
        DomainError::InvalidPromoCode { .. } => "promo_code",
    };

    errors.push(field, err.to_string());
}

/// Translates a core error into an API error.
///
/// Structural errors become `Internal`: the user cannot fix a draft that
/// lost data between steps.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::ValidationFailed(errors) => ApiError::ValidationFailed { errors },
        CoreError::InvalidTransition { .. }
        | CoreError::StepMismatch { .. }
        | CoreError::NoSubmissionPending
        | CoreError::StaleSubmission { .. } => ApiError::InvalidTransition {
            message: err.to_string(),
        },
        CoreError::SubmissionInFlight => ApiError::SubmissionInFlight,
        CoreError::Structural(assembly_err) => translate_assembly_error(&assembly_err),
    }
}

fn translate_assembly_error(err: &AssemblyError) -> ApiError {
    ApiError::Internal {
        message: format!("The draft is incomplete ({err}), please restart the workflow"),
    }
}

/// Translates a transport failure into an API error.
#[must_use]
pub fn translate_transport_error(err: &TransportError) -> ApiError {
    ApiError::TransportFailure {
        message: err.to_string(),
        retryable: err.is_retryable(),
    }
}
