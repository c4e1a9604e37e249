// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::state::SubmissionId;
use crate::step::WorkflowStep;
use tessera_domain::{DomainError, ValidationErrors};

/// Errors that can occur during workflow transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The step input failed validation. The state is unchanged.
    ValidationFailed(ValidationErrors),
    /// The command is not allowed on the current step.
    InvalidTransition {
        /// The step the workflow is on.
        step: WorkflowStep,
        /// The rejected command.
        command: &'static str,
    },
    /// The advance input belongs to a different step.
    StepMismatch {
        /// The step the workflow is on.
        expected: WorkflowStep,
        /// The step the input was built for.
        received: WorkflowStep,
    },
    /// A submission is already waiting for the transport.
    SubmissionInFlight,
    /// A submission outcome arrived with no submission pending.
    NoSubmissionPending,
    /// A submission outcome belongs to an earlier submission than the
    /// pending one.
    StaleSubmission {
        /// The submission the outcome belongs to.
        received: SubmissionId,
        /// The submission waiting for the transport.
        pending: SubmissionId,
    },
    /// The draft is missing data that earlier steps should have stored.
    Structural(AssemblyError),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ValidationFailed(errors) => write!(f, "Validation failed: {errors}"),
            Self::InvalidTransition { step, command } => {
                write!(f, "{command} is not allowed on {step}")
            }
            Self::StepMismatch { expected, received } => {
                write!(f, "Input for {received} cannot be used on {expected}")
            }
            Self::SubmissionInFlight => write!(f, "A submission is already in flight"),
            Self::NoSubmissionPending => write!(f, "No submission is pending"),
            Self::StaleSubmission { received, pending } => write!(
                f,
                "Outcome of submission {received} does not match pending submission {pending}"
            ),
            Self::Structural(err) => write!(f, "Incomplete draft: {err}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<ValidationErrors> for CoreError {
    fn from(errors: ValidationErrors) -> Self {
        Self::ValidationFailed(errors)
    }
}

impl From<AssemblyError> for CoreError {
    fn from(err: AssemblyError) -> Self {
        Self::Structural(err)
    }
}

/// Errors raised while assembling a submission from a draft.
///
/// These indicate a bug or corrupted session state upstream, never
/// something the user can fix by editing a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssemblyError {
    /// The event details step has not stored anything.
    MissingEventDetails,
    /// The ticket release step has not stored anything.
    MissingTicketRelease,
    /// The ticket types step has not stored anything.
    MissingTicketTypes,
    /// A required field is empty in an otherwise stored form.
    MissingField {
        /// The form the field belongs to.
        form: &'static str,
        /// The missing field.
        field: &'static str,
    },
    /// The stored release has an unusable access policy.
    InvalidAccessPolicy(DomainError),
}

impl std::fmt::Display for AssemblyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingEventDetails => write!(f, "Event details are missing"),
            Self::MissingTicketRelease => write!(f, "Ticket release is missing"),
            Self::MissingTicketTypes => write!(f, "Ticket types are missing"),
            Self::MissingField { form, field } => write!(f, "Missing {form}.{field}"),
            Self::InvalidAccessPolicy(err) => write!(f, "Invalid access policy: {err}"),
        }
    }
}

impl std::error::Error for AssemblyError {}
