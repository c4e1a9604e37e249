// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The workflow transition function.
//!
//! ## Invariants
//!
//! - A failed command never changes the state
//! - The draft only ever holds step output that validated when it was stored
//! - While a submission is pending only `Restart` and the submission outcome
//!   commands are accepted, so the request in flight always matches the draft
//! - An outcome is only accepted for the submission that is pending; one
//!   left over from before a `Restart` never touches the new draft

use crate::assembly::assemble_submission;
use crate::command::{Command, StepInput};
use crate::draft::WorkflowDraft;
use crate::error::CoreError;
use crate::payload::CompleteEventWorkflowRequest;
use crate::state::{SubmissionId, TransitionOutcome, TransitionResult, WorkflowState};
use crate::step::WorkflowStep;
use chrono::{DateTime, Utc};
use tessera_domain::{
    EventForm, TicketReleaseForm, TicketTypeForm, validate_event_form, validate_ticket_release,
    validate_ticket_types,
};
use tracing::{debug, info, warn};

/// Applies a command to the current state, producing a new state.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `command` - The command to apply
/// * `now` - The evaluation instant for "in the future" checks
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and what happened
/// * `Err(CoreError)` if the command was rejected; `state` remains current
///
/// # Errors
///
/// Returns an error if:
/// - The step input fails validation (`CoreError::ValidationFailed`)
/// - The command is not allowed on the current step
/// - The command conflicts with the pending-submission flag
/// - The draft cannot be assembled on `Submit`
pub fn apply(
    state: &WorkflowState,
    command: Command,
    now: DateTime<Utc>,
) -> Result<TransitionResult, CoreError> {
    let command_name: &'static str = command.name();

    let result: Result<TransitionResult, CoreError> = match command {
        Command::Advance(input) => advance(state, input, now),
        Command::Back => back(state),
        Command::Restart => Ok(restart(state)),
        Command::Submit => submit(state),
        Command::SubmissionSucceeded { submission } => submission_succeeded(state, submission),
        Command::SubmissionFailed { submission, reason } => {
            submission_failed(state, submission, reason)
        }
    };

    match &result {
        Ok(transition) => debug!(
            command = command_name,
            from = state.step.index(),
            to = transition.new_state.step.index(),
            "Applied workflow command"
        ),
        Err(CoreError::ValidationFailed(errors)) => info!(
            command = command_name,
            step = state.step.index(),
            error_count = errors.len(),
            "Step input failed validation"
        ),
        Err(err @ (CoreError::NoSubmissionPending | CoreError::StaleSubmission { .. })) => warn!(
            command = command_name,
            step = state.step.index(),
            error = %err,
            "Ignoring stale submission outcome"
        ),
        // Logged where the draft was assembled
        Err(CoreError::Structural(_)) => {}
        Err(err) => info!(
            command = command_name,
            step = state.step.index(),
            error = %err,
            "Rejected workflow command"
        ),
    }

    result
}

fn advance(
    state: &WorkflowState,
    input: StepInput,
    now: DateTime<Utc>,
) -> Result<TransitionResult, CoreError> {
    if state.is_submission_pending() {
        return Err(CoreError::SubmissionInFlight);
    }

    let from: WorkflowStep = state.step;
    let to: WorkflowStep = from.next().ok_or(CoreError::InvalidTransition {
        step: from,
        command: "Advance",
    })?;

    if let Some(received) = input.step().filter(|received| *received != from) {
        return Err(CoreError::StepMismatch {
            expected: from,
            received,
        });
    }

    let mut draft: WorkflowDraft = state.draft.clone();

    match from {
        WorkflowStep::EventDetails => {
            let form: EventForm = match input {
                StepInput::EventDetails(form) => form,
                _ => draft.event.clone().unwrap_or_default(),
            };
            validate_event_form(&form, now)?;
            draft.event = Some(form);
        }
        WorkflowStep::TicketRelease => {
            let form: TicketReleaseForm = match input {
                StepInput::TicketRelease(form) => form,
                _ => draft.ticket_release.clone().unwrap_or_default(),
            };
            let event_date: Option<DateTime<Utc>> =
                draft.event.as_ref().and_then(|event| event.date);
            validate_ticket_release(&form, event_date, now)?;
            draft.ticket_release = Some(form);
        }
        WorkflowStep::TicketTypes => {
            let ticket_types: Vec<TicketTypeForm> = match input {
                StepInput::TicketTypes(ticket_types) => ticket_types,
                _ => draft.ticket_types.clone(),
            };
            validate_ticket_types(&ticket_types)?;
            draft.ticket_types = ticket_types;
        }
        // next() already rejected the last step
        WorkflowStep::ReviewSubmit => {
            return Err(CoreError::InvalidTransition {
                step: from,
                command: "Advance",
            });
        }
    }

    Ok(TransitionResult {
        new_state: WorkflowState {
            step: to,
            draft,
            ..state.clone()
        },
        outcome: TransitionOutcome::Advanced { from, to },
    })
}

fn back(state: &WorkflowState) -> Result<TransitionResult, CoreError> {
    if state.is_submission_pending() {
        return Err(CoreError::SubmissionInFlight);
    }

    let from: WorkflowStep = state.step;
    let Some(to) = from.previous() else {
        return Ok(TransitionResult {
            new_state: state.clone(),
            outcome: TransitionOutcome::Stayed,
        });
    };

    Ok(TransitionResult {
        new_state: WorkflowState {
            step: to,
            ..state.clone()
        },
        outcome: TransitionOutcome::MovedBack { from, to },
    })
}

fn restart(state: &WorkflowState) -> TransitionResult {
    if let Some(submission) = state.pending_submission {
        info!(
            submission = submission.get(),
            "Restarting with a submission in flight, its outcome will be ignored"
        );
    }

    TransitionResult {
        new_state: state.cleared(),
        outcome: TransitionOutcome::Restarted,
    }
}

fn submit(state: &WorkflowState) -> Result<TransitionResult, CoreError> {
    if state.is_submission_pending() {
        return Err(CoreError::SubmissionInFlight);
    }
    if state.step != WorkflowStep::ReviewSubmit {
        return Err(CoreError::InvalidTransition {
            step: state.step,
            command: "Submit",
        });
    }

    let request: CompleteEventWorkflowRequest = assemble_submission(&state.draft)?;
    let submissions_issued: u64 = state.submissions_issued + 1;
    let submission: SubmissionId = SubmissionId(submissions_issued);

    Ok(TransitionResult {
        new_state: WorkflowState {
            pending_submission: Some(submission),
            submissions_issued,
            ..state.clone()
        },
        outcome: TransitionOutcome::SubmissionReady {
            submission,
            request,
        },
    })
}

fn check_pending(state: &WorkflowState, received: SubmissionId) -> Result<(), CoreError> {
    match state.pending_submission {
        None => Err(CoreError::NoSubmissionPending),
        Some(pending) if pending != received => {
            Err(CoreError::StaleSubmission { received, pending })
        }
        Some(_) => Ok(()),
    }
}

fn submission_succeeded(
    state: &WorkflowState,
    submission: SubmissionId,
) -> Result<TransitionResult, CoreError> {
    check_pending(state, submission)?;

    Ok(TransitionResult {
        new_state: state.cleared(),
        outcome: TransitionOutcome::Submitted,
    })
}

fn submission_failed(
    state: &WorkflowState,
    submission: SubmissionId,
    reason: String,
) -> Result<TransitionResult, CoreError> {
    check_pending(state, submission)?;

    Ok(TransitionResult {
        new_state: WorkflowState {
            pending_submission: None,
            ..state.clone()
        },
        outcome: TransitionOutcome::SubmissionFailed { reason },
    })
}
