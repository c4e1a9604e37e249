// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Async driver for one event creation workflow.
//!
//! The controller owns the workflow state behind a `tokio::sync::Mutex`.
//! The lock is released before the transport is awaited, so a second
//! `submit` arriving mid-flight sees the pending flag and is rejected. The
//! outcome is applied under the submission id it was issued with, so a
//! request sent before a restart never settles a later one.

use crate::config::WorkflowConfig;
use crate::error::{ApiError, translate_core_error, translate_transport_error};
use crate::request_response::{
    EventDetailsInput, TicketReleaseInput, TicketTypeInput, WorkflowStatusResponse,
};
use crate::transport::{SubmissionTransport, TransportError};
use tessera::{
    Clock, Command, CompleteEventWorkflowRequest, StepInput, SubmissionId, SystemClock,
    TransitionOutcome, TransitionResult, WorkflowDraft, WorkflowSnapshot, WorkflowState, apply,
};
use tessera_domain::TicketTypeForm;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

/// Drives a [`WorkflowState`] from API inputs and hands the finished
/// workflow to a [`SubmissionTransport`].
pub struct WorkflowController<T, C = SystemClock> {
    state: Mutex<WorkflowState>,
    transport: T,
    clock: C,
    config: WorkflowConfig,
}

impl<T, C> WorkflowController<T, C>
where
    T: SubmissionTransport,
    C: Clock,
{
    /// Creates a controller for a fresh workflow.
    #[must_use]
    pub fn new(transport: T, clock: C, config: WorkflowConfig) -> Self {
        Self::with_state(WorkflowState::new(), transport, clock, config)
    }

    /// Creates a controller continuing a workflow stored in the session.
    #[must_use]
    pub fn resume(
        snapshot: WorkflowSnapshot,
        transport: T,
        clock: C,
        config: WorkflowConfig,
    ) -> Self {
        Self::with_state(WorkflowState::resume(snapshot), transport, clock, config)
    }

    fn with_state(state: WorkflowState, transport: T, clock: C, config: WorkflowConfig) -> Self {
        Self {
            state: Mutex::new(state),
            transport,
            clock,
            config,
        }
    }

    /// Returns the configuration used to read local time input.
    #[must_use]
    pub const fn config(&self) -> &WorkflowConfig {
        &self.config
    }

    /// Returns where the workflow stands.
    pub async fn status(&self) -> WorkflowStatusResponse {
        WorkflowStatusResponse::from(&*self.state.lock().await)
    }

    /// Exports the workflow for the host's session storage.
    pub async fn snapshot(&self) -> WorkflowSnapshot {
        self.state.lock().await.snapshot()
    }

    /// Returns a copy of the draft collected so far.
    pub async fn draft(&self) -> WorkflowDraft {
        self.state.lock().await.draft().clone()
    }

    /// Validates the event details and moves to the ticket release step.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` for unreadable text,
    /// `ApiError::ValidationFailed` for broken field rules, or a transition
    /// error if the workflow is not on the event details step.
    pub async fn submit_event_details(
        &self,
        input: EventDetailsInput,
    ) -> Result<WorkflowStatusResponse, ApiError> {
        let form = input.into_form(&self.config)?;
        self.execute(Command::Advance(StepInput::EventDetails(form)))
            .await
            .map(|(status, _)| status)
    }

    /// Validates the ticket release and moves to the ticket types step.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` for unreadable text,
    /// `ApiError::ValidationFailed` for broken field or temporal rules, or a
    /// transition error if the workflow is not on the ticket release step.
    pub async fn submit_ticket_release(
        &self,
        input: TicketReleaseInput,
    ) -> Result<WorkflowStatusResponse, ApiError> {
        let form = input.into_form(&self.config)?;
        self.execute(Command::Advance(StepInput::TicketRelease(form)))
            .await
            .map(|(status, _)| status)
    }

    /// Validates the ticket types and moves to the review step.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::ValidationFailed` if the list is empty or an entry
    /// is invalid, or a transition error if the workflow is not on the
    /// ticket types step.
    pub async fn submit_ticket_types(
        &self,
        inputs: Vec<TicketTypeInput>,
    ) -> Result<WorkflowStatusResponse, ApiError> {
        let forms: Vec<TicketTypeForm> = inputs.into_iter().map(TicketTypeForm::from).collect();
        self.execute(Command::Advance(StepInput::TicketTypes(forms)))
            .await
            .map(|(status, _)| status)
    }

    /// Re-validates what the draft holds for the current step and moves on.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::ValidationFailed` if the stored input no longer
    /// validates, for example because its open time has passed.
    pub async fn continue_with_saved(&self) -> Result<WorkflowStatusResponse, ApiError> {
        self.execute(Command::Advance(StepInput::Retained))
            .await
            .map(|(status, _)| status)
    }

    /// Moves to the previous step.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::SubmissionInFlight` while a submission is pending.
    pub async fn back(&self) -> Result<WorkflowStatusResponse, ApiError> {
        self.execute(Command::Back).await.map(|(status, _)| status)
    }

    /// Discards the draft and returns to the first step.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the signature matches the other commands.
    pub async fn restart(&self) -> Result<WorkflowStatusResponse, ApiError> {
        self.execute(Command::Restart).await.map(|(status, _)| status)
    }

    /// Assembles the draft and sends it through the transport.
    ///
    /// On success the workflow starts over on the first step. On failure
    /// the draft is kept on the review step so the user can retry.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The workflow is not on the review step
    /// - Another submission is still in flight (`ApiError::SubmissionInFlight`)
    /// - The draft is incomplete (`ApiError::Internal`)
    /// - The transport failed (`ApiError::TransportFailure`)
    pub async fn submit(&self) -> Result<WorkflowStatusResponse, ApiError> {
        let (submission, request): (SubmissionId, CompleteEventWorkflowRequest) =
            match self.execute(Command::Submit).await? {
                (
                    _,
                    TransitionOutcome::SubmissionReady {
                        submission,
                        request,
                    },
                ) => (submission, request),
                (_, outcome) => {
                    return Err(ApiError::Internal {
                        message: format!("Submit produced {outcome:?}"),
                    });
                }
            };

        info!(
            submission = submission.get(),
            event = %request.event.name,
            ticket_types = request.ticket_types.len(),
            "Submitting event workflow"
        );
        let sent: Result<(), TransportError> = self.transport.submit(&request).await;

        let outcome: Command = match &sent {
            Ok(()) => Command::SubmissionSucceeded { submission },
            Err(err) => {
                error!(
                    submission = submission.get(),
                    error = %err,
                    retryable = err.is_retryable(),
                    "Event workflow submission failed"
                );
                Command::SubmissionFailed {
                    submission,
                    reason: err.to_string(),
                }
            }
        };

        // A restart while in flight makes the outcome stale; apply logs it
        // and whatever state followed the restart stays.
        let status: WorkflowStatusResponse = match self.execute(outcome).await {
            Ok((status, _)) => status,
            Err(ApiError::InvalidTransition { message }) => {
                debug!(submission = submission.get(), %message, "Submission outcome discarded");
                self.status().await
            }
            Err(err) => return Err(err),
        };

        sent.map(|()| status)
            .map_err(|err| translate_transport_error(&err))
    }

    async fn execute(
        &self,
        command: Command,
    ) -> Result<(WorkflowStatusResponse, TransitionOutcome), ApiError> {
        let mut state = self.state.lock().await;
        let TransitionResult { new_state, outcome } =
            apply(&state, command, self.clock.now()).map_err(translate_core_error)?;
        *state = new_state;
        let status: WorkflowStatusResponse = WorkflowStatusResponse::from(&*state);
        drop(state);

        Ok((status, outcome))
    }
}
