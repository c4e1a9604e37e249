// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::state::SubmissionId;
use crate::step::WorkflowStep;
use tessera_domain::{EventForm, TicketReleaseForm, TicketTypeForm};

/// A command represents user or system intent as data only.
///
/// Commands are the only way to request workflow state changes.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Validate the input for the current step and move forward.
    Advance(StepInput),
    /// Move to the previous step, keeping the draft.
    Back,
    /// Discard the draft and return to the first step.
    Restart,
    /// Assemble the draft into a submission request.
    Submit,
    /// The transport accepted the submission.
    SubmissionSucceeded {
        /// The id returned with `SubmissionReady`.
        submission: SubmissionId,
    },
    /// The transport rejected the submission.
    SubmissionFailed {
        /// The id returned with `SubmissionReady`.
        submission: SubmissionId,
        /// Why the transport failed.
        reason: String,
    },
}

/// The user input carried by an `Advance` command.
#[derive(Debug, Clone, PartialEq)]
pub enum StepInput {
    /// Input for the event details step.
    EventDetails(EventForm),
    /// Input for the ticket release step.
    TicketRelease(TicketReleaseForm),
    /// Input for the ticket types step.
    TicketTypes(Vec<TicketTypeForm>),
    /// Re-use whatever the draft already holds for the current step.
    Retained,
}

impl StepInput {
    /// Returns the step this input belongs to, or `None` for `Retained`.
    #[must_use]
    pub const fn step(&self) -> Option<WorkflowStep> {
        match self {
            Self::EventDetails(_) => Some(WorkflowStep::EventDetails),
            Self::TicketRelease(_) => Some(WorkflowStep::TicketRelease),
            Self::TicketTypes(_) => Some(WorkflowStep::TicketTypes),
            Self::Retained => None,
        }
    }
}

impl Command {
    /// Returns the command name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Advance(_) => "Advance",
            Self::Back => "Back",
            Self::Restart => "Restart",
            Self::Submit => "Submit",
            Self::SubmissionSucceeded { .. } => "SubmissionSucceeded",
            Self::SubmissionFailed { .. } => "SubmissionFailed",
        }
    }
}
