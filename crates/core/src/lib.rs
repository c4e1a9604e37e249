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

mod apply;
mod assembly;
mod clock;
mod command;
mod draft;
mod error;
mod payload;
mod state;
mod step;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::apply;
pub use assembly::{assemble_submission, prepare_ticket_release_addition};
pub use clock::{Clock, FixedClock, SystemClock};
pub use command::{Command, StepInput};
pub use draft::WorkflowDraft;
pub use error::{AssemblyError, CoreError};
pub use payload::{
    CompleteEventWorkflowRequest, CompleteTicketReleaseWorkflowRequest, EventPayload,
    TicketReleasePayload, TicketTypePayload,
};
pub use state::{
    SubmissionId, TransitionOutcome, TransitionResult, WorkflowSnapshot, WorkflowState,
};
pub use step::WorkflowStep;
