// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    state_at_review, state_at_ticket_release, state_at_ticket_types, state_submitting, test_now,
};
use crate::{
    Command, CoreError, TransitionOutcome, TransitionResult, WorkflowDraft, WorkflowState,
    WorkflowStep, apply,
};

#[test]
fn test_back_on_first_step_is_a_no_op() {
    let state: WorkflowState = WorkflowState::new();

    let result: TransitionResult = apply(&state, Command::Back, test_now()).unwrap();

    assert_eq!(result.new_state, state);
    assert_eq!(result.outcome, TransitionOutcome::Stayed);
}

#[test]
fn test_back_keeps_draft() {
    let state: WorkflowState = state_at_review();

    let result: TransitionResult = apply(&state, Command::Back, test_now()).unwrap();

    assert_eq!(result.new_state.step(), WorkflowStep::TicketTypes);
    assert_eq!(result.new_state.draft(), state.draft());
    assert_eq!(
        result.outcome,
        TransitionOutcome::MovedBack {
            from: WorkflowStep::ReviewSubmit,
            to: WorkflowStep::TicketTypes,
        }
    );
}

#[test]
fn test_restart_from_every_step_clears_draft() {
    for state in [
        WorkflowState::new(),
        state_at_ticket_release(),
        state_at_ticket_types(),
        state_at_review(),
        state_submitting(),
    ] {
        let result: TransitionResult = apply(&state, Command::Restart, test_now()).unwrap();

        assert_eq!(result.new_state.step(), WorkflowStep::EventDetails);
        assert_eq!(result.new_state.draft(), &WorkflowDraft::new());
        assert!(!result.new_state.is_submission_pending());
        assert_eq!(result.outcome, TransitionOutcome::Restarted);
    }
}

#[test]
fn test_back_rejected_while_submission_pending() {
    let state: WorkflowState = state_submitting();

    let result: Result<TransitionResult, CoreError> = apply(&state, Command::Back, test_now());

    assert_eq!(result, Err(CoreError::SubmissionInFlight));
}

#[test]
fn test_step_index_round_trip() {
    for index in 1..=4 {
        let step: WorkflowStep = WorkflowStep::from_index(index).unwrap();
        assert_eq!(step.index(), index);
    }
    assert_eq!(WorkflowStep::from_index(0), None);
    assert_eq!(WorkflowStep::from_index(5), None);
}

#[test]
fn test_step_order() {
    assert_eq!(WorkflowStep::EventDetails.previous(), None);
    assert_eq!(WorkflowStep::ReviewSubmit.next(), None);
    assert_eq!(
        WorkflowStep::TicketRelease.next(),
        Some(WorkflowStep::TicketTypes)
    );
    assert!(WorkflowStep::EventDetails < WorkflowStep::ReviewSubmit);
    assert_eq!(
        WorkflowStep::ReviewSubmit.to_string(),
        "step 4 (Review & Submit)"
    );
}
