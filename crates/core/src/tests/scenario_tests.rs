// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! End-to-end walks through the workflow.

use crate::tests::helpers::{
    create_test_event_form, create_test_release_form, create_test_ticket_types,
    state_at_ticket_release, step, test_now,
};
use crate::{
    Command, CoreError, StepInput, TransitionOutcome, TransitionResult, WorkflowState,
    WorkflowStep, apply,
};
use tessera_domain::{OPEN_WINDOW_MESSAGE, TicketReleaseForm};

#[test]
fn test_plain_release_reaches_review_and_assembles_without_promo_code() {
    let mut state: WorkflowState = state_at_ticket_release();
    state = step(
        &state,
        Command::Advance(StepInput::TicketRelease(create_test_release_form())),
    );
    state = step(
        &state,
        Command::Advance(StepInput::TicketTypes(create_test_ticket_types())),
    );
    assert_eq!(state.step(), WorkflowStep::ReviewSubmit);

    let result: TransitionResult = apply(&state, Command::Submit, test_now()).unwrap();

    let TransitionOutcome::SubmissionReady { request, .. } = result.outcome else {
        panic!("expected a submission request");
    };
    assert_eq!(request.ticket_release.promo_code, None);
    assert!(!request.ticket_release.is_reserved);
}

#[test]
fn test_day_long_window_blocks_release_step() {
    let state: WorkflowState = state_at_ticket_release();
    let form: TicketReleaseForm = TicketReleaseForm {
        open_window_duration: Some(1440),
        ..create_test_release_form()
    };

    let result: Result<TransitionResult, CoreError> = apply(
        &state,
        Command::Advance(StepInput::TicketRelease(form)),
        test_now(),
    );

    let Err(CoreError::ValidationFailed(errors)) = result else {
        panic!("expected validation failure");
    };
    assert_eq!(
        errors.messages_for("open_window_duration"),
        vec![OPEN_WINDOW_MESSAGE]
    );
    assert_eq!(state.step(), WorkflowStep::TicketRelease);
}

#[test]
fn test_lowercase_promo_code_fixed_then_accepted() {
    let state: WorkflowState = state_at_ticket_release();
    let mut form: TicketReleaseForm = TicketReleaseForm {
        is_reserved: true,
        promo_code: Some(String::from("abc12")),
        ..create_test_release_form()
    };

    let result: Result<TransitionResult, CoreError> = apply(
        &state,
        Command::Advance(StepInput::TicketRelease(form.clone())),
        test_now(),
    );
    let Err(CoreError::ValidationFailed(errors)) = result else {
        panic!("expected validation failure");
    };
    assert!(errors.has_field("promo_code"));

    form.promo_code = Some(String::from("ABC12"));
    let state: WorkflowState = step(&state, Command::Advance(StepInput::TicketRelease(form)));
    assert_eq!(state.step(), WorkflowStep::TicketTypes);
}

#[test]
fn test_walking_back_to_edit_event_keeps_later_steps() {
    let mut state: WorkflowState = state_at_ticket_release();
    state = step(
        &state,
        Command::Advance(StepInput::TicketRelease(create_test_release_form())),
    );
    state = step(
        &state,
        Command::Advance(StepInput::TicketTypes(create_test_ticket_types())),
    );

    state = step(&state, Command::Back);
    state = step(&state, Command::Back);
    state = step(&state, Command::Back);
    assert_eq!(state.step(), WorkflowStep::EventDetails);

    let mut event = create_test_event_form();
    event.name = String::from("Winter Ball");
    state = step(&state, Command::Advance(StepInput::EventDetails(event)));
    state = step(&state, Command::Advance(StepInput::Retained));
    state = step(&state, Command::Advance(StepInput::Retained));

    assert_eq!(state.step(), WorkflowStep::ReviewSubmit);
    assert_eq!(state.draft().event.as_ref().unwrap().name, "Winter Ball");
    assert_eq!(
        state.draft().ticket_release,
        Some(create_test_release_form())
    );
    assert_eq!(state.draft().ticket_types, create_test_ticket_types());
}
