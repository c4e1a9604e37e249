// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, StepInput, SubmissionId, TransitionResult, WorkflowState, apply};
use chrono::{DateTime, Duration, TimeZone, Utc};
use tessera_domain::{
    CancellationPolicy, EventForm, NotificationMethod, TicketReleaseForm, TicketTypeForm,
};

pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap()
}

pub fn test_event_date() -> DateTime<Utc> {
    test_now() + Duration::days(30)
}

pub fn create_test_event_form() -> EventForm {
    EventForm {
        name: String::from("Autumn Ball"),
        description: String::from("The yearly autumn ball"),
        date: Some(test_event_date()),
        location: Some(String::from("Nymble, Stockholm")),
        organization_id: Some(1),
        is_private: false,
    }
}

pub fn create_test_release_form() -> TicketReleaseForm {
    TicketReleaseForm {
        name: String::from("First release"),
        description: String::from("Lottery for the first batch"),
        open: Some(test_now() + Duration::hours(1)),
        close: Some(test_now() + Duration::hours(24)),
        ticket_release_method_id: Some(1),
        open_window_duration: Some(30),
        max_tickets_per_user: Some(2),
        notification_method: Some(NotificationMethod::Email),
        cancellation_policy: Some(CancellationPolicy::FullRefund),
        is_reserved: false,
        promo_code: None,
    }
}

pub fn create_test_ticket_types() -> Vec<TicketTypeForm> {
    vec![TicketTypeForm {
        name: String::from("Standard"),
        description: String::from("Entry and dinner"),
        price: 250.0,
        quantity_total: 100,
    }]
}

/// Applies a command that the test expects to succeed.
pub fn step(state: &WorkflowState, command: Command) -> WorkflowState {
    let result: TransitionResult = apply(state, command, test_now()).unwrap();
    result.new_state
}

pub fn state_at_ticket_release() -> WorkflowState {
    step(
        &WorkflowState::new(),
        Command::Advance(StepInput::EventDetails(create_test_event_form())),
    )
}

pub fn state_at_ticket_types() -> WorkflowState {
    step(
        &state_at_ticket_release(),
        Command::Advance(StepInput::TicketRelease(create_test_release_form())),
    )
}

pub fn state_at_review() -> WorkflowState {
    step(
        &state_at_ticket_types(),
        Command::Advance(StepInput::TicketTypes(create_test_ticket_types())),
    )
}

pub fn state_submitting() -> WorkflowState {
    step(&state_at_review(), Command::Submit)
}

/// Returns the id of the submission `state` is waiting on.
pub fn pending_id(state: &WorkflowState) -> SubmissionId {
    state.pending_submission().unwrap()
}

/// Walks a fresh draft from the first step to review.
pub fn complete_steps(state: &WorkflowState) -> WorkflowState {
    let mut state: WorkflowState = step(
        state,
        Command::Advance(StepInput::EventDetails(create_test_event_form())),
    );
    state = step(
        &state,
        Command::Advance(StepInput::TicketRelease(create_test_release_form())),
    );
    step(
        &state,
        Command::Advance(StepInput::TicketTypes(create_test_ticket_types())),
    )
}
