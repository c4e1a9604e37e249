// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    create_test_event_form, create_test_release_form, create_test_ticket_types, test_event_date,
    test_now,
};
use crate::{
    AssemblyError, CompleteEventWorkflowRequest, CompleteTicketReleaseWorkflowRequest,
    CoreError, WorkflowDraft, assemble_submission, prepare_ticket_release_addition,
};
use chrono::Duration;
use serde_json::{Value, json};

fn create_test_draft() -> WorkflowDraft {
    WorkflowDraft {
        event: Some(create_test_event_form()),
        ticket_release: Some(create_test_release_form()),
        ticket_types: create_test_ticket_types(),
    }
}

#[test]
fn test_assembly_maps_every_field() {
    let request: CompleteEventWorkflowRequest = assemble_submission(&create_test_draft()).unwrap();

    assert_eq!(request.event.date, test_event_date());
    assert_eq!(request.event.organization_id, 1);
    assert_eq!(request.ticket_release.open_window_duration, Some(30));
    assert!(!request.ticket_release.is_reserved);
    assert_eq!(request.ticket_release.promo_code, None);
    assert_eq!(request.ticket_types[0].quantity_total, 100);
}

#[test]
fn test_wire_format_uses_epoch_millis_and_omits_absent_fields() {
    let request: CompleteEventWorkflowRequest = assemble_submission(&create_test_draft()).unwrap();

    let value: Value = serde_json::to_value(&request).unwrap();

    let release = &value["ticket_release"];
    assert_eq!(
        release["open"],
        json!((test_now() + Duration::hours(1)).timestamp_millis())
    );
    assert_eq!(release["notification_method"], json!("email"));
    assert_eq!(release["cancellation_policy"], json!("full_refund"));
    assert!(release.get("promo_code").is_none());
    assert_eq!(value["event"]["date"], json!(test_event_date().timestamp_millis()));
    assert_eq!(value["ticket_types"][0]["price"], json!(250.0));
}

#[test]
fn test_reserved_release_carries_promo_code() {
    let mut draft: WorkflowDraft = create_test_draft();
    let release = draft.ticket_release.as_mut().unwrap();
    release.is_reserved = true;
    release.promo_code = Some(String::from("ABC12"));

    let request: CompleteEventWorkflowRequest = assemble_submission(&draft).unwrap();

    let value: Value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["ticket_release"]["is_reserved"], json!(true));
    assert_eq!(value["ticket_release"]["promo_code"], json!("ABC12"));
}

#[test]
fn test_wire_format_round_trips() {
    let request: CompleteEventWorkflowRequest = assemble_submission(&create_test_draft()).unwrap();

    let json: String = serde_json::to_string(&request).unwrap();
    let parsed: CompleteEventWorkflowRequest = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, request);
}

#[test]
fn test_missing_steps_are_structural_errors() {
    assert_eq!(
        assemble_submission(&WorkflowDraft::new()),
        Err(AssemblyError::MissingEventDetails)
    );

    let mut draft: WorkflowDraft = create_test_draft();
    draft.ticket_release = None;
    assert_eq!(
        assemble_submission(&draft),
        Err(AssemblyError::MissingTicketRelease)
    );

    let mut draft: WorkflowDraft = create_test_draft();
    draft.ticket_types.clear();
    assert_eq!(
        assemble_submission(&draft),
        Err(AssemblyError::MissingTicketTypes)
    );
}

#[test]
fn test_missing_field_is_named() {
    let mut draft: WorkflowDraft = create_test_draft();
    draft.ticket_release.as_mut().unwrap().close = None;

    let err: AssemblyError = assemble_submission(&draft).unwrap_err();

    assert_eq!(
        err,
        AssemblyError::MissingField {
            form: "ticket_release",
            field: "close",
        }
    );
    assert_eq!(err.to_string(), "Missing ticket_release.close");
}

// ============================================================================
// Adding a release to an existing event
// ============================================================================

#[test]
fn test_release_addition_builds_request() {
    let request: CompleteTicketReleaseWorkflowRequest = prepare_ticket_release_addition(
        42,
        test_event_date(),
        &create_test_release_form(),
        &create_test_ticket_types(),
        test_now(),
    )
    .unwrap();

    assert_eq!(request.event_id, 42);
    assert_eq!(request.ticket_release.name, "First release");
    assert_eq!(request.ticket_types.len(), 1);
}

#[test]
fn test_release_addition_reports_release_and_type_errors_together() {
    let mut release = create_test_release_form();
    release.close = Some(test_event_date() + Duration::days(1));

    let result = prepare_ticket_release_addition(42, test_event_date(), &release, &[], test_now());

    let Err(CoreError::ValidationFailed(errors)) = result else {
        panic!("expected validation failure");
    };
    let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, vec!["open", "ticket_types"]);
}
