// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::draft::WorkflowDraft;
use crate::error::{AssemblyError, CoreError};
use crate::payload::{
    CompleteEventWorkflowRequest, CompleteTicketReleaseWorkflowRequest, EventPayload,
    TicketReleasePayload, TicketTypePayload,
};
use chrono::{DateTime, Utc};
use tessera_domain::{
    EventForm, ReleaseAccessPolicy, TicketReleaseForm, TicketTypeForm, ValidationErrors,
    validate_ticket_release, validate_ticket_types,
};
use tracing::{debug, error};

/// Builds the composite creation request from a completed draft.
///
/// Assembly does not validate: every slot was validated when its step
/// advanced. It only fails when a slot is empty, which means the draft was
/// not produced by the workflow.
///
/// # Arguments
///
/// * `draft` - The draft collected by the workflow
///
/// # Errors
///
/// Returns an `AssemblyError` if a step's output or one of its required
/// fields is missing.
pub fn assemble_submission(
    draft: &WorkflowDraft,
) -> Result<CompleteEventWorkflowRequest, AssemblyError> {
    let result = assemble_parts(draft);
    if let Err(err) = &result {
        error!(error = %err, "Failed to assemble submission from draft");
    }
    result
}

fn assemble_parts(draft: &WorkflowDraft) -> Result<CompleteEventWorkflowRequest, AssemblyError> {
    let event: &EventForm = draft
        .event
        .as_ref()
        .ok_or(AssemblyError::MissingEventDetails)?;
    let release: &TicketReleaseForm = draft
        .ticket_release
        .as_ref()
        .ok_or(AssemblyError::MissingTicketRelease)?;
    if draft.ticket_types.is_empty() {
        return Err(AssemblyError::MissingTicketTypes);
    }

    let request: CompleteEventWorkflowRequest = CompleteEventWorkflowRequest {
        event: event_payload(event)?,
        ticket_release: release_payload(release)?,
        ticket_types: draft.ticket_types.iter().map(ticket_type_payload).collect(),
    };

    debug!(
        event = %request.event.name,
        ticket_types = request.ticket_types.len(),
        is_reserved = request.ticket_release.is_reserved,
        "Assembled event submission"
    );

    Ok(request)
}

/// Validates a release and its ticket types for an existing event and
/// builds the request that adds them.
///
/// # Arguments
///
/// * `event_id` - The existing event
/// * `event_date` - The date of that event
/// * `release` - The release form as entered
/// * `ticket_types` - The ticket types sold in the release
/// * `now` - The evaluation instant
///
/// # Errors
///
/// Returns `CoreError::ValidationFailed` with the release errors followed
/// by the ticket type errors if either is invalid.
pub fn prepare_ticket_release_addition(
    event_id: i64,
    event_date: DateTime<Utc>,
    release: &TicketReleaseForm,
    ticket_types: &[TicketTypeForm],
    now: DateTime<Utc>,
) -> Result<CompleteTicketReleaseWorkflowRequest, CoreError> {
    let mut errors: ValidationErrors = ValidationErrors::new();
    if let Err(release_errors) = validate_ticket_release(release, Some(event_date), now) {
        errors.extend(release_errors);
    }
    if let Err(type_errors) = validate_ticket_types(ticket_types) {
        errors.extend(type_errors);
    }
    errors.into_result()?;

    Ok(CompleteTicketReleaseWorkflowRequest {
        event_id,
        ticket_release: release_payload(release)?,
        ticket_types: ticket_types.iter().map(ticket_type_payload).collect(),
    })
}

fn event_payload(form: &EventForm) -> Result<EventPayload, AssemblyError> {
    let missing = |field: &'static str| AssemblyError::MissingField {
        form: "event",
        field,
    };

    Ok(EventPayload {
        name: form.name.clone(),
        description: form.description.clone(),
        date: form.date.ok_or_else(|| missing("date"))?,
        location: form.location.clone().ok_or_else(|| missing("location"))?,
        organization_id: form
            .organization_id
            .ok_or_else(|| missing("organization_id"))?,
        is_private: form.is_private,
    })
}

fn release_payload(form: &TicketReleaseForm) -> Result<TicketReleasePayload, AssemblyError> {
    let missing = |field: &'static str| AssemblyError::MissingField {
        form: "ticket_release",
        field,
    };

    let access: ReleaseAccessPolicy = form
        .access_policy()
        .map_err(AssemblyError::InvalidAccessPolicy)?;
    let (is_reserved, promo_code) = TicketReleasePayload::access_fields(&access);

    Ok(TicketReleasePayload {
        name: form.name.clone(),
        description: form.description.clone(),
        open: form.open.ok_or_else(|| missing("open"))?,
        close: form.close.ok_or_else(|| missing("close"))?,
        open_window_duration: form.open_window_duration,
        max_tickets_per_user: form
            .max_tickets_per_user
            .ok_or_else(|| missing("max_tickets_per_user"))?,
        notification_method: form
            .notification_method
            .ok_or_else(|| missing("notification_method"))?,
        cancellation_policy: form
            .cancellation_policy
            .ok_or_else(|| missing("cancellation_policy"))?,
        ticket_release_method_id: form
            .ticket_release_method_id
            .ok_or_else(|| missing("ticket_release_method_id"))?,
        is_reserved,
        promo_code,
    })
}

fn ticket_type_payload(form: &TicketTypeForm) -> TicketTypePayload {
    TicketTypePayload {
        name: form.name.clone(),
        description: form.description.clone(),
        price: form.price,
        quantity_total: form.quantity_total,
    }
}
