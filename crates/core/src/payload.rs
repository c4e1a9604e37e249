// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Wire shape of the requests handed to the submission transport.
//!
//! Timestamps travel as epoch milliseconds. Optional fields are left out
//! of the JSON entirely rather than sent as `null`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tessera_domain::{CancellationPolicy, NotificationMethod, ReleaseAccessPolicy};

/// Composite request creating an event with its first release and ticket types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompleteEventWorkflowRequest {
    /// The event to create.
    pub event: EventPayload,
    /// Its first ticket release.
    pub ticket_release: TicketReleasePayload,
    /// The ticket types sold in that release.
    pub ticket_types: Vec<TicketTypePayload>,
}

/// Request adding a release with its ticket types to an existing event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompleteTicketReleaseWorkflowRequest {
    /// The existing event.
    pub event_id: i64,
    /// The release to add.
    pub ticket_release: TicketReleasePayload,
    /// The ticket types sold in that release.
    pub ticket_types: Vec<TicketTypePayload>,
}

/// The event part of a workflow request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventPayload {
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// When the event takes place.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub date: DateTime<Utc>,
    /// Venue.
    pub location: String,
    /// The organizing team.
    pub organization_id: i64,
    /// Whether the event is hidden from public listings.
    pub is_private: bool,
}

/// The ticket release part of a workflow request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketReleasePayload {
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// When requests start being accepted.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub open: DateTime<Utc>,
    /// When requests stop being accepted.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub close: DateTime<Utc>,
    /// Minutes after `open` during which requests count as simultaneous.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_window_duration: Option<u32>,
    /// Upper bound on tickets one user may request.
    pub max_tickets_per_user: u32,
    /// How requesters hear about allocation.
    pub notification_method: NotificationMethod,
    /// Whether cancelled tickets are refunded.
    pub cancellation_policy: CancellationPolicy,
    /// The allocation method.
    pub ticket_release_method_id: u32,
    /// Whether the release needs a promo code.
    pub is_reserved: bool,
    /// The code unlocking a reserved release.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promo_code: Option<String>,
}

impl TicketReleasePayload {
    /// Flattens an access policy into the `is_reserved` / `promo_code` wire pair.
    pub(crate) fn access_fields(access: &ReleaseAccessPolicy) -> (bool, Option<String>) {
        (
            access.is_reserved(),
            access.promo_code().map(|code| code.value().to_string()),
        )
    }
}

/// One ticket type of a workflow request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketTypePayload {
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Price per ticket.
    pub price: f64,
    /// Tickets available of this type.
    pub quantity_total: u32,
}
