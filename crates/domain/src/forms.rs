// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Editable form values for the event creation workflow.
//!
//! Forms mirror what a user can type: every field may be missing or malformed.
//! Validation turns them into submission data; until then nothing here is trusted.

use crate::access::{PromoCode, ReleaseAccessPolicy};
use crate::error::DomainError;
use crate::types::{CancellationPolicy, NotificationMethod};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Event details entered in the first workflow step.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EventForm {
    /// The event name.
    pub name: String,
    /// The event description.
    pub description: String,
    /// When the event takes place.
    pub date: Option<DateTime<Utc>>,
    /// Location label picked by the user.
    pub location: Option<String>,
    /// The organizing team.
    pub organization_id: Option<i64>,
    /// Whether the event is hidden from public listings.
    pub is_private: bool,
}

/// Ticket release details entered in the second workflow step.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TicketReleaseForm {
    /// The release name.
    pub name: String,
    /// The release description.
    pub description: String,
    /// When ticket requests start being accepted.
    pub open: Option<DateTime<Utc>>,
    /// When ticket requests stop being accepted.
    pub close: Option<DateTime<Utc>>,
    /// The release method (lottery, first come first served, ...).
    pub ticket_release_method_id: Option<u32>,
    /// Length of the open window in minutes.
    pub open_window_duration: Option<u32>,
    /// Upper bound on tickets a single user may request.
    pub max_tickets_per_user: Option<u32>,
    /// How holders are notified.
    pub notification_method: Option<NotificationMethod>,
    /// Refund behaviour on cancellation.
    pub cancellation_policy: Option<CancellationPolicy>,
    /// Whether the release is hidden behind a promo code.
    pub is_reserved: bool,
    /// The promo code, only meaningful when `is_reserved` is set.
    pub promo_code: Option<String>,
}

impl TicketReleaseForm {
    /// Derives the access policy from the reservation flag and promo code.
    ///
    /// A promo code typed into a non-reserved release is ignored.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPromoCode` if the release is reserved and the
    /// promo code is missing or malformed.
    pub fn access_policy(&self) -> Result<ReleaseAccessPolicy, DomainError> {
        if !self.is_reserved {
            return Ok(ReleaseAccessPolicy::Open);
        }
        let promo_code: PromoCode = PromoCode::new(self.promo_code.as_deref().unwrap_or_default())?;
        Ok(ReleaseAccessPolicy::Reserved { promo_code })
    }
}

/// One ticket type entered in the third workflow step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketTypeForm {
    /// The ticket type name.
    pub name: String,
    /// The ticket type description.
    pub description: String,
    /// Price per ticket.
    pub price: f64,
    /// Total number of tickets of this type.
    pub quantity_total: u32,
}

impl Default for TicketTypeForm {
    fn default() -> Self {
        Self {
            name: String::from("Default"),
            description: String::new(),
            price: 0.0,
            quantity_total: 0,
        }
    }
}
