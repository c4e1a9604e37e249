// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::access::ReleaseAccessPolicy;
use crate::error::DomainError;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How ticket holders are notified about allocation results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationMethod {
    /// Notify by email.
    Email,
    /// Notify by text message.
    Sms,
}

impl NotificationMethod {
    /// Returns the wire name of this method.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Sms => "sms",
        }
    }
}

impl FromStr for NotificationMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "email" => Ok(Self::Email),
            "sms" => Ok(Self::Sms),
            _ => Err(DomainError::InvalidNotificationMethod(s.to_string())),
        }
    }
}

impl std::fmt::Display for NotificationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What happens to a ticket's payment if the holder cancels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CancellationPolicy {
    /// The full price is refunded.
    FullRefund,
    /// Nothing is refunded.
    NoRefund,
}

impl CancellationPolicy {
    /// Returns the wire name of this policy.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FullRefund => "full_refund",
            Self::NoRefund => "no_refund",
        }
    }
}

impl FromStr for CancellationPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "full_refund" => Ok(Self::FullRefund),
            "no_refund" => Ok(Self::NoRefund),
            _ => Err(DomainError::InvalidCancellationPolicy(s.to_string())),
        }
    }
}

impl std::fmt::Display for CancellationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A submitted event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// The canonical numeric identifier.
    pub id: i64,
    /// When the event was created.
    pub created_at: DateTime<Utc>,
    /// The event name.
    pub name: String,
    /// The event description.
    pub description: String,
    /// When the event takes place.
    pub date: DateTime<Utc>,
    /// Free-text location label.
    pub location: String,
    /// The owning organization.
    pub organization_id: i64,
    /// Whether the event is hidden from public listings.
    pub is_private: bool,
    /// The user who created the event, if known.
    pub created_by_id: Option<String>,
}

/// Where a ticket release is in its lifetime at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReleasePhase {
    /// Before `open`.
    Upcoming,
    /// Inside `[open, open + open_window_duration)`.
    ///
    /// Requests filed here are treated alike (e.g. entered into a lottery).
    OpenWindow,
    /// After the open window and before `close`.
    Open,
    /// At or after `close`.
    Closed,
}

impl ReleasePhase {
    /// Returns whether ticket requests may be filed in this phase.
    #[must_use]
    pub const fn accepts_requests(&self) -> bool {
        matches!(self, Self::OpenWindow | Self::Open)
    }
}

/// A submitted ticket release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketRelease {
    /// The canonical numeric identifier.
    pub id: i64,
    /// The owning event.
    pub event_id: i64,
    /// The release name.
    pub name: String,
    /// The release description.
    pub description: String,
    /// When ticket requests start being accepted.
    pub open: DateTime<Utc>,
    /// When ticket requests stop being accepted.
    pub close: DateTime<Utc>,
    /// Length of the open window in minutes.
    pub open_window_duration: Option<u32>,
    /// Upper bound on tickets a single user may request.
    pub max_tickets_per_user: u32,
    /// How holders are notified.
    pub notification_method: NotificationMethod,
    /// Refund behaviour on cancellation.
    pub cancellation_policy: CancellationPolicy,
    /// The release method (lottery, first come first served, ...).
    pub ticket_release_method_id: u32,
    /// Who may file requests.
    pub access: ReleaseAccessPolicy,
    /// Whether the allocation process has already run.
    pub has_allocated_tickets: bool,
}

impl TicketRelease {
    /// Returns the end of the open window, if the release has one.
    #[must_use]
    pub fn open_window_end(&self) -> Option<DateTime<Utc>> {
        self.open_window_duration
            .and_then(|minutes| self.open.checked_add_signed(Duration::minutes(i64::from(minutes))))
    }

    /// Classifies the release at the given instant.
    #[must_use]
    pub fn phase_at(&self, now: DateTime<Utc>) -> ReleasePhase {
        if now < self.open {
            return ReleasePhase::Upcoming;
        }
        if now >= self.close {
            return ReleasePhase::Closed;
        }
        match self.open_window_end() {
            Some(window_end) if now < window_end => ReleasePhase::OpenWindow,
            _ => ReleasePhase::Open,
        }
    }

    /// Returns whether this release requires a promo code.
    #[must_use]
    pub const fn is_reserved(&self) -> bool {
        self.access.is_reserved()
    }
}

/// A kind of ticket offered in a release.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketType {
    /// The canonical numeric identifier.
    pub id: i64,
    /// The owning ticket release.
    pub ticket_release_id: i64,
    /// The ticket type name.
    pub name: String,
    /// The ticket type description.
    pub description: String,
    /// Price per ticket.
    pub price: f64,
    /// Total number of tickets of this type.
    pub quantity_total: u32,
    /// Whether the type is only reachable through a reserved release.
    pub is_reserved: bool,
}

/// A user's request for tickets of one type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketRequest {
    /// The canonical numeric identifier.
    pub id: i64,
    /// When the request was filed.
    pub created_at: DateTime<Utc>,
    /// Number of tickets requested.
    pub ticket_amount: u32,
    /// Whether the allocation process has processed this request.
    pub is_handled: bool,
    /// The requested ticket type.
    pub ticket_type_id: i64,
    /// The release the ticket type belongs to.
    pub ticket_release_id: i64,
}

impl TicketRequest {
    /// Returns whether the request still waits for allocation.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        !self.is_handled
    }
}

/// Whether an allocated ticket is a confirmed seat or a backup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketAllocation {
    /// A confirmed seat.
    Confirmed,
    /// A waitlist position.
    Reserve,
}

/// A ticket allocated from a ticket request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// The canonical numeric identifier.
    pub id: i64,
    /// When the ticket was allocated.
    pub created_at: DateTime<Utc>,
    /// Whether the ticket has been paid.
    pub is_paid: bool,
    /// Whether the ticket is a waitlist allocation.
    pub is_reserve: bool,
    /// Whether the payment has been refunded.
    pub refunded: bool,
    /// The owning user.
    pub user_id: i64,
    /// The request this ticket was allocated from.
    pub ticket_request_id: i64,
}

impl Ticket {
    /// Returns the allocation status of this ticket.
    #[must_use]
    pub const fn allocation(&self) -> TicketAllocation {
        if self.is_reserve {
            TicketAllocation::Reserve
        } else {
            TicketAllocation::Confirmed
        }
    }

    /// Returns whether a cancellation under `policy` would trigger a refund.
    #[must_use]
    pub const fn is_refundable(&self, policy: CancellationPolicy) -> bool {
        self.is_paid && !self.refunded && matches!(policy, CancellationPolicy::FullRefund)
    }
}
