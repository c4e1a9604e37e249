// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CancellationPolicy, EventForm, NotificationMethod, TicketReleaseForm, TicketTypeForm};
use chrono::{DateTime, Duration, TimeZone, Utc};

/// The evaluation instant used across domain tests.
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

/// A release that passes every rule when validated at `test_now()`.
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

pub fn create_test_ticket_type(name: &str, price: f64, quantity_total: u32) -> TicketTypeForm {
    TicketTypeForm {
        name: String::from(name),
        description: String::from("Standard entry"),
        price,
        quantity_total,
    }
}
