// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    EventDetailsInput, SubmissionTransport, TicketReleaseInput, TicketTypeInput, TransportError,
    WorkflowConfig, WorkflowController,
};
use chrono::{DateTime, TimeZone, Utc};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tessera::{CompleteEventWorkflowRequest, FixedClock};
use tokio::sync::Notify;

pub type TestController = WorkflowController<FakeTransport, FixedClock>;

pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap()
}

pub fn test_config() -> WorkflowConfig {
    WorkflowConfig::new("Europe/Stockholm").unwrap()
}

/// 2026-11-17 12:00 UTC, thirty days after `test_now()`.
pub fn create_test_event_input() -> EventDetailsInput {
    EventDetailsInput {
        name: String::from("Autumn Ball"),
        description: String::from("The yearly autumn ball"),
        date: String::from("2026-11-17T13:00"),
        location: String::from("Nymble, Stockholm"),
        organization_id: Some(1),
        is_private: false,
    }
}

/// Opens one hour after `test_now()` and closes a day after it.
pub fn create_test_release_input() -> TicketReleaseInput {
    TicketReleaseInput {
        name: String::from("First release"),
        description: String::from("Lottery for the first batch"),
        open: String::from("2026-10-18T15:00"),
        close: String::from("2026-10-19T14:00"),
        ticket_release_method_id: Some(1),
        open_window_duration: Some(30),
        max_tickets_per_user: Some(2),
        notification_method: String::from("email"),
        cancellation_policy: String::from("full_refund"),
        is_reserved: false,
        promo_code: String::new(),
    }
}

pub fn create_test_ticket_type_inputs() -> Vec<TicketTypeInput> {
    vec![TicketTypeInput {
        name: String::from("Standard"),
        description: String::from("Entry and dinner"),
        price: 250.0,
        quantity_total: 100,
    }]
}

/// Lets a test hold a submission inside the transport.
#[derive(Default)]
pub struct Gate {
    entered: Notify,
    release: Notify,
}

impl Gate {
    pub async fn wait_until_entered(&self) {
        self.entered.notified().await;
    }

    pub fn release(&self) {
        self.release.notify_one();
    }
}

/// In-memory transport recording every request it receives.
///
/// Gated transports hold the n-th request at the n-th gate; requests beyond
/// the last gate go straight through.
#[derive(Clone, Default)]
pub struct FakeTransport {
    received: Arc<Mutex<Vec<CompleteEventWorkflowRequest>>>,
    failure: Option<TransportError>,
    gates: Arc<Mutex<VecDeque<Arc<Gate>>>>,
}

impl FakeTransport {
    pub fn failing(err: TransportError) -> Self {
        Self {
            failure: Some(err),
            ..Self::default()
        }
    }

    pub fn gated() -> (Self, Arc<Gate>) {
        let (transport, mut gates) = Self::gated_sequence(1);
        (transport, gates.remove(0))
    }

    pub fn gated_sequence(count: usize) -> (Self, Vec<Arc<Gate>>) {
        let gates: Vec<Arc<Gate>> = (0..count).map(|_| Arc::new(Gate::default())).collect();
        let transport: Self = Self {
            gates: Arc::new(Mutex::new(gates.iter().cloned().collect())),
            ..Self::default()
        };
        (transport, gates)
    }

    pub fn received(&self) -> Vec<CompleteEventWorkflowRequest> {
        self.received.lock().unwrap().clone()
    }
}

impl SubmissionTransport for FakeTransport {
    async fn submit(&self, request: &CompleteEventWorkflowRequest) -> Result<(), TransportError> {
        let gate: Option<Arc<Gate>> = self.gates.lock().unwrap().pop_front();
        if let Some(gate) = gate {
            gate.entered.notify_one();
            gate.release.notified().await;
        }
        self.received.lock().unwrap().push(request.clone());
        self.failure.clone().map_or(Ok(()), Err)
    }
}

pub fn create_test_controller(transport: FakeTransport) -> TestController {
    WorkflowController::new(transport, FixedClock::new(test_now()), test_config())
}

pub async fn create_controller_at_review(transport: FakeTransport) -> TestController {
    let controller: TestController = create_test_controller(transport);
    complete_steps(&controller).await;
    controller
}

/// Walks `controller` from the first step to review.
pub async fn complete_steps(controller: &TestController) {
    controller
        .submit_event_details(create_test_event_input())
        .await
        .unwrap();
    controller
        .submit_ticket_release(create_test_release_input())
        .await
        .unwrap();
    controller
        .submit_ticket_types(create_test_ticket_type_inputs())
        .await
        .unwrap();
}
