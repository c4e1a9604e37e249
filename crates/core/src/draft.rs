// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::step::WorkflowStep;
use serde::{Deserialize, Serialize};
use tessera_domain::{EventForm, TicketReleaseForm, TicketTypeForm};

/// The accumulated output of the workflow steps.
///
/// Each slot is filled only after its step validated successfully. Slots
/// for later steps survive back-navigation so the user does not have to
/// re-enter them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkflowDraft {
    /// Output of the event details step.
    #[serde(default)]
    pub event: Option<EventForm>,
    /// Output of the ticket release step.
    #[serde(default)]
    pub ticket_release: Option<TicketReleaseForm>,
    /// Output of the ticket types step, in entry order.
    #[serde(default)]
    pub ticket_types: Vec<TicketTypeForm>,
}

impl WorkflowDraft {
    /// Creates an empty draft.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            event: None,
            ticket_release: None,
            ticket_types: Vec::new(),
        }
    }

    /// Returns whether no step has stored anything yet.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.event.is_none() && self.ticket_release.is_none() && self.ticket_types.is_empty()
    }

    /// Returns the furthest step the draft supports: the first step whose
    /// slot is still empty, or the review step once every slot is filled.
    #[must_use]
    pub const fn furthest_step(&self) -> WorkflowStep {
        if self.event.is_none() {
            WorkflowStep::EventDetails
        } else if self.ticket_release.is_none() {
            WorkflowStep::TicketRelease
        } else if self.ticket_types.is_empty() {
            WorkflowStep::TicketTypes
        } else {
            WorkflowStep::ReviewSubmit
        }
    }
}
