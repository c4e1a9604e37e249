// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// The ordered steps of the event creation workflow.
///
/// Steps are numbered from 1 so the index matches what the user sees.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStep {
    /// Name, description, date, location and team.
    #[default]
    EventDetails,
    /// The first ticket release of the event.
    TicketRelease,
    /// The ticket types sold in that release.
    TicketTypes,
    /// Final review before the composite request is sent.
    ReviewSubmit,
}

impl WorkflowStep {
    /// The first step of the workflow.
    pub const FIRST: Self = Self::EventDetails;

    /// Returns the 1-based step index.
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::EventDetails => 1,
            Self::TicketRelease => 2,
            Self::TicketTypes => 3,
            Self::ReviewSubmit => 4,
        }
    }

    /// Looks up a step by its 1-based index.
    ///
    /// # Returns
    ///
    /// * `Some(step)` for indices 1 through 4
    /// * `None` for anything else
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(Self::EventDetails),
            2 => Some(Self::TicketRelease),
            3 => Some(Self::TicketTypes),
            4 => Some(Self::ReviewSubmit),
            _ => None,
        }
    }

    /// Returns the step after this one, or `None` on the last step.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::EventDetails => Some(Self::TicketRelease),
            Self::TicketRelease => Some(Self::TicketTypes),
            Self::TicketTypes => Some(Self::ReviewSubmit),
            Self::ReviewSubmit => None,
        }
    }

    /// Returns the step before this one, or `None` on the first step.
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::EventDetails => None,
            Self::TicketRelease => Some(Self::EventDetails),
            Self::TicketTypes => Some(Self::TicketRelease),
            Self::ReviewSubmit => Some(Self::TicketTypes),
        }
    }

    /// Returns a short human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::EventDetails => "Event Details",
            Self::TicketRelease => "Ticket Release",
            Self::TicketTypes => "Ticket Types",
            Self::ReviewSubmit => "Review & Submit",
        }
    }
}

impl std::fmt::Display for WorkflowStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "step {} ({})", self.index(), self.label())
    }
}
