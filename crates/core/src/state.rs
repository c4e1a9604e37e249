// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::draft::WorkflowDraft;
use crate::payload::CompleteEventWorkflowRequest;
use crate::step::WorkflowStep;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Identifies one `Submit` so its transport outcome can be matched to it.
///
/// Ids increase for the lifetime of a [`WorkflowState`] and survive
/// `Restart`, so an outcome from before a restart never matches a later
/// submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubmissionId(pub(crate) u64);

impl SubmissionId {
    /// Returns the raw counter value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The complete state of one event creation workflow.
///
/// Only [`crate::apply`] produces new states; callers hold the value and
/// replace it with `TransitionResult::new_state` after each command.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorkflowState {
    pub(crate) step: WorkflowStep,
    pub(crate) draft: WorkflowDraft,
    pub(crate) pending_submission: Option<SubmissionId>,
    pub(crate) submissions_issued: u64,
}

impl WorkflowState {
    /// Creates a workflow on the first step with an empty draft.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            step: WorkflowStep::FIRST,
            draft: WorkflowDraft::new(),
            pending_submission: None,
            submissions_issued: 0,
        }
    }

    /// Returns an empty workflow on the first step that keeps issuing
    /// submission ids after the ones already handed out.
    pub(crate) const fn cleared(&self) -> Self {
        Self {
            step: WorkflowStep::FIRST,
            draft: WorkflowDraft::new(),
            pending_submission: None,
            submissions_issued: self.submissions_issued,
        }
    }

    /// Returns the current step.
    #[must_use]
    pub const fn step(&self) -> WorkflowStep {
        self.step
    }

    /// Returns the draft collected so far.
    #[must_use]
    pub const fn draft(&self) -> &WorkflowDraft {
        &self.draft
    }

    /// Returns whether a submission is waiting for the transport.
    #[must_use]
    pub const fn is_submission_pending(&self) -> bool {
        self.pending_submission.is_some()
    }

    /// Returns the id of the submission waiting for the transport, if any.
    #[must_use]
    pub const fn pending_submission(&self) -> Option<SubmissionId> {
        self.pending_submission
    }

    /// Exports the state for the host's session storage.
    ///
    /// The pending flag is not exported: a reloaded page cannot observe
    /// the outcome of a request made before the reload.
    #[must_use]
    pub fn snapshot(&self) -> WorkflowSnapshot {
        WorkflowSnapshot {
            step: self.step.index(),
            draft: self.draft.clone(),
        }
    }

    /// Restores a workflow from a session snapshot.
    ///
    /// A step index outside `1..=4` means the stored session is corrupted;
    /// the workflow restarts on the first step but keeps the draft. A step
    /// ahead of what the draft holds is pulled back to the first step whose
    /// input is missing.
    #[must_use]
    pub fn resume(snapshot: WorkflowSnapshot) -> Self {
        let stored: WorkflowStep = WorkflowStep::from_index(snapshot.step).unwrap_or_else(|| {
            warn!(
                step = snapshot.step,
                "Stored workflow step is out of range, resetting to first step"
            );
            WorkflowStep::FIRST
        });

        let reachable: WorkflowStep = snapshot.draft.furthest_step();
        let step: WorkflowStep = if stored.index() > reachable.index() {
            warn!(
                step = stored.index(),
                reachable = reachable.index(),
                "Stored workflow step is ahead of its draft, moving back"
            );
            reachable
        } else {
            stored
        };

        Self {
            step,
            draft: snapshot.draft,
            pending_submission: None,
            submissions_issued: 0,
        }
    }
}

/// Serializable form of a [`WorkflowState`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkflowSnapshot {
    /// The 1-based step index.
    pub step: u8,
    /// The draft collected so far.
    pub draft: WorkflowDraft,
}

/// What a successful transition did.
#[derive(Debug, Clone, PartialEq)]
pub enum TransitionOutcome {
    /// The step input was stored and the workflow moved forward.
    Advanced {
        /// The step that was completed.
        from: WorkflowStep,
        /// The step now shown.
        to: WorkflowStep,
    },
    /// The workflow moved to the previous step.
    MovedBack {
        /// The step that was left.
        from: WorkflowStep,
        /// The step now shown.
        to: WorkflowStep,
    },
    /// Nothing changed (`Back` on the first step).
    Stayed,
    /// The draft was discarded.
    Restarted,
    /// The request to hand to the transport.
    SubmissionReady {
        /// Pass this back in the outcome command.
        submission: SubmissionId,
        /// The assembled request.
        request: CompleteEventWorkflowRequest,
    },
    /// The transport accepted the submission and the draft was cleared.
    Submitted,
    /// The transport rejected the submission; the draft is kept.
    SubmissionFailed {
        /// Why the transport failed.
        reason: String,
    },
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: WorkflowState,
    /// What the transition did.
    pub outcome: TransitionOutcome,
}
