// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::future::Future;
use tessera::CompleteEventWorkflowRequest;
use thiserror::Error;

/// Transport failures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The remote side answered and refused the request.
    #[error("Submission rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },

    /// The remote side could not be reached.
    #[error("Submission service unavailable: {0}")]
    Unavailable(String),
}

impl TransportError {
    /// Returns whether sending the same request again may succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Rejected { status, .. } => *status >= 500,
            Self::Unavailable(_) => true,
        }
    }
}

/// Delivers a completed workflow to the backend.
///
/// Implementations own retries, timeouts and authentication; the controller
/// only sees the final outcome.
pub trait SubmissionTransport: Send + Sync {
    /// Sends the composite creation request.
    ///
    /// # Errors
    ///
    /// Returns a `TransportError` if the request was not accepted.
    fn submit(
        &self,
        request: &CompleteEventWorkflowRequest,
    ) -> impl Future<Output = Result<(), TransportError>> + Send;
}
