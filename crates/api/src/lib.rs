// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod config;
mod controller;
mod error;
mod request_response;
mod transport;

#[cfg(test)]
mod tests;

pub use config::{ConfigError, TIME_ZONE_ENV, WorkflowConfig};
pub use controller::WorkflowController;
pub use error::{ApiError, translate_core_error, translate_domain_error, translate_transport_error};
pub use request_response::{
    EventDetailsInput, TicketReleaseInput, TicketTypeInput, WorkflowStatusResponse,
};
pub use transport::{SubmissionTransport, TransportError};
