//! Router administration layer.
//!
//! This module provides types and traits for:
//! - Logical administration actions ([`Action`])
//! - Abstracting the HTTP transport ([`RouterClient`], [`Credentials`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//! - Request sequencing and outcome classification ([`ActionOrchestrator`],
//!   [`RequestOutcome`])
//! - Transport error types ([`TransportError`])

mod action;
mod client;
mod error;
mod http;
mod orchestrator;

#[cfg(test)]
mod action_tests;

pub use action::Action;
pub use client::ReqwestClient;
pub use error::TransportError;
pub use http::{Credentials, RouterClient};
pub use orchestrator::{ActionOrchestrator, RequestOutcome};
