// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Status reporting to the coordinator

mod http;

pub use http::HttpStatusReporter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeStatusReporter;

use async_trait::async_trait;
use rig_core::{AgentIdentifier, BuildId, JobResult, StatusTransition};
use thiserror::Error;

/// Errors from the reporting channel
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("report failed: {0}")]
    Send(String),
    #[error("coordinator rejected report: {0}")]
    Rejected(String),
}

/// Best-effort side channel carrying job state to the coordinator.
///
/// Retry and idempotency are this channel's concern, not the
/// interpreter's; the interpreter only logs failures and carries on.
#[async_trait]
pub trait StatusReporter: Clone + Send + Sync + 'static {
    /// Report one node's state transition
    async fn report_transition(&self, transition: &StatusTransition) -> Result<(), ReportError>;

    /// Report the final result for the whole job
    async fn report_completed(
        &self,
        build_id: &BuildId,
        agent: &AgentIdentifier,
        result: JobResult,
    ) -> Result<(), ReportError>;
}
