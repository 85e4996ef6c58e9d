// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process spawning behind a minimal capability interface

mod local;

pub use local::LocalProcessRunner;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeProcess, FakeProcessRunner};

use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

/// Errors from process operations
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("spawn failed: {0}")]
    Spawn(String),
    #[error("wait failed: {0}")]
    Wait(String),
}

/// What to run and where.
///
/// `env` is an overlay merged over the ambient process environment;
/// arguments arrive already variable-substituted.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessSpec {
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: PathBuf,
    pub env: Vec<(String, String)>,
    pub timeout: Option<Duration>,
}

/// How a spawned process ended.
///
/// Termination by timeout and termination by cancellation are distinct
/// so the interpreter can report them differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessStatus {
    /// Process ran to completion with this exit code
    Exited(i32),
    /// Terminated after exceeding its configured timeout
    TimedOut,
    /// Terminated because the job was cancelled
    Cancelled,
}

/// Adapter that spawns a process, streams its output, and supports
/// forced termination from another thread of control.
#[async_trait]
pub trait ProcessRunner: Clone + Send + Sync + 'static {
    /// Run the process to completion, honoring the spec's timeout and
    /// the cancellation token. Must not leave an orphaned process
    /// behind when it returns `TimedOut` or `Cancelled`.
    async fn run(
        &self,
        spec: ProcessSpec,
        cancel: CancellationToken,
    ) -> Result<ProcessStatus, ProcessError>;
}
