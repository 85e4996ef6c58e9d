// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the build session

use thiserror::Error;

/// Errors that refuse a build outright, before any node runs.
///
/// Execution-level failures (non-zero exits, timeouts, cancellation)
/// are not errors; they fold into the returned `JobResult`.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("invalid command tree: {0}")]
    InvalidTree(#[from] rig_core::CommandError),
    #[error("sandbox unavailable: {0}")]
    Sandbox(String),
}
