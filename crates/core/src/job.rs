// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job identity, result aggregation, and status transition wire shapes.

use crate::agent::AgentIdentifier;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for one job (one execution of a command tree).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BuildId(pub String);

impl BuildId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BuildId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for BuildId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Final outcome of a node or of the whole job.
///
/// Variant order is severity order: aggregation keeps the worst outcome
/// seen, so `Cancelled > Failed > Passed`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum JobResult {
    Passed,
    Failed,
    Cancelled,
}

impl JobResult {
    /// The more severe of the two outcomes.
    pub fn worst(self, other: JobResult) -> JobResult {
        self.max(other)
    }

    pub fn is_passed(self) -> bool {
        self == JobResult::Passed
    }
}

impl fmt::Display for JobResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobResult::Passed => write!(f, "passed"),
            JobResult::Failed => write!(f, "failed"),
            JobResult::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// State reported to the coordinator for one node execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildState {
    Running,
    Passed,
    Failed,
    Cancelled,
}

impl From<JobResult> for BuildState {
    fn from(result: JobResult) -> Self {
        match result {
            JobResult::Passed => BuildState::Passed,
            JobResult::Failed => BuildState::Failed,
            JobResult::Cancelled => BuildState::Cancelled,
        }
    }
}

impl fmt::Display for BuildState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildState::Running => write!(f, "running"),
            BuildState::Passed => write!(f, "passed"),
            BuildState::Failed => write!(f, "failed"),
            BuildState::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// One status transition pushed to the coordinator.
///
/// Carries the executing agent's identity so the coordinator can
/// attribute the work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusTransition {
    pub build_id: BuildId,
    pub agent: AgentIdentifier,
    /// Dotted index path of the node within the tree (root is "0")
    pub node_path: String,
    pub state: BuildState,
    pub at_epoch_ms: u64,
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
