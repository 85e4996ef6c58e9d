// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-session mutable execution state

use crate::sandbox::Sandbox;
use rig_core::JobResult;
use std::collections::HashMap;

/// Mutable state owned by exactly one build session.
///
/// Created at the start of one job invocation and discarded at its
/// end; never shared across jobs.
#[derive(Debug)]
pub struct ExecutionContext {
    result: JobResult,
    vars: HashMap<String, String>,
    sandbox: Sandbox,
}

impl ExecutionContext {
    pub fn new(vars: HashMap<String, String>, sandbox: Sandbox) -> Self {
        Self {
            result: JobResult::Passed,
            vars,
            sandbox,
        }
    }

    /// The worst outcome seen so far; what run conditions observe.
    pub fn result(&self) -> JobResult {
        self.result
    }

    /// Fold a node outcome into the aggregate, keeping the worst.
    pub fn absorb(&mut self, outcome: JobResult) {
        self.result = self.result.worst(outcome);
    }

    /// Session-scoped variable write; last write wins.
    pub fn set_var(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    /// Current variable mapping, used as a substitution snapshot and
    /// as the environment overlay for spawned processes.
    pub fn vars(&self) -> &HashMap<String, String> {
        &self.vars
    }

    /// The job's working directory; execution root for every spawn
    /// and base for artifact sources.
    pub fn sandbox(&self) -> &Sandbox {
        &self.sandbox
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
