// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake status reporter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{ReportError, StatusReporter};
use async_trait::async_trait;
use parking_lot::Mutex;
use rig_core::{AgentIdentifier, BuildId, JobResult, StatusTransition};
use std::sync::Arc;

struct FakeReporterState {
    transitions: Vec<StatusTransition>,
    completions: Vec<(BuildId, JobResult)>,
    failing: bool,
}

/// Fake reporter that records everything pushed to it.
///
/// Switch on `set_failing` to prove reporting failures never leak into
/// the job result.
#[derive(Clone)]
pub struct FakeStatusReporter {
    inner: Arc<Mutex<FakeReporterState>>,
}

impl Default for FakeStatusReporter {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeReporterState {
                transitions: Vec::new(),
                completions: Vec::new(),
                failing: false,
            })),
        }
    }
}

impl FakeStatusReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded transitions, in report order
    pub fn transitions(&self) -> Vec<StatusTransition> {
        self.inner.lock().transitions.clone()
    }

    /// The `(node_path, state)` pairs, in report order
    pub fn states(&self) -> Vec<(String, rig_core::BuildState)> {
        self.inner
            .lock()
            .transitions
            .iter()
            .map(|t| (t.node_path.clone(), t.state))
            .collect()
    }

    /// Recorded final results
    pub fn completions(&self) -> Vec<(BuildId, JobResult)> {
        self.inner.lock().completions.clone()
    }

    /// Make every subsequent report fail
    pub fn set_failing(&self, failing: bool) {
        self.inner.lock().failing = failing;
    }
}

#[async_trait]
impl StatusReporter for FakeStatusReporter {
    async fn report_transition(&self, transition: &StatusTransition) -> Result<(), ReportError> {
        let mut inner = self.inner.lock();
        if inner.failing {
            return Err(ReportError::Send("fake network down".to_string()));
        }
        inner.transitions.push(transition.clone());
        Ok(())
    }

    async fn report_completed(
        &self,
        build_id: &BuildId,
        _agent: &AgentIdentifier,
        result: JobResult,
    ) -> Result<(), ReportError> {
        let mut inner = self.inner.lock();
        if inner.failing {
            return Err(ReportError::Send("fake network down".to_string()));
        }
        inner.completions.push((build_id.clone(), result));
        Ok(())
    }
}
