// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake process runner for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{ProcessError, ProcessRunner, ProcessSpec, ProcessStatus};
use crate::console::ConsoleSink;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Scripted behavior for one program path.
///
/// Simulated durations run on tokio's virtual clock, so tests using
/// `#[tokio::test(start_paused = true)]` stay deterministic and fast.
#[derive(Debug, Clone, Default)]
pub struct FakeProcess {
    pub exit_code: i32,
    pub duration: Duration,
    pub output: Vec<String>,
    pub spawn_error: Option<String>,
}

impl FakeProcess {
    /// A process that exits immediately with the given code
    pub fn exit(exit_code: i32) -> Self {
        Self {
            exit_code,
            ..Self::default()
        }
    }

    /// A spawn that fails outright (missing executable, permissions)
    pub fn spawn_error(message: impl Into<String>) -> Self {
        Self {
            spawn_error: Some(message.into()),
            ..Self::default()
        }
    }

    /// Simulated run duration before exit
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Lines written to the console when the process completes
    pub fn with_output(mut self, lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.output = lines.into_iter().map(Into::into).collect();
        self
    }
}

struct FakeRunnerState {
    scripts: HashMap<String, FakeProcess>,
    calls: Vec<ProcessSpec>,
}

/// Fake process runner with scripted exit codes and delays.
///
/// Unscripted programs exit 0 immediately.
#[derive(Clone)]
pub struct FakeProcessRunner<K: ConsoleSink> {
    console: K,
    inner: Arc<Mutex<FakeRunnerState>>,
}

impl<K: ConsoleSink> FakeProcessRunner<K> {
    pub fn new(console: K) -> Self {
        Self {
            console,
            inner: Arc::new(Mutex::new(FakeRunnerState {
                scripts: HashMap::new(),
                calls: Vec::new(),
            })),
        }
    }

    /// Script the behavior of one program path
    pub fn script(&self, program: impl Into<String>, process: FakeProcess) {
        self.inner.lock().scripts.insert(program.into(), process);
    }

    /// All specs this runner was asked to run, in order
    pub fn calls(&self) -> Vec<ProcessSpec> {
        self.inner.lock().calls.clone()
    }
}

#[async_trait]
impl<K: ConsoleSink> ProcessRunner for FakeProcessRunner<K> {
    async fn run(
        &self,
        spec: ProcessSpec,
        cancel: CancellationToken,
    ) -> Result<ProcessStatus, ProcessError> {
        let script = {
            let mut inner = self.inner.lock();
            inner.calls.push(spec.clone());
            inner.scripts.get(&spec.program).cloned().unwrap_or_default()
        };

        if let Some(message) = script.spawn_error {
            return Err(ProcessError::Spawn(message));
        }

        // A timeout shorter than the simulated duration fires first.
        let (wait, timed_out) = match spec.timeout {
            Some(t) if t < script.duration => (t, true),
            _ => (script.duration, false),
        };

        // Cancellation beats the timeout when both fire in the same
        // instant, matching the real runner's biased select.
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Ok(ProcessStatus::Cancelled),
            _ = tokio::time::sleep(wait) => {
                if timed_out {
                    Ok(ProcessStatus::TimedOut)
                } else {
                    for line in &script.output {
                        self.console.append(line);
                    }
                    Ok(ProcessStatus::Exited(script.exit_code))
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
