// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Test helpers for behavioral specifications.
//!
//! Builds fully wired sessions: a real process runner against a real
//! sandbox directory, with recording fakes for everything that would
//! otherwise leave the machine.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use rig_adapters::{
    FakeArtifactPublisher, FakeStatusReporter, LocalProcessRunner, TestConsole,
};
use rig_agent::{BuildDeps, BuildSession, Sandbox};
use rig_core::{AgentIdentifier, BuildId, SystemClock};
use std::collections::HashMap;

pub type SpecSession = BuildSession<
    LocalProcessRunner<TestConsole>,
    FakeStatusReporter,
    FakeArtifactPublisher,
    TestConsole,
    SystemClock,
>;

pub struct Rig {
    pub session: SpecSession,
    pub console: TestConsole,
    pub reporter: FakeStatusReporter,
    pub artifacts: FakeArtifactPublisher,
    // keeps the sandbox directory alive for the test's duration
    _sandbox_dir: tempfile::TempDir,
}

/// A session wired like production, with recording collaborators
pub fn rig() -> Rig {
    rig_with_vars(HashMap::new())
}

pub fn rig_with_vars(vars: HashMap<String, String>) -> Rig {
    let sandbox_dir = tempfile::tempdir().unwrap();
    let console = TestConsole::new();
    let reporter = FakeStatusReporter::new();
    let artifacts = FakeArtifactPublisher::new();
    let sandbox = Sandbox::prepare(sandbox_dir.path()).unwrap();

    let session = BuildSession::new(
        BuildId::new("spec-build"),
        AgentIdentifier::new("spec-host", "127.0.0.1", "spec-uuid"),
        BuildDeps {
            runner: LocalProcessRunner::new(console.clone()),
            reporter: reporter.clone(),
            artifacts: artifacts.clone(),
        },
        console.clone(),
        vars,
        SystemClock,
        sandbox,
    );

    Rig {
        session,
        console,
        reporter,
        artifacts,
        _sandbox_dir: sandbox_dir,
    }
}
