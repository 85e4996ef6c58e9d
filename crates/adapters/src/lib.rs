// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Adapters for the build session's external collaborators

pub mod artifact;
pub mod console;
pub mod process;
pub mod report;

pub use artifact::{ArtifactPlan, ArtifactPublisher, HttpArtifactPublisher, PublishError};
pub use console::{ConsoleSink, NoOpConsole, StreamingConsole};
pub use process::{
    LocalProcessRunner, ProcessError, ProcessRunner, ProcessSpec, ProcessStatus,
};
pub use report::{HttpStatusReporter, ReportError, StatusReporter};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use artifact::FakeArtifactPublisher;
#[cfg(any(test, feature = "test-support"))]
pub use console::TestConsole;
#[cfg(any(test, feature = "test-support"))]
pub use process::{FakeProcess, FakeProcessRunner};
#[cfg(any(test, feature = "test-support"))]
pub use report::FakeStatusReporter;
