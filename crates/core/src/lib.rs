// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! rig-core: data model for the rig build agent

pub mod agent;
pub mod clock;
pub mod command;
pub mod job;

pub use agent::AgentIdentifier;
pub use clock::{Clock, FakeClock, SystemClock};
pub use command::{CommandError, CommandNode, CommandStep, RunCondition};
pub use job::{BuildId, BuildState, JobResult, StatusTransition};
