// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! rig-agent: the build session interpreter
//!
//! Walks the command tree received from the coordinator, executing
//! each node against the job's sandbox while streaming console output
//! and reporting status transitions.

mod context;
mod error;
mod sandbox;
mod session;
pub mod vars;

pub use context::ExecutionContext;
pub use error::BuildError;
pub use sandbox::Sandbox;
pub use session::{BuildDeps, BuildSession};
