// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Console output sinks

mod noop;
mod streaming;

pub use noop::NoOpConsole;
pub use streaming::StreamingConsole;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod test_console;
#[cfg(any(test, feature = "test-support"))]
pub use test_console::TestConsole;

/// Append-only, ordered sink for textual build output.
///
/// Lines arrive in the order they were produced across all leaf
/// executions of a job; implementations must not reorder or drop them.
/// `append` is synchronous and non-blocking so process output pumps
/// never stall on the transport.
pub trait ConsoleSink: Clone + Send + Sync + 'static {
    fn append(&self, line: &str);
}
