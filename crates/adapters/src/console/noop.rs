// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op console for headless runs

use super::ConsoleSink;

/// Console sink that discards all output
#[derive(Clone, Default)]
pub struct NoOpConsole;

impl NoOpConsole {
    pub fn new() -> Self {
        Self
    }
}

impl ConsoleSink for NoOpConsole {
    fn append(&self, _line: &str) {}
}
