// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Recording console for tests
#![cfg_attr(coverage_nightly, coverage(off))]

use super::ConsoleSink;
use parking_lot::Mutex;
use std::sync::Arc;

/// Console sink that records lines in memory
#[derive(Clone, Default)]
pub struct TestConsole {
    lines: Arc<Mutex<Vec<String>>>,
}

impl TestConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded lines, in append order
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// All recorded output joined with newlines
    pub fn output(&self) -> String {
        self.lines.lock().join("\n")
    }

    /// Whether any recorded line contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.lock().iter().any(|l| l.contains(needle))
    }
}

impl ConsoleSink for TestConsole {
    fn append(&self, line: &str) {
        self.lines.lock().push(line.to_string());
    }
}
