// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-job working directory

use crate::error::BuildError;
use std::path::{Path, PathBuf};

/// The working directory for one job: the execution root of every
/// spawned process and the base for artifact sources.
///
/// Created before interpretation begins; cleanup belongs to the
/// surrounding job lifecycle, not the interpreter.
#[derive(Debug, Clone)]
pub struct Sandbox {
    root: PathBuf,
}

impl Sandbox {
    /// Ensure the directory exists and wrap it.
    pub fn prepare(root: impl Into<PathBuf>) -> Result<Self, BuildError> {
        let root = root.into();
        std::fs::create_dir_all(&root).map_err(|e| {
            BuildError::Sandbox(format!("failed to create {}: {}", root.display(), e))
        })?;
        Ok(Self { root })
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Resolve a path against the sandbox root; absolute paths are
    /// kept as-is.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

#[cfg(test)]
#[path = "sandbox_tests.rs"]
mod tests;
