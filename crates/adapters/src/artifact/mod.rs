// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Artifact publishing to remote storage

mod http;

pub use http::HttpArtifactPublisher;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeArtifactPublisher;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from artifact publishing
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("artifact source not found: {0}")]
    MissingSource(PathBuf),
    #[error("upload failed: {0}")]
    Upload(String),
}

/// One artifact to publish: a sandbox-relative source and a
/// destination descriptor understood by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactPlan {
    pub source: PathBuf,
    pub destination: String,
}

impl ArtifactPlan {
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }
}

/// Uploads files produced inside the sandbox to remote storage.
///
/// Failures are categorized separately from execution failures; the
/// interpreter surfaces them without failing the job.
#[async_trait]
pub trait ArtifactPublisher: Clone + Send + Sync + 'static {
    /// Publish the given plans, resolving sources against `sandbox`.
    async fn publish(&self, sandbox: &Path, plans: &[ArtifactPlan]) -> Result<(), PublishError>;
}
