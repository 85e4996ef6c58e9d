// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake artifact publisher for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{ArtifactPlan, ArtifactPublisher, PublishError};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use std::sync::Arc;

struct FakePublisherState {
    published: Vec<(PathBuf, ArtifactPlan)>,
    failing: bool,
}

/// Fake publisher that records every plan it is handed.
#[derive(Clone)]
pub struct FakeArtifactPublisher {
    inner: Arc<Mutex<FakePublisherState>>,
}

impl Default for FakeArtifactPublisher {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakePublisherState {
                published: Vec::new(),
                failing: false,
            })),
        }
    }
}

impl FakeArtifactPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// All `(sandbox, plan)` pairs published, in order
    pub fn published(&self) -> Vec<(PathBuf, ArtifactPlan)> {
        self.inner.lock().published.clone()
    }

    /// Make every subsequent publish fail
    pub fn set_failing(&self, failing: bool) {
        self.inner.lock().failing = failing;
    }
}

#[async_trait]
impl ArtifactPublisher for FakeArtifactPublisher {
    async fn publish(&self, sandbox: &Path, plans: &[ArtifactPlan]) -> Result<(), PublishError> {
        let mut inner = self.inner.lock();
        if inner.failing {
            return Err(PublishError::Upload("fake store down".to_string()));
        }
        for plan in plans {
            inner.published.push((sandbox.to_path_buf(), plan.clone()));
        }
        Ok(())
    }
}
