// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP artifact publisher uploading file bytes to the coordinator store

use super::{ArtifactPlan, ArtifactPublisher, PublishError};
use async_trait::async_trait;
use rig_core::BuildId;
use std::path::Path;

/// Uploads artifact bytes to the coordinator's artifact store.
#[derive(Clone)]
pub struct HttpArtifactPublisher {
    client: reqwest::Client,
    base_url: String,
    build_id: BuildId,
}

impl HttpArtifactPublisher {
    pub fn new(base_url: impl Into<String>, build_id: BuildId) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            build_id,
        }
    }

    fn upload_url(&self, destination: &str) -> String {
        format!(
            "{}/jobs/{}/artifacts/{}",
            self.base_url,
            self.build_id,
            destination.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl ArtifactPublisher for HttpArtifactPublisher {
    async fn publish(&self, sandbox: &Path, plans: &[ArtifactPlan]) -> Result<(), PublishError> {
        for plan in plans {
            let source = sandbox.join(&plan.source);
            let bytes = tokio::fs::read(&source)
                .await
                .map_err(|_| PublishError::MissingSource(plan.source.clone()))?;

            tracing::debug!(
                source = %source.display(),
                destination = %plan.destination,
                size = bytes.len(),
                "uploading artifact"
            );

            let response = self
                .client
                .post(self.upload_url(&plan.destination))
                .body(bytes)
                .send()
                .await
                .map_err(|e| PublishError::Upload(e.to_string()))?;

            if !response.status().is_success() {
                return Err(PublishError::Upload(format!(
                    "{}: {}",
                    plan.destination,
                    response.status()
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
