// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP status reporter posting JSON to the coordinator

use super::{ReportError, StatusReporter};
use async_trait::async_trait;
use rig_core::{AgentIdentifier, BuildId, JobResult, StatusTransition};

/// Posts status transitions to the coordinator's job endpoints.
#[derive(Clone)]
pub struct HttpStatusReporter {
    client: reqwest::Client,
    base_url: String,
}

impl HttpStatusReporter {
    /// `base_url` is the coordinator root, e.g. `https://coordinator:8443/api`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn transitions_url(&self, build_id: &BuildId) -> String {
        format!("{}/jobs/{}/transitions", self.base_url, build_id)
    }

    fn completed_url(&self, build_id: &BuildId) -> String {
        format!("{}/jobs/{}/completed", self.base_url, build_id)
    }

    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<(), ReportError> {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| ReportError::Send(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(ReportError::Rejected(format!(
                "{} -> {}",
                url,
                response.status()
            )))
        }
    }
}

#[async_trait]
impl StatusReporter for HttpStatusReporter {
    async fn report_transition(&self, transition: &StatusTransition) -> Result<(), ReportError> {
        let body = serde_json::to_value(transition)
            .map_err(|e| ReportError::Send(e.to_string()))?;
        self.post_json(&self.transitions_url(&transition.build_id), &body)
            .await
    }

    async fn report_completed(
        &self,
        build_id: &BuildId,
        agent: &AgentIdentifier,
        result: JobResult,
    ) -> Result<(), ReportError> {
        let body = serde_json::json!({
            "agent": agent,
            "result": result,
        });
        self.post_json(&self.completed_url(build_id), &body).await
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
