// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Build session interpreter
//!
//! One session interprets one command tree for one job: a depth-first,
//! left-to-right walk where exactly one node executes at a time. All
//! side effects (process spawns, console lines, status reports) happen
//! in node order; concurrency enters only at the cancellation boundary.

use crate::context::ExecutionContext;
use crate::error::BuildError;
use crate::sandbox::Sandbox;
use crate::vars;
use rig_adapters::{
    ArtifactPlan, ArtifactPublisher, ConsoleSink, ProcessRunner, ProcessSpec, ProcessStatus,
    StatusReporter,
};
use rig_core::{
    AgentIdentifier, BuildId, BuildState, Clock, CommandNode, CommandStep, JobResult,
    StatusTransition,
};
use std::future::Future;
use std::path::Path;
use std::pin::Pin;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Collaborator bundle handed to [`BuildSession::new`]
pub struct BuildDeps<P, R, A> {
    pub runner: P,
    pub reporter: R,
    pub artifacts: A,
}

/// Interprets one command tree against one sandbox.
pub struct BuildSession<P, R, A, K, C>
where
    P: ProcessRunner,
    R: StatusReporter,
    A: ArtifactPublisher,
    K: ConsoleSink,
    C: Clock,
{
    build_id: BuildId,
    agent: AgentIdentifier,
    runner: P,
    reporter: R,
    artifacts: A,
    console: K,
    clock: C,
    cancel: CancellationToken,
    end_artifacts: Vec<ArtifactPlan>,
    ctx: ExecutionContext,
}

impl<P, R, A, K, C> BuildSession<P, R, A, K, C>
where
    P: ProcessRunner,
    R: StatusReporter,
    A: ArtifactPublisher,
    K: ConsoleSink,
    C: Clock,
{
    /// Create a session for one job invocation.
    pub fn new(
        build_id: BuildId,
        agent: AgentIdentifier,
        deps: BuildDeps<P, R, A>,
        console: K,
        variables: std::collections::HashMap<String, String>,
        clock: C,
        sandbox: Sandbox,
    ) -> Self {
        let ctx = ExecutionContext::new(variables, sandbox);
        Self {
            build_id,
            agent,
            runner: deps.runner,
            reporter: deps.reporter,
            artifacts: deps.artifacts,
            console,
            clock,
            cancel: CancellationToken::new(),
            end_artifacts: Vec::new(),
            ctx,
        }
    }

    /// Declare artifacts published once at job end, regardless of the
    /// final result (mirrors cleanup/reporting semantics).
    pub fn with_artifacts(mut self, plans: Vec<ArtifactPlan>) -> Self {
        self.end_artifacts = plans;
        self
    }

    /// Token for cancelling this session from another thread of
    /// control. Cancelling terminates any in-flight process and stops
    /// further nodes from starting.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Interpret the whole tree and return its final result.
    ///
    /// A malformed tree is refused before any side effect; otherwise
    /// exactly one terminal [`JobResult`] is produced, including under
    /// cancellation.
    pub async fn run(&mut self, root: &CommandNode) -> Result<JobResult, BuildError> {
        root.validate()?;

        tracing::info!(build_id = %self.build_id, agent = %self.agent, "build started");
        let start = self.clock.now();

        self.walk(root, "0".to_string()).await;

        // Cancellation supersedes any in-flight determination even
        // when it lands after the last node finished.
        if self.cancel.is_cancelled() {
            self.ctx.absorb(JobResult::Cancelled);
        }

        self.publish_end_artifacts().await;

        let result = self.ctx.result();
        if let Err(e) = self
            .reporter
            .report_completed(&self.build_id, &self.agent, result)
            .await
        {
            tracing::warn!(build_id = %self.build_id, error = %e, "completion report failed");
        }

        let elapsed = self.clock.now().saturating_duration_since(start);
        tracing::info!(
            build_id = %self.build_id,
            result = %result,
            elapsed_ms = elapsed.as_millis() as u64,
            "build finished"
        );
        Ok(result)
    }

    fn walk<'a>(
        &'a mut self,
        node: &'a CommandNode,
        path: String,
    ) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>> {
        Box::pin(async move {
            if self.cancel.is_cancelled() {
                self.ctx.absorb(JobResult::Cancelled);
                return;
            }

            // A node whose run condition is not met is skipped along
            // with its entire subtree: no result, no console output,
            // no status reports.
            if !node.run_if.satisfied_by(self.ctx.result()) {
                tracing::debug!(
                    path = %path,
                    run_if = ?node.run_if,
                    result = %self.ctx.result(),
                    "skipping node"
                );
                return;
            }

            if let CommandStep::Compose { children } = &node.step {
                for (i, child) in children.iter().enumerate() {
                    self.walk(child, format!("{path}.{i}")).await;
                }
                return;
            }

            self.report(&path, BuildState::Running).await;

            let outcome = match &node.step {
                CommandStep::Exec {
                    program,
                    args,
                    working_dir,
                    timeout,
                } => {
                    self.exec_leaf(program, args, working_dir.as_deref(), *timeout)
                        .await
                }
                CommandStep::SetVariable { name, value } => {
                    let value = vars::substitute(value, self.ctx.vars());
                    self.ctx.set_var(name.clone(), value);
                    JobResult::Passed
                }
                CommandStep::Echo { lines } => {
                    for line in lines {
                        self.console.append(&vars::substitute(line, self.ctx.vars()));
                    }
                    JobResult::Passed
                }
                CommandStep::UploadArtifact {
                    source,
                    destination,
                } => self.upload_leaf(source, destination).await,
                CommandStep::Noop | CommandStep::Compose { .. } => JobResult::Passed,
            };

            self.ctx.absorb(outcome);
            self.report(&path, outcome.into()).await;
        })
    }

    /// Spawn one process with arguments resolved against the variable
    /// snapshot taken at this moment, so earlier set_variable nodes in
    /// the same tree are visible.
    async fn exec_leaf(
        &self,
        program: &str,
        args: &[String],
        working_dir: Option<&Path>,
        timeout: Option<Duration>,
    ) -> JobResult {
        let snapshot = self.ctx.vars();
        let program = vars::substitute(program, snapshot);
        let args = vars::substitute_all(args, snapshot);
        let working_dir = match working_dir {
            Some(dir) => self.ctx.sandbox().resolve(dir),
            None => self.ctx.sandbox().path().to_path_buf(),
        };
        let env = snapshot
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        let spec = ProcessSpec {
            program: program.clone(),
            args,
            working_dir,
            env,
            timeout,
        };

        match self.runner.run(spec, self.cancel.clone()).await {
            Ok(ProcessStatus::Exited(0)) => JobResult::Passed,
            Ok(ProcessStatus::Exited(code)) => {
                self.console
                    .append(&format!("{} exited with code {}", program, code));
                JobResult::Failed
            }
            Ok(ProcessStatus::TimedOut) => {
                let limit = timeout.unwrap_or_default();
                self.console.append(&format!(
                    "{} terminated after exceeding {:.1}s",
                    program,
                    limit.as_secs_f64()
                ));
                JobResult::Failed
            }
            Ok(ProcessStatus::Cancelled) => JobResult::Cancelled,
            Err(e) => {
                self.console
                    .append(&format!("failed to run {}: {}", program, e));
                tracing::warn!(program = %program, error = %e, "process could not run");
                JobResult::Failed
            }
        }
    }

    /// Publish one checkpoint artifact. Publish problems are surfaced
    /// on the console but categorized apart from execution failures,
    /// so the outcome stays Passed.
    async fn upload_leaf(&self, source: &Path, destination: &str) -> JobResult {
        let destination = vars::substitute(destination, self.ctx.vars());
        let plan = ArtifactPlan::new(source, destination.clone());

        match self
            .artifacts
            .publish(self.ctx.sandbox().path(), std::slice::from_ref(&plan))
            .await
        {
            Ok(()) => {
                self.console
                    .append(&format!("published {} -> {}", source.display(), destination));
                JobResult::Passed
            }
            Err(e) => {
                self.console
                    .append(&format!("artifact publish failed: {}", e));
                tracing::warn!(error = %e, "artifact publish failed");
                JobResult::Passed
            }
        }
    }

    async fn publish_end_artifacts(&self) {
        if self.end_artifacts.is_empty() {
            return;
        }
        if let Err(e) = self
            .artifacts
            .publish(self.ctx.sandbox().path(), &self.end_artifacts)
            .await
        {
            self.console
                .append(&format!("artifact publish failed: {}", e));
            tracing::warn!(error = %e, "end-of-job artifact publish failed");
        }
    }

    /// Best-effort status transition; failures are logged and never
    /// change the job result.
    async fn report(&self, node_path: &str, state: BuildState) {
        let transition = StatusTransition {
            build_id: self.build_id.clone(),
            agent: self.agent.clone(),
            node_path: node_path.to_string(),
            state,
            at_epoch_ms: self.clock.epoch_ms(),
        };
        if let Err(e) = self.reporter.report_transition(&transition).await {
            tracing::warn!(node_path, state = %state, error = %e, "status report failed");
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
