// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process runner backed by real OS processes

use super::{ProcessError, ProcessRunner, ProcessSpec, ProcessStatus};
use crate::console::ConsoleSink;
use async_trait::async_trait;
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::{Child, Command};
use tokio_util::sync::CancellationToken;

/// Runs processes with tokio, streaming stdout/stderr line-by-line to
/// the console as they are produced.
#[derive(Clone)]
pub struct LocalProcessRunner<K: ConsoleSink> {
    console: K,
}

impl<K: ConsoleSink> LocalProcessRunner<K> {
    pub fn new(console: K) -> Self {
        Self { console }
    }
}

/// Forward each line of `reader` to the console until EOF.
async fn pump<K: ConsoleSink>(reader: impl AsyncRead + Unpin, console: K) {
    let mut lines = BufReader::new(reader).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        console.append(&line);
    }
}

/// Kill the child and reap it so no orphan outlives the call.
async fn terminate(child: &mut Child) {
    if let Err(e) = child.start_kill() {
        tracing::warn!(error = %e, "failed to kill child process");
    }
    let _ = child.wait().await;
}

#[async_trait]
impl<K: ConsoleSink> ProcessRunner for LocalProcessRunner<K> {
    async fn run(
        &self,
        spec: ProcessSpec,
        cancel: CancellationToken,
    ) -> Result<ProcessStatus, ProcessError> {
        tracing::debug!(
            program = %spec.program,
            args = ?spec.args,
            working_dir = %spec.working_dir.display(),
            timeout = ?spec.timeout,
            "spawning process"
        );

        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args)
            .current_dir(&spec.working_dir)
            .envs(spec.env.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let mut child = cmd
            .spawn()
            .map_err(|e| ProcessError::Spawn(format!("{}: {}", spec.program, e)))?;

        let out_pump = child
            .stdout
            .take()
            .map(|out| tokio::spawn(pump(out, self.console.clone())));
        let err_pump = child
            .stderr
            .take()
            .map(|err| tokio::spawn(pump(err, self.console.clone())));

        let timeout = async {
            match spec.timeout {
                Some(d) => tokio::time::sleep(d).await,
                None => std::future::pending::<()>().await,
            }
        };
        tokio::pin!(timeout);

        // Cancellation is checked before the timeout: when both are
        // observable in the same instant the outcome is Cancelled.
        let status = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                terminate(&mut child).await;
                ProcessStatus::Cancelled
            }
            _ = &mut timeout => {
                terminate(&mut child).await;
                ProcessStatus::TimedOut
            }
            exit = child.wait() => {
                let exit = exit.map_err(|e| ProcessError::Wait(e.to_string()))?;
                ProcessStatus::Exited(exit.code().unwrap_or(-1))
            }
        };

        // Drain the output pumps so every produced line reaches the
        // console before the status is returned.
        if let Some(pump) = out_pump {
            let _ = pump.await;
        }
        if let Some(pump) = err_pump {
            let _ = pump.await;
        }

        tracing::debug!(program = %spec.program, status = ?status, "process finished");
        Ok(status)
    }
}

#[cfg(test)]
#[path = "local_tests.rs"]
mod tests;
