// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Build command tree received from the coordinator.
//!
//! A [`CommandNode`] is purely descriptive data: the interpreter never
//! mutates the tree, only the execution state it carries alongside.
//! Shape constraints are checked once via [`CommandNode::validate`]
//! before execution starts, never mid-run.

use crate::job::JobResult;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Errors detected when validating a command tree
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("exec node {path} has an empty program")]
    EmptyProgram { path: String },
    #[error("set_variable node {path} has an empty name")]
    EmptyVariableName { path: String },
    #[error("exec node {path} has a zero timeout")]
    ZeroTimeout { path: String },
    #[error("upload_artifact node {path} has an empty source")]
    EmptyArtifactSource { path: String },
    #[error("upload_artifact node {path} has an empty destination")]
    EmptyArtifactDestination { path: String },
}

/// Predicate over the session's worst-so-far result that decides
/// whether a node (and its whole subtree) executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunCondition {
    /// Run only while everything so far has passed
    Passed,
    /// Run only after something has failed
    Failed,
    /// Run regardless of prior outcome (the default)
    Any,
}

impl Default for RunCondition {
    fn default() -> Self {
        RunCondition::Any
    }
}

impl RunCondition {
    /// Whether a node gated by this condition should execute given the
    /// session's current aggregated result.
    pub fn satisfied_by(self, result: JobResult) -> bool {
        match self {
            RunCondition::Any => true,
            RunCondition::Passed => result == JobResult::Passed,
            RunCondition::Failed => result == JobResult::Failed,
        }
    }
}

/// One step kind in the command tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CommandStep {
    /// Spawn an external process in the sandbox
    Exec {
        program: String,
        #[serde(default)]
        args: Vec<String>,
        /// Working directory override, resolved relative to the sandbox
        #[serde(default, skip_serializing_if = "Option::is_none")]
        working_dir: Option<PathBuf>,
        /// Maximum duration before the process is terminated
        #[serde(
            default,
            with = "opt_duration_ms",
            skip_serializing_if = "Option::is_none"
        )]
        timeout: Option<Duration>,
    },

    /// Execute children in order
    Compose { children: Vec<CommandNode> },

    /// Set a session-scoped build variable (last write wins)
    SetVariable { name: String, value: String },

    /// Write lines to the build console
    Echo { lines: Vec<String> },

    /// Publish one artifact produced inside the sandbox
    UploadArtifact {
        /// Source path relative to the sandbox
        source: PathBuf,
        /// Destination descriptor understood by the artifact store
        destination: String,
    },

    /// Do nothing, contribute Passed
    Noop,
}

/// One node of the build command tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandNode {
    #[serde(flatten)]
    pub step: CommandStep,
    /// Run condition evaluated against the session's worst-so-far result
    #[serde(default)]
    pub run_if: RunCondition,
}

impl CommandNode {
    fn leaf(step: CommandStep) -> Self {
        Self {
            step,
            run_if: RunCondition::default(),
        }
    }

    /// Run a process with the given program and arguments
    pub fn exec(program: impl Into<String>, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::leaf(CommandStep::Exec {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            working_dir: None,
            timeout: None,
        })
    }

    /// Execute children in sequence
    pub fn compose(children: Vec<CommandNode>) -> Self {
        Self::leaf(CommandStep::Compose { children })
    }

    /// Execute children only when `condition` holds for the current result
    pub fn cond(condition: RunCondition, children: Vec<CommandNode>) -> Self {
        Self::compose(children).with_run_if(condition)
    }

    /// Set a build variable visible to later nodes in the same tree
    pub fn set_variable(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::leaf(CommandStep::SetVariable {
            name: name.into(),
            value: value.into(),
        })
    }

    /// Write a single line to the console
    pub fn echo(line: impl Into<String>) -> Self {
        Self::leaf(CommandStep::Echo {
            lines: vec![line.into()],
        })
    }

    /// Publish one sandbox-relative artifact
    pub fn upload_artifact(source: impl Into<PathBuf>, destination: impl Into<String>) -> Self {
        Self::leaf(CommandStep::UploadArtifact {
            source: source.into(),
            destination: destination.into(),
        })
    }

    /// A node that does nothing and passes
    pub fn noop() -> Self {
        Self::leaf(CommandStep::Noop)
    }

    /// Override the run condition (nodes run unconditionally by
    /// default; stop-on-failure is expressed in the tree with
    /// [`RunCondition::Passed`] gates)
    pub fn with_run_if(mut self, condition: RunCondition) -> Self {
        self.run_if = condition;
        self
    }

    /// Set a timeout on an exec node; ignored for other kinds
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        if let CommandStep::Exec {
            timeout: ref mut t, ..
        } = self.step
        {
            *t = Some(timeout);
        }
        self
    }

    /// Set a working directory override on an exec node; ignored for other kinds
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        if let CommandStep::Exec {
            ref mut working_dir,
            ..
        } = self.step
        {
            *working_dir = Some(dir.into());
        }
        self
    }

    /// Check shape constraints for the whole tree.
    ///
    /// Called once before interpretation; a malformed tree refuses to
    /// execute rather than partially run.
    pub fn validate(&self) -> Result<(), CommandError> {
        self.validate_at("0")
    }

    fn validate_at(&self, path: &str) -> Result<(), CommandError> {
        match &self.step {
            CommandStep::Exec {
                program, timeout, ..
            } => {
                if program.is_empty() {
                    return Err(CommandError::EmptyProgram {
                        path: path.to_string(),
                    });
                }
                if timeout.is_some_and(|t| t.is_zero()) {
                    return Err(CommandError::ZeroTimeout {
                        path: path.to_string(),
                    });
                }
            }
            CommandStep::SetVariable { name, .. } => {
                if name.is_empty() {
                    return Err(CommandError::EmptyVariableName {
                        path: path.to_string(),
                    });
                }
            }
            CommandStep::UploadArtifact {
                source,
                destination,
            } => {
                if source.as_os_str().is_empty() {
                    return Err(CommandError::EmptyArtifactSource {
                        path: path.to_string(),
                    });
                }
                if destination.is_empty() {
                    return Err(CommandError::EmptyArtifactDestination {
                        path: path.to_string(),
                    });
                }
            }
            CommandStep::Compose { children } => {
                for (i, child) in children.iter().enumerate() {
                    child.validate_at(&format!("{path}.{i}"))?;
                }
            }
            CommandStep::Echo { .. } | CommandStep::Noop => {}
        }
        Ok(())
    }
}

mod opt_duration_ms {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Option<Duration>, s: S) -> Result<S::Ok, S::Error> {
        duration.map(|d| d.as_millis() as u64).serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Duration>, D::Error> {
        let millis = Option::<u64>::deserialize(d)?;
        Ok(millis.map(Duration::from_millis))
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
