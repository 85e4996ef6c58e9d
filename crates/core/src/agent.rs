// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Identity of the worker executing a job.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Immutable identity of the executing agent, attached to every status
/// report so the coordinator can attribute work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentIdentifier {
    pub hostname: String,
    pub ip_address: String,
    pub uuid: String,
}

impl AgentIdentifier {
    pub fn new(
        hostname: impl Into<String>,
        ip_address: impl Into<String>,
        uuid: impl Into<String>,
    ) -> Self {
        Self {
            hostname: hostname.into(),
            ip_address: ip_address.into(),
            uuid: uuid.into(),
        }
    }
}

impl fmt::Display for AgentIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}, {}]", self.hostname, self.ip_address, self.uuid)
    }
}
