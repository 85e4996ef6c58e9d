// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Console sink backed by a channel to the live-tail transport

use super::ConsoleSink;
use tokio::sync::mpsc;

/// Console sink that forwards each line over an unbounded channel.
///
/// The receiving half belongs to the transport task that live-tails
/// output to the coordinator. The channel is unbounded so `append`
/// stays non-blocking; ordering is the channel's FIFO ordering.
#[derive(Clone)]
pub struct StreamingConsole {
    tx: mpsc::UnboundedSender<String>,
}

impl StreamingConsole {
    /// Create a sink and the receiver the transport should drain.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl ConsoleSink for StreamingConsole {
    fn append(&self, line: &str) {
        // Send fails only when the transport has shut down; output is
        // then surfaced in the agent log instead of lost silently.
        if self.tx.send(line.to_string()).is_err() {
            tracing::warn!(line, "console transport closed, dropping output");
        }
    }
}

#[cfg(test)]
#[path = "streaming_tests.rs"]
mod tests;
