// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cancelling a session with a real process in flight.

use crate::prelude::*;
use rig_core::{CommandNode, JobResult};
use std::time::{Duration, Instant};

#[tokio::test]
async fn cancelling_a_long_sleep_returns_promptly() {
    let mut rig = rig();
    let tree = CommandNode::exec("/bin/sleep", ["5"]);

    let token = rig.session.cancellation_token();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        token.cancel();
    });

    let started = Instant::now();
    let result = rig.session.run(&tree).await.unwrap();
    let elapsed = started.elapsed();

    assert_eq!(result, JobResult::Cancelled);
    // bounded grace period, nowhere near the sleep's natural end
    assert!(elapsed < Duration::from_secs(2), "took {elapsed:?}");
}

#[tokio::test]
async fn cancellation_stops_later_nodes_and_reports_cancelled() {
    let mut rig = rig();
    let tree = CommandNode::compose(vec![
        CommandNode::exec("/bin/sleep", ["5"]),
        CommandNode::exec("/bin/echo", ["never printed"]),
    ]);

    let token = rig.session.cancellation_token();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        token.cancel();
    });

    let result = rig.session.run(&tree).await.unwrap();

    assert_eq!(result, JobResult::Cancelled);
    assert!(!rig.console.contains("never printed"));
    let completions = rig.reporter.completions();
    assert_eq!(completions.len(), 1);
    assert_eq!(completions[0].1, JobResult::Cancelled);
}

#[tokio::test]
async fn cancellation_after_the_last_node_still_ends_cancelled() {
    let mut rig = rig();
    let tree = CommandNode::exec("/bin/true", Vec::<String>::new());

    // cancel before run; the session must not start anything
    rig.session.cancellation_token().cancel();
    let result = rig.session.run(&tree).await.unwrap();

    assert_eq!(result, JobResult::Cancelled);
    assert!(rig.reporter.transitions().is_empty());
}
