// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Node-level timeouts against real processes.

use crate::prelude::*;
use rig_core::{CommandNode, JobResult, RunCondition};
use std::time::{Duration, Instant};

#[tokio::test]
async fn a_timed_out_process_fails_promptly() {
    let mut rig = rig();
    let tree = CommandNode::exec("/bin/sleep", ["5"]).with_timeout(Duration::from_millis(200));

    let started = Instant::now();
    let result = rig.session.run(&tree).await.unwrap();
    let elapsed = started.elapsed();

    assert_eq!(result, JobResult::Failed);
    assert!(elapsed < Duration::from_secs(2), "took {elapsed:?}");
    assert!(rig.console.contains("exceeding 0.2s"));
}

#[tokio::test]
async fn execution_continues_after_a_timeout() {
    let mut rig = rig();
    let tree = CommandNode::compose(vec![
        CommandNode::exec("/bin/sleep", ["5"]).with_timeout(Duration::from_millis(200)),
        CommandNode::cond(
            RunCondition::Failed,
            vec![CommandNode::exec("/bin/echo", ["recovered"])],
        ),
    ]);

    let result = rig.session.run(&tree).await.unwrap();

    assert_eq!(result, JobResult::Failed);
    assert!(rig.console.contains("recovered"));
}

#[tokio::test]
async fn a_process_finishing_under_its_timeout_passes() {
    let mut rig = rig();
    let tree = CommandNode::exec("/bin/echo", ["quick"]).with_timeout(Duration::from_secs(5));

    let result = rig.session.run(&tree).await.unwrap();

    assert_eq!(result, JobResult::Passed);
    assert!(rig.console.contains("quick"));
}
