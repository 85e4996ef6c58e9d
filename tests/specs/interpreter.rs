// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Core interpreter walk: ordering, conditions, variables, artifacts.

use crate::prelude::*;
use rig_core::{BuildState, CommandNode, JobResult, RunCondition};
use std::collections::HashMap;

#[tokio::test]
async fn passing_tree_echoes_ok() {
    let mut rig = rig();
    let tree = CommandNode::compose(vec![
        CommandNode::exec("/bin/true", Vec::<String>::new()),
        CommandNode::cond(
            RunCondition::Passed,
            vec![CommandNode::exec("/bin/echo", ["ok"])],
        ),
    ]);

    let result = rig.session.run(&tree).await.unwrap();

    assert_eq!(result, JobResult::Passed);
    assert!(rig.console.contains("ok"));
}

#[tokio::test]
async fn failing_tree_runs_cleanup_but_not_success_branch() {
    let mut rig = rig();
    let tree = CommandNode::compose(vec![
        CommandNode::exec("/bin/false", Vec::<String>::new()),
        CommandNode::cond(
            RunCondition::Passed,
            vec![CommandNode::exec("/bin/echo", ["ok"])],
        ),
        CommandNode::cond(
            RunCondition::Any,
            vec![CommandNode::exec("/bin/echo", ["cleanup"])],
        ),
    ]);

    let result = rig.session.run(&tree).await.unwrap();

    assert_eq!(result, JobResult::Failed);
    assert!(rig.console.contains("cleanup"));
    assert!(!rig.console.contains("ok"));
}

#[tokio::test]
async fn process_output_streams_to_the_console() {
    let mut rig = rig();
    let tree = CommandNode::exec("/bin/sh", ["-c", "echo line1; echo line2 >&2"]);

    rig.session.run(&tree).await.unwrap();

    assert!(rig.console.contains("line1"));
    assert!(rig.console.contains("line2"));
}

#[tokio::test]
async fn variables_substitute_into_spawned_processes() {
    let vars: HashMap<String, String> =
        [("word".to_string(), "resolved".to_string())].into();
    let mut rig = rig_with_vars(vars);
    let tree = CommandNode::compose(vec![
        CommandNode::set_variable("other", "${word}-twice"),
        CommandNode::exec("/bin/echo", ["${other}"]),
    ]);

    rig.session.run(&tree).await.unwrap();

    assert!(rig.console.contains("resolved-twice"));
}

#[tokio::test]
async fn variables_reach_the_process_environment() {
    let vars: HashMap<String, String> =
        [("BUILD_LABEL".to_string(), "42".to_string())].into();
    let mut rig = rig_with_vars(vars);
    let tree = CommandNode::exec("/bin/sh", ["-c", "echo label=$BUILD_LABEL"]);

    rig.session.run(&tree).await.unwrap();

    assert!(rig.console.contains("label=42"));
}

#[tokio::test]
async fn working_dir_resolves_inside_the_sandbox() {
    let mut rig = rig();
    let tree = CommandNode::compose(vec![
        CommandNode::exec("/bin/mkdir", ["-p", "sub"]),
        CommandNode::exec("/bin/sh", ["-c", "pwd"]).in_dir("sub"),
    ]);

    let result = rig.session.run(&tree).await.unwrap();

    assert_eq!(result, JobResult::Passed);
    assert!(rig.console.contains("/sub"));
}

#[tokio::test]
async fn transitions_arrive_in_execution_order() {
    let mut rig = rig();
    let tree = CommandNode::compose(vec![
        CommandNode::exec("/bin/true", Vec::<String>::new()),
        CommandNode::echo("done"),
    ]);

    rig.session.run(&tree).await.unwrap();

    assert_eq!(
        rig.reporter.states(),
        vec![
            ("0.0".to_string(), BuildState::Running),
            ("0.0".to_string(), BuildState::Passed),
            ("0.1".to_string(), BuildState::Running),
            ("0.1".to_string(), BuildState::Passed),
        ]
    );
}

#[tokio::test]
async fn a_tree_deserialized_from_json_runs_end_to_end() {
    let json = r#"{
        "kind": "compose",
        "children": [
            { "kind": "set_variable", "name": "greeting", "value": "hello" },
            { "kind": "exec", "program": "/bin/echo", "args": ["${greeting}"] },
            {
                "kind": "compose",
                "run_if": "passed",
                "children": [{ "kind": "echo", "lines": ["all good"] }]
            }
        ]
    }"#;
    let tree: rig_core::CommandNode = serde_json::from_str(json).unwrap();

    let mut rig = rig();
    let result = rig.session.run(&tree).await.unwrap();

    assert_eq!(result, JobResult::Passed);
    assert!(rig.console.contains("hello"));
    assert!(rig.console.contains("all good"));
}

#[tokio::test]
async fn uploaded_artifacts_reach_the_publisher_with_the_sandbox_root() {
    let mut rig = rig();
    let tree = CommandNode::compose(vec![
        CommandNode::exec("/bin/sh", ["-c", "echo data > out.txt"]),
        CommandNode::upload_artifact("out.txt", "reports"),
    ]);

    let result = rig.session.run(&tree).await.unwrap();

    assert_eq!(result, JobResult::Passed);
    let published = rig.artifacts.published();
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].1.source, std::path::PathBuf::from("out.txt"));
    assert_eq!(published[0].1.destination, "reports");
}
