// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::console::TestConsole;
use std::path::PathBuf;

fn spec(program: &str) -> ProcessSpec {
    ProcessSpec {
        program: program.to_string(),
        args: Vec::new(),
        working_dir: PathBuf::from("/sandbox"),
        env: Vec::new(),
        timeout: None,
    }
}

#[tokio::test]
async fn unscripted_programs_pass_immediately() {
    let runner = FakeProcessRunner::new(TestConsole::new());
    let status = runner
        .run(spec("/bin/anything"), CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(status, ProcessStatus::Exited(0));
}

#[tokio::test]
async fn scripted_exit_code_and_output() {
    let console = TestConsole::new();
    let runner = FakeProcessRunner::new(console.clone());
    runner.script(
        "/bin/build",
        FakeProcess::exit(3).with_output(["compiling", "error: boom"]),
    );

    let status = runner
        .run(spec("/bin/build"), CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(status, ProcessStatus::Exited(3));
    assert_eq!(console.lines(), vec!["compiling", "error: boom"]);
}

#[tokio::test]
async fn calls_are_recorded_in_order() {
    let runner = FakeProcessRunner::new(TestConsole::new());
    runner.run(spec("/bin/a"), CancellationToken::new()).await.unwrap();
    runner.run(spec("/bin/b"), CancellationToken::new()).await.unwrap();

    let calls = runner.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].program, "/bin/a");
    assert_eq!(calls[1].program, "/bin/b");
}

#[tokio::test]
async fn spawn_error_is_scriptable() {
    let runner = FakeProcessRunner::new(TestConsole::new());
    runner.script("/bin/missing", FakeProcess::spawn_error("no such file"));

    let err = runner
        .run(spec("/bin/missing"), CancellationToken::new())
        .await
        .unwrap_err();
    assert!(matches!(err, ProcessError::Spawn(m) if m == "no such file"));
}

#[tokio::test(start_paused = true)]
async fn timeout_shorter_than_duration_times_out() {
    let runner = FakeProcessRunner::new(TestConsole::new());
    runner.script(
        "/bin/slow",
        FakeProcess::exit(0).with_duration(Duration::from_secs(5)),
    );

    let mut spec = spec("/bin/slow");
    spec.timeout = Some(Duration::from_secs(1));

    let status = runner.run(spec, CancellationToken::new()).await.unwrap();
    assert_eq!(status, ProcessStatus::TimedOut);
}

#[tokio::test(start_paused = true)]
async fn cancellation_interrupts_a_simulated_run() {
    let runner = FakeProcessRunner::new(TestConsole::new());
    runner.script(
        "/bin/slow",
        FakeProcess::exit(0).with_duration(Duration::from_secs(5)),
    );

    let cancel = CancellationToken::new();
    let run = {
        let runner = runner.clone();
        let cancel = cancel.clone();
        tokio::spawn(async move { runner.run(spec("/bin/slow"), cancel).await })
    };

    tokio::time::sleep(Duration::from_millis(10)).await;
    cancel.cancel();

    let status = run.await.unwrap().unwrap();
    assert_eq!(status, ProcessStatus::Cancelled);
}
