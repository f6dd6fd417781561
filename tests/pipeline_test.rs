//! Integration tests for step execution and fail-fast sequencing

#![cfg(unix)]

use bball_pipeline::{PipelineError, Plan, Step};

fn shell(name: &str, script: String) -> Step {
    Step::new(name, "sh").arg("-c").arg(script)
}

#[tokio::test]
async fn init_runs_before_the_task() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("order.log");
    let log_path = log.to_string_lossy().into_owned();

    let plan = Plan::new(
        shell("init", format!("echo init >> '{log_path}'")),
        shell("task", format!("echo task >> '{log_path}'")),
    );
    let reports = plan.execute().await.unwrap();

    let names: Vec<&str> = reports.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["init", "task"]);
    assert_eq!(std::fs::read_to_string(&log).unwrap(), "init\ntask\n");
}

#[tokio::test]
async fn failing_init_means_the_task_never_runs() {
    let dir = tempfile::tempdir().unwrap();
    let marker = dir.path().join("task-ran");
    let marker_path = marker.to_string_lossy().into_owned();

    let plan = Plan::new(
        shell("init", "exit 3".to_string()),
        shell("task", format!("touch '{marker_path}'")),
    );
    let err = plan.execute().await.unwrap_err();

    match err {
        PipelineError::StepFailed { step, code } => {
            assert_eq!(step, "init");
            assert_eq!(code, 3);
        }
        other => panic!("expected StepFailed, got {other:?}"),
    }
    assert!(!marker.exists(), "task step ran despite failing init");
}

#[tokio::test]
async fn failing_task_surfaces_its_exit_code() {
    let step = shell("boom", "exit 7".to_string());
    let err = step.run().await.unwrap_err();

    match &err {
        PipelineError::StepFailed { step, code } => {
            assert_eq!(step, "boom");
            assert_eq!(*code, 7);
        }
        other => panic!("expected StepFailed, got {other:?}"),
    }
    // The entrypoint reports the child's code as its own.
    assert_eq!(err.exit_code(), 7);
}

#[tokio::test]
async fn step_environment_reaches_the_child() {
    let step = shell(
        "check-env",
        r#"test "$DATABASE_URL" = postgres://probe-url"#.to_string(),
    )
    .env("DATABASE_URL", "postgres://probe-url");

    step.run().await.unwrap();
}

#[tokio::test]
async fn missing_program_is_an_io_error() {
    let step = Step::new("ghost", "/nonexistent/not-a-real-binary");
    let err = step.run().await.unwrap_err();

    assert!(matches!(err, PipelineError::Io(_)));
    assert_eq!(err.exit_code(), 1);
}

#[tokio::test]
async fn step_runs_in_the_requested_directory() {
    let dir = tempfile::tempdir().unwrap();
    let step = shell("mark", "touch here".to_string()).current_dir(dir.path());

    step.run().await.unwrap();
    assert!(dir.path().join("here").exists());
}
