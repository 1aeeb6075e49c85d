//! Tests for task construction and completion.

use crate::planner::domain::{PlannerDomainError, Task};
use chrono::{TimeZone, Utc};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

#[rstest]
fn task_new_trims_name_and_starts_incomplete(clock: DefaultClock) {
    let task = Task::new("  Wire up the API  ", "alice", &clock).expect("valid task name");

    assert_eq!(task.name(), "Wire up the API");
    assert_eq!(task.assignee(), "alice");
    assert_eq!(task.deadline(), None);
    assert!(task.files().is_empty());
    assert!(!task.is_urgent());
    assert!(!task.is_complete());
}

#[rstest]
#[case("")]
#[case("   ")]
fn task_new_rejects_blank_name(#[case] name: &str, clock: DefaultClock) {
    let result = Task::new(name, "alice", &clock);
    assert_eq!(result, Err(PlannerDomainError::EmptyTaskName));
}

#[rstest]
fn task_builders_attach_deadline_files_and_urgency(clock: DefaultClock) {
    let deadline = Utc
        .with_ymd_and_hms(2025, 3, 14, 12, 0, 0)
        .single()
        .expect("valid timestamp");

    let task = Task::new("Release", "bob", &clock)
        .expect("valid task name")
        .with_deadline(deadline)
        .with_files(vec!["src/lib.rs".to_owned(), "Cargo.toml".to_owned()])
        .with_urgency(true);

    assert_eq!(task.deadline(), Some(deadline));
    assert_eq!(task.files(), ["src/lib.rs", "Cargo.toml"]);
    assert!(task.is_urgent());
}

#[rstest]
fn mark_complete_flips_the_completion_flag(clock: DefaultClock) {
    let mut task = Task::new("Cleanup", "alice", &clock).expect("valid task name");

    task.mark_complete();

    assert!(task.is_complete());
}

#[rstest]
fn tasks_with_equal_names_have_distinct_ids(clock: DefaultClock) {
    let first = Task::new("Review", "alice", &clock).expect("valid task name");
    let second = Task::new("Review", "bob", &clock).expect("valid task name");

    assert_ne!(first.id(), second.id());
}
