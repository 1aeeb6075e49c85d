//! Error types for planner domain validation.

use super::TaskId;
use thiserror::Error;

/// Errors returned while constructing and managing planner values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PlannerDomainError {
    /// The task name is empty after trimming.
    #[error("task name must not be empty")]
    EmptyTaskName,

    /// The member username is empty after trimming.
    #[error("member username must not be empty")]
    EmptyUsername,

    /// The task has already been completed and cannot be planned.
    #[error("task {0} has already been completed and cannot be added")]
    CompletedTaskAdded(TaskId),

    /// The referenced task is not part of the planner.
    #[error("task {0} is not part of this planner")]
    UnknownTask(TaskId),
}
