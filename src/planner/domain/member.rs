//! Team member aggregate owning a task planner.

use super::{Planner, PlannerDomainError, Task, TaskId};
use serde::Serialize;

/// A team member and the planner tracking their assigned tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Member {
    username: String,
    planner: Planner,
}

impl Member {
    /// Creates a member with a validated username.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerDomainError::EmptyUsername`] if the username is
    /// empty after trimming.
    pub fn new(
        username: impl Into<String>,
        planner: Planner,
    ) -> Result<Self, PlannerDomainError> {
        let raw_username = username.into();
        let normalized_username = raw_username.trim();
        if normalized_username.is_empty() {
            return Err(PlannerDomainError::EmptyUsername);
        }

        Ok(Self {
            username: normalized_username.to_owned(),
            planner,
        })
    }

    /// Returns the member username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the member's planner.
    #[must_use]
    pub const fn planner(&self) -> &Planner {
        &self.planner
    }

    /// Assigns a task to this member.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerDomainError::CompletedTaskAdded`] if the task has
    /// already been completed.
    pub fn assign_task(&mut self, task: Task) -> Result<(), PlannerDomainError> {
        self.planner.add_task(task)
    }

    /// Removes a task previously assigned to this member.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerDomainError::UnknownTask`] if the task is not in
    /// the member's planner.
    pub fn remove_assigned_task(&mut self, task: TaskId) -> Result<(), PlannerDomainError> {
        self.planner.remove_task(task)
    }
}
