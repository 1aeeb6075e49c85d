//! Planner holding a member's task list with derived views.

use super::{PlannerDomainError, Task, TaskId};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A member's task list.
///
/// Deadline, urgency, and completion views are derived from the single task
/// list rather than kept as parallel collections, so they cannot drift from
/// it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Planner {
    tasks: Vec<Task>,
}

impl Planner {
    /// Creates a planner over an initial task list.
    #[must_use]
    pub const fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Returns the planned tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the task with the given identifier, if present.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|candidate| candidate.id() == id)
    }

    /// Returns id/deadline pairs for every task that has a deadline.
    #[must_use]
    pub fn deadlines(&self) -> Vec<(TaskId, DateTime<Utc>)> {
        self.tasks
            .iter()
            .filter_map(|task| task.deadline().map(|deadline| (task.id(), deadline)))
            .collect()
    }

    /// Returns the urgent tasks.
    #[must_use]
    pub fn urgent_tasks(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|task| task.is_urgent()).collect()
    }

    /// Returns the completed tasks.
    #[must_use]
    pub fn completed_tasks(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|task| task.is_complete()).collect()
    }

    /// Adds a task to the plan.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerDomainError::CompletedTaskAdded`] if the task has
    /// already been completed.
    pub fn add_task(&mut self, task: Task) -> Result<(), PlannerDomainError> {
        if task.is_complete() {
            return Err(PlannerDomainError::CompletedTaskAdded(task.id()));
        }

        self.tasks.push(task);
        Ok(())
    }

    /// Removes a task from the plan.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerDomainError::UnknownTask`] if no task with the
    /// given identifier is planned.
    pub fn remove_task(&mut self, task: TaskId) -> Result<(), PlannerDomainError> {
        let position = self
            .tasks
            .iter()
            .position(|candidate| candidate.id() == task)
            .ok_or(PlannerDomainError::UnknownTask(task))?;
        self.tasks.remove(position);
        Ok(())
    }
}
