//! Task record for per-member planning.

use super::{PlannerDomainError, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::Serialize;

/// A unit of planned work assigned to a member.
///
/// Tasks start incomplete and non-urgent; deadline, touched files, and
/// urgency are attached through the builder methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    id: TaskId,
    name: String,
    assignee: String,
    deadline: Option<DateTime<Utc>>,
    files: Vec<String>,
    urgent: bool,
    complete: bool,
    created_at: DateTime<Utc>,
}

impl Task {
    /// Creates an incomplete task with a validated name.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerDomainError::EmptyTaskName`] if the name is empty
    /// after trimming.
    pub fn new(
        name: impl Into<String>,
        assignee: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<Self, PlannerDomainError> {
        let raw_name = name.into();
        let normalized_name = raw_name.trim();
        if normalized_name.is_empty() {
            return Err(PlannerDomainError::EmptyTaskName);
        }

        Ok(Self {
            id: TaskId::new(),
            name: normalized_name.to_owned(),
            assignee: assignee.into(),
            deadline: None,
            files: Vec::new(),
            urgent: false,
            complete: false,
            created_at: clock.utc(),
        })
    }

    /// Sets the task deadline.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Sets the files the task touches.
    #[must_use]
    pub fn with_files(mut self, files: impl IntoIterator<Item = String>) -> Self {
        self.files = files.into_iter().collect();
        self
    }

    /// Sets the task urgency.
    #[must_use]
    pub const fn with_urgency(mut self, urgent: bool) -> Self {
        self.urgent = urgent;
        self
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the assignee username.
    #[must_use]
    pub fn assignee(&self) -> &str {
        &self.assignee
    }

    /// Returns the task deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<DateTime<Utc>> {
        self.deadline
    }

    /// Returns the files the task touches.
    #[must_use]
    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// Returns whether the task is urgent.
    #[must_use]
    pub const fn is_urgent(&self) -> bool {
        self.urgent
    }

    /// Returns whether the task has been completed.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.complete
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Marks the task completed.
    pub const fn mark_complete(&mut self) {
        self.complete = true;
    }
}
