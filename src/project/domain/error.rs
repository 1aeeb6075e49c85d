//! Error types for project construction.

use thiserror::Error;

/// Errors returned while constructing a project.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectDomainError {
    /// The project title is empty after trimming.
    #[error("project title must not be empty")]
    EmptyProjectTitle,
}
