//! Error types for roadmap domain validation and progression.

use super::MilestoneId;
use thiserror::Error;

/// Errors returned by roadmap construction and milestone operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoadmapDomainError {
    /// A roadmap must be constructed with at least one milestone.
    #[error("a roadmap requires at least one milestone")]
    EmptyRoadmap,

    /// The milestone title is empty after trimming.
    #[error("milestone title must not be empty")]
    EmptyMilestoneTitle,

    /// The referenced milestone is not part of the roadmap.
    #[error("milestone {0} is not part of this roadmap")]
    UnknownMilestone(MilestoneId),

    /// Placing an unachieved milestone before an achieved one would break
    /// the achieved prefix.
    #[error("cannot place unachieved milestone {milestone} before achieved milestone {before}")]
    OrderingViolation {
        /// The milestone being relocated.
        milestone: MilestoneId,
        /// The achieved milestone it would be placed before.
        before: MilestoneId,
    },

    /// The cursor is on the last milestone; there is nothing to advance to.
    #[error("no milestone remains after the current one")]
    NoNextMilestone,

    /// The cursor is on the first milestone; there is nothing to step back
    /// to.
    #[error("no milestone precedes the current one")]
    NoPreviousMilestone,

    /// The milestone is the current one or the last remaining and cannot be
    /// deleted.
    #[error("milestone {0} is the current or last remaining milestone and cannot be deleted")]
    InvalidDeletion(MilestoneId),
}
