//! Milestone record for roadmap checkpoints.

use super::{MilestoneId, RoadmapDomainError};
use serde::Serialize;

/// A named roadmap checkpoint with an achieved/unachieved state.
///
/// Milestones start unachieved; the achieved flag is owned by the roadmap's
/// progression operations and has no public mutation path. Equal titles are
/// permitted; identity is the [`MilestoneId`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Milestone {
    id: MilestoneId,
    title: String,
    description: String,
    achieved: bool,
}

impl Milestone {
    /// Creates an unachieved milestone with a validated title.
    ///
    /// The title is trimmed before validation.
    ///
    /// # Errors
    ///
    /// Returns [`RoadmapDomainError::EmptyMilestoneTitle`] if the title is
    /// empty after trimming.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, RoadmapDomainError> {
        let raw_title = title.into();
        let normalized_title = raw_title.trim();
        if normalized_title.is_empty() {
            return Err(RoadmapDomainError::EmptyMilestoneTitle);
        }

        Ok(Self {
            id: MilestoneId::new(),
            title: normalized_title.to_owned(),
            description: description.into(),
            achieved: false,
        })
    }

    /// Returns the milestone identifier.
    #[must_use]
    pub const fn id(&self) -> MilestoneId {
        self.id
    }

    /// Returns the milestone title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the milestone description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns whether the milestone has been achieved.
    #[must_use]
    pub const fn is_achieved(&self) -> bool {
        self.achieved
    }

    /// Sets the achieved flag. Reserved for roadmap progression.
    pub(super) const fn set_achieved(&mut self, achieved: bool) {
        self.achieved = achieved;
    }
}
