//! Project record aggregating a team and its roadmap.

use super::ProjectDomainError;
use crate::planner::domain::Member;
use crate::roadmap::domain::Roadmap;
use serde::Serialize;

/// A project: a titled piece of work with a team and a milestone roadmap.
///
/// The project itself carries no invariants; roadmap consistency is
/// enforced by [`Roadmap`], which callers reach through
/// [`Project::roadmap_mut`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    title: String,
    description: String,
    team: Vec<Member>,
    roadmap: Roadmap,
}

impl Project {
    /// Creates a project with a validated title.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyProjectTitle`] if the title is
    /// empty after trimming.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        team: Vec<Member>,
        roadmap: Roadmap,
    ) -> Result<Self, ProjectDomainError> {
        let raw_title = title.into();
        let normalized_title = raw_title.trim();
        if normalized_title.is_empty() {
            return Err(ProjectDomainError::EmptyProjectTitle);
        }

        Ok(Self {
            title: normalized_title.to_owned(),
            description: description.into(),
            team,
            roadmap,
        })
    }

    /// Returns the project title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the project description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the project team.
    #[must_use]
    pub fn team(&self) -> &[Member] {
        &self.team
    }

    /// Returns the team members for mutation through their own operations.
    #[must_use]
    pub fn team_mut(&mut self) -> &mut [Member] {
        &mut self.team
    }

    /// Returns the project roadmap.
    #[must_use]
    pub const fn roadmap(&self) -> &Roadmap {
        &self.roadmap
    }

    /// Returns the project roadmap for mutation through its operations.
    #[must_use]
    pub const fn roadmap_mut(&mut self) -> &mut Roadmap {
        &mut self.roadmap
    }
}
