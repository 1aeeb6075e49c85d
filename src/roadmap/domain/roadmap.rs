//! Roadmap aggregate root: ordered milestones with an achievement cursor.

use super::{Milestone, MilestoneId, RoadmapDomainError};
use serde::Serialize;

/// Ordered milestone sequence with a moving achievement cursor.
///
/// The cursor identifies the next milestone to achieve: every milestone
/// before it is achieved, every milestone at or after it is not. The cursor
/// index is the single source of truth ([`Roadmap::current_milestone`] is
/// derived from it), and every operation keeps it within bounds, so the
/// sequence is never empty and the cursor never dangles.
///
/// The milestone sequence is only readable from outside; all mutation goes
/// through the operations below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Roadmap {
    milestones: Vec<Milestone>,
    cursor: usize,
}

impl Roadmap {
    /// Creates a roadmap from an ordered, non-empty milestone sequence.
    ///
    /// The cursor starts on the first milestone. Milestones are created
    /// unachieved, so a fresh roadmap trivially satisfies the achieved
    /// prefix.
    ///
    /// # Errors
    ///
    /// Returns [`RoadmapDomainError::EmptyRoadmap`] if `milestones` is
    /// empty.
    pub fn new(milestones: Vec<Milestone>) -> Result<Self, RoadmapDomainError> {
        if milestones.is_empty() {
            return Err(RoadmapDomainError::EmptyRoadmap);
        }

        Ok(Self {
            milestones,
            cursor: 0,
        })
    }

    /// Returns the milestones in roadmap order.
    #[must_use]
    pub fn milestones(&self) -> &[Milestone] {
        &self.milestones
    }

    /// Returns the index of the milestone the cursor points at.
    #[must_use]
    pub const fn current_milestone_index(&self) -> usize {
        self.cursor
    }

    /// Returns the milestone the cursor points at.
    ///
    /// # Panics
    ///
    /// Panics only if cursor bookkeeping is corrupted; every operation
    /// keeps the cursor strictly within bounds.
    #[must_use]
    #[expect(
        clippy::indexing_slicing,
        reason = "every operation keeps the cursor strictly within bounds"
    )]
    pub fn current_milestone(&self) -> &Milestone {
        &self.milestones[self.cursor]
    }

    /// Returns the milestone with the given identifier, if present.
    #[must_use]
    pub fn milestone(&self, id: MilestoneId) -> Option<&Milestone> {
        self.milestones.iter().find(|candidate| candidate.id() == id)
    }

    /// Marks the current milestone achieved and advances the cursor to the
    /// next milestone.
    ///
    /// # Errors
    ///
    /// Returns [`RoadmapDomainError::NoNextMilestone`] when the cursor is
    /// already on the last milestone; the roadmap is left untouched.
    pub fn achieve_milestone(&mut self) -> Result<(), RoadmapDomainError> {
        let next_index = self.cursor + 1;
        if next_index >= self.milestones.len() {
            return Err(RoadmapDomainError::NoNextMilestone);
        }

        self.milestones
            .get_mut(self.cursor)
            .ok_or(RoadmapDomainError::NoNextMilestone)?
            .set_achieved(true);
        self.cursor = next_index;
        Ok(())
    }

    /// Steps the cursor back one milestone and clears that milestone's
    /// achieved flag.
    ///
    /// Exact inverse of [`Roadmap::achieve_milestone`].
    ///
    /// # Errors
    ///
    /// Returns [`RoadmapDomainError::NoPreviousMilestone`] when the cursor
    /// is on the first milestone; the roadmap is left untouched.
    pub fn unachieve_milestone(&mut self) -> Result<(), RoadmapDomainError> {
        let previous_index = self
            .cursor
            .checked_sub(1)
            .ok_or(RoadmapDomainError::NoPreviousMilestone)?;

        self.milestones
            .get_mut(previous_index)
            .ok_or(RoadmapDomainError::NoPreviousMilestone)?
            .set_achieved(false);
        self.cursor = previous_index;
        Ok(())
    }

    /// Relocates `milestone` to immediately before `before`, or to the end
    /// of the sequence when `before` is `None`.
    ///
    /// Moving to the end also moves the cursor onto the relocated
    /// milestone. Moving before another milestone keeps the relative order
    /// of everything else and shifts the cursor one step forward,
    /// compensating for the index shift of the removal; the cursor never
    /// leaves the sequence.
    ///
    /// # Errors
    ///
    /// Returns [`RoadmapDomainError::UnknownMilestone`] when either
    /// identifier is not part of the roadmap, and
    /// [`RoadmapDomainError::OrderingViolation`] when `before` is achieved
    /// and `milestone` is not, the one placement that would break the
    /// achieved prefix. Rejected moves leave the roadmap untouched.
    pub fn change_milestone_order(
        &mut self,
        milestone: MilestoneId,
        before: Option<MilestoneId>,
    ) -> Result<(), RoadmapDomainError> {
        let (source, moving) = self.entry(milestone)?;
        let moving_achieved = moving.is_achieved();

        let Some(before_id) = before else {
            let relocated = self.milestones.remove(source);
            self.milestones.push(relocated);
            self.cursor = self.milestones.len() - 1;
            return Ok(());
        };

        let (target, before_milestone) = self.entry(before_id)?;
        if before_milestone.is_achieved() && !moving_achieved {
            return Err(RoadmapDomainError::OrderingViolation {
                milestone,
                before: before_id,
            });
        }

        let relocated = self.milestones.remove(source);
        let insert_at = if source < target { target - 1 } else { target };
        self.milestones.insert(insert_at, relocated);
        self.cursor = (self.cursor + 1).min(self.milestones.len() - 1);
        Ok(())
    }

    /// Removes `milestone` from the roadmap.
    ///
    /// Deleting a milestone behind the cursor pulls the cursor back one
    /// step so it stays on the same logical milestone.
    ///
    /// # Errors
    ///
    /// Returns [`RoadmapDomainError::UnknownMilestone`] when the identifier
    /// is not part of the roadmap, and
    /// [`RoadmapDomainError::InvalidDeletion`] when `milestone` is the one
    /// the cursor points at, which covers the last remaining milestone and
    /// keeps the sequence non-empty. Rejected deletions leave the roadmap
    /// untouched.
    pub fn delete_milestone(&mut self, milestone: MilestoneId) -> Result<(), RoadmapDomainError> {
        let position = self.entry(milestone)?.0;
        if position == self.cursor {
            return Err(RoadmapDomainError::InvalidDeletion(milestone));
        }

        self.milestones.remove(position);
        if position < self.cursor {
            self.cursor -= 1;
        }
        Ok(())
    }

    /// Finds a milestone's position and record by identifier.
    fn entry(&self, id: MilestoneId) -> Result<(usize, &Milestone), RoadmapDomainError> {
        self.milestones
            .iter()
            .enumerate()
            .find(|(_, candidate)| candidate.id() == id)
            .ok_or(RoadmapDomainError::UnknownMilestone(id))
    }
}
