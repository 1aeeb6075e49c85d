//! Unit tests for the roadmap domain.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for assertion clarity"
)]
#![expect(
    clippy::indexing_slicing,
    reason = "test code indexes fixture sequences of known length"
)]

use crate::roadmap::domain::{Milestone, MilestoneId, Roadmap};


/// Builds an unachieved milestone with an empty description.
fn milestone(title: &str) -> Milestone {
    Milestone::new(title, "").expect("valid milestone title")
}

/// Builds a roadmap from milestone titles, cursor on the first.
fn roadmap_of(titles: &[&str]) -> Roadmap {
    let milestones = titles.iter().map(|title| milestone(title)).collect();
    Roadmap::new(milestones).expect("non-empty roadmap")
}

/// Returns the identifier of the milestone at `index`.
fn id_at(roadmap: &Roadmap, index: usize) -> MilestoneId {
    roadmap.milestones()[index].id()
}

/// Returns the milestone titles in roadmap order.
fn titles_of(roadmap: &Roadmap) -> Vec<&str> {
    roadmap
        .milestones()
        .iter()
        .map(Milestone::title)
        .collect()
}

/// Asserts that achieved milestones are exactly those before the cursor.
fn assert_prefix_invariant(roadmap: &Roadmap) {
    let cursor = roadmap.current_milestone_index();
    for (index, entry) in roadmap.milestones().iter().enumerate() {
        assert_eq!(
            entry.is_achieved(),
            index < cursor,
            "prefix invariant violated at index {index} (cursor {cursor})"
        );
    }
}

/// Asserts that the cursor points at an in-bounds milestone whose identity
/// matches `current_milestone`.
fn assert_cursor_consistent(roadmap: &Roadmap) {
    let cursor = roadmap.current_milestone_index();
    assert!(cursor < roadmap.milestones().len(), "cursor out of bounds");
    assert_eq!(roadmap.current_milestone().id(), id_at(roadmap, cursor));
}
