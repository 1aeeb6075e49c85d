//! Per-member task planning.
//!
//! This module implements the task planning surface around the roadmap:
//! task records with deadlines and urgency, a planner holding each member's
//! task list with derived deadline/urgency views, and the member aggregate
//! that assigns and removes tasks through its planner. These are plain
//! aggregates: list membership and input validation, no state machine.
//!
//! - Domain types in [`domain`]

pub mod domain;

#[cfg(test)]
mod tests;
