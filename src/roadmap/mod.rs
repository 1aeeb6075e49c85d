//! Milestone roadmap management.
//!
//! This module implements the roadmap state machine: an ordered sequence of
//! milestones, a cursor identifying the next milestone to achieve, and
//! operations to achieve, unachieve, reorder, and delete milestones while
//! keeping the cursor consistent. Achieved milestones occupy a contiguous
//! prefix of the sequence, up to (not including) the cursor; reorders that
//! would place an unachieved milestone immediately before an achieved one
//! are rejected.
//!
//! - Domain types in [`domain`]

pub mod domain;

#[cfg(test)]
mod tests;
