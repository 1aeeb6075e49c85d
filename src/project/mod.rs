//! Project aggregate tying a team to its roadmap.
//!
//! - Domain types in [`domain`]

pub mod domain;

#[cfg(test)]
mod tests;
