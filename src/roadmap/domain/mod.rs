//! Domain model for milestone roadmap progression.
//!
//! The roadmap domain models milestone creation, achievement progression
//! through a moving cursor, ordering changes, and deletion, while keeping
//! the achieved prefix and cursor bookkeeping consistent.

mod error;
mod ids;
mod milestone;
mod roadmap;

pub use error::RoadmapDomainError;
pub use ids::MilestoneId;
pub use milestone::Milestone;
pub use roadmap::Roadmap;
