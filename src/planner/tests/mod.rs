//! Unit tests for the planner domain.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for assertion clarity"
)]

mod task_tests;
