//! Unit tests for the project aggregate.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for assertion clarity"
)]
