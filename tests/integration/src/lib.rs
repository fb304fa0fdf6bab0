//! Integration test utilities for YaMDb
//!
//! Helpers for running end-to-end tests against a real server backed by
//! PostgreSQL, with mail written to a per-server directory.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
