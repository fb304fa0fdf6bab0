//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod auth;
pub mod comments;
pub mod health;
pub mod reviews;
pub mod taxonomy;
pub mod titles;
pub mod users;
