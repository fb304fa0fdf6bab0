//! # yamdb-service
//!
//! Application layer containing use cases, DTOs and the per-request
//! authorization checks. Every operation that mutates state takes the
//! calling [`yamdb_core::Actor`] explicitly.

pub mod dto;
pub mod services;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use services::{
    AuthService, BootstrapService, CommentService, ReviewService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, TaxonomyService, TitleService,
    UserService,
};
