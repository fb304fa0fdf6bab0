//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! validation, authorization and orchestration of domain operations.

pub mod auth;
pub mod bootstrap;
pub mod comment;
pub mod context;
pub mod error;
pub mod review;
pub mod taxonomy;
pub mod title;
pub mod user;

// Re-export all services for convenience
pub use auth::AuthService;
pub use bootstrap::BootstrapService;
pub use comment::CommentService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use review::ReviewService;
pub use taxonomy::{CatalogTaxon, TaxonomyService};
pub use title::TitleService;
pub use user::UserService;
