//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, pagination and filters.

mod auth;
mod body;
mod pagination;
mod path;
mod query;
mod validated;

pub use auth::CurrentActor;
pub use body::JsonBody;
pub use pagination::{Pagination, PaginationParams};
pub use path::{ApiPath, CommentPath, ReviewPath, SlugPath, TitlePath, UsernamePath};
pub use query::{ApiQuery, SearchParams, TitleFilterParams};
pub use validated::ValidatedJson;
