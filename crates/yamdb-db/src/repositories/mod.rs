//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in yamdb-core.
//! Each repository handles database operations for a specific domain entity.

mod comment;
mod confirmation_code;
mod error;
mod review;
mod taxonomy;
mod title;
mod user;

pub use comment::PgCommentRepository;
pub use confirmation_code::PgConfirmationCodeRepository;
pub use review::PgReviewRepository;
pub use taxonomy::{PgCategoryRepository, PgGenreRepository, PgTaxonomyRepository};
pub use title::PgTitleRepository;
pub use user::PgUserRepository;
