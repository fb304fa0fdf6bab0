//! Value objects - immutable types that represent domain concepts

mod rating;
mod role;
mod score;
mod slug;
mod username;

pub use rating::Rating;
pub use role::Role;
pub use score::Score;
pub use slug::{validate_slug, SLUG_MAX_LENGTH};
pub use username::{validate_username, RESERVED_USERNAME, USERNAME_MAX_LENGTH};
