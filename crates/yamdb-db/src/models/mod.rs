//! Database models - rows as returned by SQLx

mod comment;
mod confirmation_code;
mod review;
mod taxon;
mod title;
mod user;

pub use comment::CommentModel;
pub use confirmation_code::ConfirmationCodeModel;
pub use review::ReviewModel;
pub use taxon::{TaxonModel, TitleGenreModel};
pub use title::TitleModel;
pub use user::UserModel;
