//! Domain entities - core business objects

mod category;
mod comment;
mod confirmation_code;
mod genre;
mod review;
mod taxon;
mod title;
mod user;

pub use category::Category;
pub use comment::{Comment, NewComment};
pub use confirmation_code::ConfirmationCode;
pub use genre::Genre;
pub use review::{NewReview, Review};
pub use taxon::{NewTaxon, Taxon, TaxonKind, TAXON_NAME_MAX_LENGTH};
pub use title::{validate_year, Title, TitleDraft};
pub use user::{normalize_email, NewUser, User, EMAIL_MAX_LENGTH, NAME_MAX_LENGTH};
