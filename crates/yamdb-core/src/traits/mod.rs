//! Traits (ports) - interfaces implemented by the infrastructure layer

mod capabilities;
mod pagination;
mod repositories;

pub use capabilities::{Mailer, OutgoingMail, TokenIssuer};
pub use pagination::{Page, PageRequest};
pub use repositories::{
    CommentRepository, ConfirmationCodeRepository, RepoResult, ReviewRepository,
    TaxonomyRepository, TitleQuery, TitleRepository, UserRepository,
};
