//! # yamdb-core
//!
//! Domain layer containing entities, value objects, the authorization policy,
//! and the repository and capability traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod policy;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    normalize_email, Category, Comment, ConfirmationCode, Genre, NewComment, NewReview, NewTaxon,
    NewUser, Review, Taxon, TaxonKind, Title, TitleDraft, User,
};
pub use error::DomainError;
pub use policy::{authorize, require, Action, Actor, Principal, Resource};
pub use traits::{
    CommentRepository, ConfirmationCodeRepository, Mailer, OutgoingMail, Page, PageRequest,
    RepoResult, ReviewRepository, TaxonomyRepository, TitleQuery, TitleRepository, TokenIssuer,
    UserRepository,
};
pub use value_objects::{Rating, Role, Score};
