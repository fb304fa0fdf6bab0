//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Uniqueness is enforced by the store: a
//! violated constraint surfaces as the matching conflict variant of
//! [`DomainError`].

use async_trait::async_trait;

use crate::entities::{
    Comment, ConfirmationCode, NewComment, NewReview, NewTaxon, NewUser, Review, Taxon, Title,
    TitleDraft, User,
};
use crate::error::DomainError;

use super::{Page, PageRequest};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>>;

    /// Find user by exact username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Find user by (already normalized) email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// List users ordered by username, optionally filtered by a username substring
    async fn list(&self, search: Option<&str>, page: PageRequest) -> RepoResult<Page<User>>;

    /// Create a new user
    ///
    /// Fails with `UsernameTaken` or `EmailTaken` on a uniqueness conflict.
    async fn create(&self, user: &NewUser) -> RepoResult<User>;

    /// Overwrite the mutable fields of an existing user
    async fn update(&self, user: &User) -> RepoResult<User>;

    /// Delete a user and everything they authored; returns false if absent
    async fn delete(&self, id: i64) -> RepoResult<bool>;
}

// ============================================================================
// Confirmation Code Repository
// ============================================================================

#[async_trait]
pub trait ConfirmationCodeRepository: Send + Sync {
    /// Store a code, replacing any previous code for the same user
    async fn store(&self, code: &ConfirmationCode) -> RepoResult<()>;

    /// Find the current code for a user
    async fn find(&self, user_id: i64) -> RepoResult<Option<ConfirmationCode>>;
}

// ============================================================================
// Taxonomy Repository (categories and genres)
// ============================================================================

#[async_trait]
pub trait TaxonomyRepository<T: Taxon>: Send + Sync {
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<T>>;

    /// Resolve several slugs at once; unknown slugs are simply absent
    async fn find_by_slugs(&self, slugs: &[String]) -> RepoResult<Vec<T>>;

    /// List ordered by name, optionally filtered by a name substring
    async fn list(&self, search: Option<&str>, page: PageRequest) -> RepoResult<Page<T>>;

    /// Fails with the kind's "already exists" error on a name or slug conflict
    async fn create(&self, taxon: &NewTaxon) -> RepoResult<T>;

    async fn delete_by_slug(&self, slug: &str) -> RepoResult<bool>;
}

// ============================================================================
// Title Repository
// ============================================================================

/// Filters for listing titles; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleQuery {
    /// Substring of the title name
    pub name: Option<String>,
    /// Exact release year
    pub year: Option<i32>,
    /// Substring of a genre slug
    pub genre: Option<String>,
    /// Substring of the category slug
    pub category: Option<String>,
}

#[async_trait]
pub trait TitleRepository: Send + Sync {
    /// Find a title with its category, genres and rating resolved
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Title>>;

    /// List titles ordered by year descending, then category
    async fn list(&self, query: &TitleQuery, page: PageRequest) -> RepoResult<Page<Title>>;

    /// Insert a title and its genre links atomically, returning the new ID
    async fn create(&self, draft: &TitleDraft) -> RepoResult<i64>;

    /// Replace a title and its genre links atomically; returns false if absent
    async fn update(&self, id: i64, draft: &TitleDraft) -> RepoResult<bool>;

    /// Delete a title with its reviews and their comments
    async fn delete(&self, id: i64) -> RepoResult<bool>;
}

// ============================================================================
// Review Repository
// ============================================================================

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Find a review belonging to the given title
    async fn find(&self, title_id: i64, review_id: i64) -> RepoResult<Option<Review>>;

    /// Check whether an author has already reviewed a title
    async fn exists_for_author(&self, title_id: i64, author_id: i64) -> RepoResult<bool>;

    /// List a title's reviews, newest first
    async fn list_by_title(&self, title_id: i64, page: PageRequest) -> RepoResult<Page<Review>>;

    /// Fails with `DuplicateReview` if the author already reviewed the title
    async fn create(&self, review: &NewReview) -> RepoResult<Review>;

    /// Persist edited text and score
    async fn update(&self, review: &Review) -> RepoResult<Review>;

    /// Delete a review with its comments
    async fn delete(&self, id: i64) -> RepoResult<bool>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find a comment belonging to the given review
    async fn find(&self, review_id: i64, comment_id: i64) -> RepoResult<Option<Comment>>;

    /// List a review's comments, newest first
    async fn list_by_review(&self, review_id: i64, page: PageRequest) -> RepoResult<Page<Comment>>;

    async fn create(&self, comment: &NewComment) -> RepoResult<Comment>;

    async fn update(&self, comment: &Comment) -> RepoResult<Comment>;

    async fn delete(&self, id: i64) -> RepoResult<bool>;
}
