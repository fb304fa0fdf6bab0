//! Service context - dependency container for services
//!
//! Holds the repositories and outbound capabilities needed by services.

use std::sync::Arc;

use chrono::Duration;
use yamdb_core::traits::{
    CommentRepository, ConfirmationCodeRepository, Mailer, ReviewRepository, TaxonomyRepository,
    TitleRepository, TokenIssuer, UserRepository,
};
use yamdb_core::{Category, Genre};

use super::error::{ServiceError, ServiceResult};

/// Default lifetime of a confirmation code
const DEFAULT_CODE_TTL_SECS: i64 = 86_400;

/// Service context containing all dependencies
///
/// This is the dependency container passed to every service. Storage is
/// reached only through the repository ports, so the same services run
/// against PostgreSQL or the in-memory store.
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    code_repo: Arc<dyn ConfirmationCodeRepository>,
    category_repo: Arc<dyn TaxonomyRepository<Category>>,
    genre_repo: Arc<dyn TaxonomyRepository<Genre>>,
    title_repo: Arc<dyn TitleRepository>,
    review_repo: Arc<dyn ReviewRepository>,
    comment_repo: Arc<dyn CommentRepository>,

    // Capabilities
    mailer: Arc<dyn Mailer>,
    token_issuer: Arc<dyn TokenIssuer>,

    code_ttl: Duration,
}

impl ServiceContext {
    /// Start building a context
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::default()
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the confirmation code repository
    pub fn code_repo(&self) -> &dyn ConfirmationCodeRepository {
        self.code_repo.as_ref()
    }

    /// Get the category repository
    pub fn category_repo(&self) -> &dyn TaxonomyRepository<Category> {
        self.category_repo.as_ref()
    }

    /// Get the genre repository
    pub fn genre_repo(&self) -> &dyn TaxonomyRepository<Genre> {
        self.genre_repo.as_ref()
    }

    /// Get the title repository
    pub fn title_repo(&self) -> &dyn TitleRepository {
        self.title_repo.as_ref()
    }

    /// Get the review repository
    pub fn review_repo(&self) -> &dyn ReviewRepository {
        self.review_repo.as_ref()
    }

    /// Get the comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    // === Capabilities ===

    /// Get the outbound mailer
    pub fn mailer(&self) -> &dyn Mailer {
        self.mailer.as_ref()
    }

    /// Get the bearer token issuer
    pub fn token_issuer(&self) -> &dyn TokenIssuer {
        self.token_issuer.as_ref()
    }

    /// How long a freshly issued confirmation code stays valid
    pub fn code_ttl(&self) -> Duration {
        self.code_ttl
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("mailer", &"dyn Mailer")
            .field("token_issuer", &"dyn TokenIssuer")
            .field("code_ttl", &self.code_ttl)
            .finish()
    }
}

/// Builder for [`ServiceContext`]
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    code_repo: Option<Arc<dyn ConfirmationCodeRepository>>,
    category_repo: Option<Arc<dyn TaxonomyRepository<Category>>>,
    genre_repo: Option<Arc<dyn TaxonomyRepository<Genre>>>,
    title_repo: Option<Arc<dyn TitleRepository>>,
    review_repo: Option<Arc<dyn ReviewRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    mailer: Option<Arc<dyn Mailer>>,
    token_issuer: Option<Arc<dyn TokenIssuer>>,
    code_ttl: Option<Duration>,
}

impl ServiceContextBuilder {
    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn code_repo(mut self, repo: Arc<dyn ConfirmationCodeRepository>) -> Self {
        self.code_repo = Some(repo);
        self
    }

    pub fn category_repo(mut self, repo: Arc<dyn TaxonomyRepository<Category>>) -> Self {
        self.category_repo = Some(repo);
        self
    }

    pub fn genre_repo(mut self, repo: Arc<dyn TaxonomyRepository<Genre>>) -> Self {
        self.genre_repo = Some(repo);
        self
    }

    pub fn title_repo(mut self, repo: Arc<dyn TitleRepository>) -> Self {
        self.title_repo = Some(repo);
        self
    }

    pub fn review_repo(mut self, repo: Arc<dyn ReviewRepository>) -> Self {
        self.review_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn mailer(mut self, mailer: Arc<dyn Mailer>) -> Self {
        self.mailer = Some(mailer);
        self
    }

    pub fn token_issuer(mut self, issuer: Arc<dyn TokenIssuer>) -> Self {
        self.token_issuer = Some(issuer);
        self
    }

    /// Confirmation code lifetime in seconds
    pub fn code_ttl_secs(mut self, secs: i64) -> Self {
        self.code_ttl = Some(Duration::seconds(secs));
        self
    }

    /// Build the context
    ///
    /// # Errors
    /// Returns an error if a repository or capability was not provided
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext {
            user_repo: self.user_repo.ok_or_else(|| missing("user_repo"))?,
            code_repo: self.code_repo.ok_or_else(|| missing("code_repo"))?,
            category_repo: self.category_repo.ok_or_else(|| missing("category_repo"))?,
            genre_repo: self.genre_repo.ok_or_else(|| missing("genre_repo"))?,
            title_repo: self.title_repo.ok_or_else(|| missing("title_repo"))?,
            review_repo: self.review_repo.ok_or_else(|| missing("review_repo"))?,
            comment_repo: self.comment_repo.ok_or_else(|| missing("comment_repo"))?,
            mailer: self.mailer.ok_or_else(|| missing("mailer"))?,
            token_issuer: self.token_issuer.ok_or_else(|| missing("token_issuer"))?,
            code_ttl: self
                .code_ttl
                .unwrap_or_else(|| Duration::seconds(DEFAULT_CODE_TTL_SECS)),
        })
    }
}

fn missing(what: &str) -> ServiceError {
    ServiceError::internal(format!("{what} is required"))
}
