//! Test support: in-memory repositories and mail doubles
//!
//! Enabled for this crate's own tests and, through the `testing` feature,
//! for downstream crates that want to drive services without PostgreSQL.

mod mailer;
mod store;

use std::sync::Arc;

use yamdb_core::traits::{Mailer, TaxonomyRepository, TitleRepository, TokenIssuer, UserRepository};
use yamdb_core::{Actor, NewTaxon, NewUser, Role, Taxon, TitleDraft, User};

use crate::services::{ServiceContext, ServiceResult};

pub use mailer::{extract_code, FailingMailer, RecordingMailer};
pub use store::InMemoryStore;

/// Wire every repository of a context to one shared in-memory store
pub fn in_memory_context(
    store: &Arc<InMemoryStore>,
    mailer: Arc<dyn Mailer>,
    token_issuer: Arc<dyn TokenIssuer>,
) -> ServiceResult<ServiceContext> {
    ServiceContext::builder()
        .user_repo(store.clone())
        .code_repo(store.clone())
        .category_repo(store.clone())
        .genre_repo(store.clone())
        .title_repo(store.clone())
        .review_repo(store.clone())
        .comment_repo(store.clone())
        .mailer(mailer)
        .token_issuer(token_issuer)
        .build()
}

/// A context over a fresh store with a recording mailer, plus seeding helpers
pub struct Harness {
    pub store: Arc<InMemoryStore>,
    pub mailer: Arc<RecordingMailer>,
    pub ctx: ServiceContext,
}

impl Harness {
    /// Build a harness issuing tokens with `token_issuer`
    pub fn new(token_issuer: Arc<dyn TokenIssuer>) -> ServiceResult<Self> {
        let store = Arc::new(InMemoryStore::new());
        let mailer = Arc::new(RecordingMailer::new());
        let ctx = in_memory_context(&store, mailer.clone(), token_issuer)?;
        Ok(Self { store, mailer, ctx })
    }

    /// Store a user with the given role and return it with its actor
    pub async fn seed_user(&self, username: &str, role: Role) -> ServiceResult<(User, Actor)> {
        let mut new_user = NewUser::signup(username, format!("{username}@example.com"));
        new_user.role = role;
        let user = UserRepository::create(self.store.as_ref(), &new_user).await?;
        let actor = Actor::from(&user);
        Ok((user, actor))
    }

    /// Store a category or genre
    pub async fn seed_taxon<T: Taxon>(&self, name: &str, slug: &str) -> ServiceResult<T> {
        let taxon =
            TaxonomyRepository::<T>::create(self.store.as_ref(), &NewTaxon::new(name, slug))
                .await?;
        Ok(taxon)
    }

    /// Store a title without genres or category
    pub async fn seed_title(&self, name: &str, year: Option<i32>) -> ServiceResult<i64> {
        let draft = TitleDraft {
            name: name.to_string(),
            year,
            ..Default::default()
        };
        Ok(TitleRepository::create(self.store.as_ref(), &draft).await?)
    }
}
