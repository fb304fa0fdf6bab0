//! In-memory implementation of every repository port
//!
//! Mirrors the PostgreSQL schema's behaviour: unique constraints surface as
//! the same conflict errors, deletes cascade, deleting a category nulls the
//! category of its titles, and list orderings match the SQL queries.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use yamdb_core::traits::{
    CommentRepository, ConfirmationCodeRepository, Page, PageRequest, RepoResult,
    ReviewRepository, TaxonomyRepository, TitleQuery, TitleRepository, UserRepository,
};
use yamdb_core::{
    Category, Comment, ConfirmationCode, DomainError, Genre, NewComment, NewReview, NewTaxon,
    NewUser, Rating, Review, Taxon, TaxonKind, Title, TitleDraft, User,
};

#[derive(Debug, Clone)]
struct TaxonRecord {
    name: String,
    slug: String,
}

#[derive(Debug, Clone)]
struct TitleRecord {
    name: String,
    year: Option<i32>,
    description: Option<String>,
    category_id: Option<i64>,
    genre_ids: Vec<i64>,
}

#[derive(Debug, Clone)]
struct ReviewRecord {
    title_id: i64,
    author_id: i64,
    text: String,
    score: yamdb_core::Score,
    pub_date: chrono::DateTime<Utc>,
}

#[derive(Debug, Clone)]
struct CommentRecord {
    review_id: i64,
    author_id: i64,
    text: String,
    pub_date: chrono::DateTime<Utc>,
}

#[derive(Debug, Default)]
struct State {
    last_id: i64,
    users: BTreeMap<i64, User>,
    codes: HashMap<i64, ConfirmationCode>,
    taxa: HashMap<TaxonKind, BTreeMap<i64, TaxonRecord>>,
    titles: BTreeMap<i64, TitleRecord>,
    reviews: BTreeMap<i64, ReviewRecord>,
    comments: BTreeMap<i64, CommentRecord>,
}

impl State {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }

    fn taxa(&self, kind: TaxonKind) -> impl Iterator<Item = (&i64, &TaxonRecord)> {
        self.taxa.get(&kind).into_iter().flat_map(BTreeMap::iter)
    }

    fn taxon<T: Taxon>(&self, id: i64) -> Option<T> {
        self.taxa
            .get(&T::KIND)
            .and_then(|records| records.get(&id))
            .map(|r| T::from_parts(id, r.name.clone(), r.slug.clone()))
    }

    fn check_user_unique(&self, id: Option<i64>, username: &str, email: &str) -> RepoResult<()> {
        for user in self.users.values().filter(|u| Some(u.id) != id) {
            if user.username == username {
                return Err(DomainError::UsernameTaken);
            }
            if user.email == email {
                return Err(DomainError::EmailTaken);
            }
        }
        Ok(())
    }

    fn hydrate_title(&self, id: i64, record: &TitleRecord) -> Title {
        let mut genres: Vec<Genre> = record
            .genre_ids
            .iter()
            .filter_map(|&gid| self.taxon::<Genre>(gid))
            .collect();
        genres.sort_by(|a, b| a.name.cmp(&b.name));

        Title {
            id,
            name: record.name.clone(),
            year: record.year,
            description: record.description.clone(),
            category: record.category_id.and_then(|cid| self.taxon::<Category>(cid)),
            genres,
            rating: Rating::from_scores(
                self.reviews
                    .values()
                    .filter(|r| r.title_id == id)
                    .map(|r| r.score),
            ),
        }
    }

    fn hydrate_review(&self, id: i64, record: &ReviewRecord) -> Review {
        Review {
            id,
            title_id: record.title_id,
            title_name: self
                .titles
                .get(&record.title_id)
                .map(|t| t.name.clone())
                .unwrap_or_default(),
            author_id: record.author_id,
            author_username: self.username_of(record.author_id),
            text: record.text.clone(),
            score: record.score,
            pub_date: record.pub_date,
        }
    }

    fn hydrate_comment(&self, id: i64, record: &CommentRecord) -> Comment {
        Comment {
            id,
            review_id: record.review_id,
            author_id: record.author_id,
            author_username: self.username_of(record.author_id),
            text: record.text.clone(),
            pub_date: record.pub_date,
        }
    }

    fn username_of(&self, user_id: i64) -> String {
        self.users
            .get(&user_id)
            .map(|u| u.username.clone())
            .unwrap_or_default()
    }

    fn resolve_links(&self, draft: &TitleDraft) -> RepoResult<()> {
        if let Some(cid) = draft.category_id {
            if self.taxon::<Category>(cid).is_none() {
                return Err(DomainError::CategoryNotFound(cid.to_string()));
            }
        }
        if let Some(&gid) = draft
            .genre_ids
            .iter()
            .find(|&&gid| self.taxon::<Genre>(gid).is_none())
        {
            return Err(DomainError::GenreNotFound(gid.to_string()));
        }
        Ok(())
    }

    fn remove_reviews<F>(&mut self, predicate: F)
    where
        F: Fn(&ReviewRecord) -> bool,
    {
        let doomed: Vec<i64> = self
            .reviews
            .iter()
            .filter(|(_, r)| predicate(r))
            .map(|(&id, _)| id)
            .collect();
        for id in &doomed {
            self.reviews.remove(id);
        }
        self.comments.retain(|_, c| !doomed.contains(&c.review_id));
    }
}

/// Newest first, ties broken by id descending
fn newest_first<T>(
    items: &mut [(i64, T)],
    pub_date: impl Fn(&T) -> chrono::DateTime<Utc>,
) {
    items.sort_by(|(a_id, a), (b_id, b)| pub_date(b).cmp(&pub_date(a)).then(b_id.cmp(a_id)));
}

fn paginate<T>(items: Vec<T>, page: PageRequest) -> Page<T> {
    let total = items.len() as i64;
    let items = items
        .into_iter()
        .skip(page.offset() as usize)
        .take(page.limit() as usize)
        .collect();
    Page::new(items, total)
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Thread-safe in-memory store implementing all repository traits
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub fn user_count(&self) -> usize {
        self.state.lock().users.len()
    }

    /// Number of stored reviews
    pub fn review_count(&self) -> usize {
        self.state.lock().reviews.len()
    }

    /// Number of stored comments
    pub fn comment_count(&self) -> usize {
        self.state.lock().comments.len()
    }
}

// ============================================================================
// Users
// ============================================================================

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>> {
        Ok(self.state.lock().users.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        Ok(self
            .state
            .lock()
            .users
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        Ok(self
            .state
            .lock()
            .users
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn list(&self, search: Option<&str>, page: PageRequest) -> RepoResult<Page<User>> {
        let state = self.state.lock();
        let mut users: Vec<User> = state
            .users
            .values()
            .filter(|u| search.is_none_or(|s| contains_ignore_case(&u.username, s)))
            .cloned()
            .collect();
        users.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(paginate(users, page))
    }

    async fn create(&self, user: &NewUser) -> RepoResult<User> {
        let mut state = self.state.lock();
        state.check_user_unique(None, &user.username, &user.email)?;

        let id = state.next_id();
        let created = User {
            id,
            username: user.username.clone(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            bio: user.bio.clone(),
            role: user.role,
            is_staff: user.is_staff,
            created_at: Utc::now(),
        };
        state.users.insert(id, created.clone());
        Ok(created)
    }

    async fn update(&self, user: &User) -> RepoResult<User> {
        let mut state = self.state.lock();
        if !state.users.contains_key(&user.id) {
            return Err(DomainError::UserNotFound(user.username.clone()));
        }
        state.check_user_unique(Some(user.id), &user.username, &user.email)?;
        state.users.insert(user.id, user.clone());
        Ok(user.clone())
    }

    async fn delete(&self, id: i64) -> RepoResult<bool> {
        let mut state = self.state.lock();
        if state.users.remove(&id).is_none() {
            return Ok(false);
        }
        state.codes.remove(&id);
        state.remove_reviews(|r| r.author_id == id);
        state.comments.retain(|_, c| c.author_id != id);
        Ok(true)
    }
}

// ============================================================================
// Confirmation codes
// ============================================================================

#[async_trait]
impl ConfirmationCodeRepository for InMemoryStore {
    async fn store(&self, code: &ConfirmationCode) -> RepoResult<()> {
        let mut state = self.state.lock();
        if !state.users.contains_key(&code.user_id) {
            return Err(DomainError::UserNotFound(code.user_id.to_string()));
        }
        state.codes.insert(code.user_id, code.clone());
        Ok(())
    }

    async fn find(&self, user_id: i64) -> RepoResult<Option<ConfirmationCode>> {
        Ok(self.state.lock().codes.get(&user_id).cloned())
    }
}

// ============================================================================
// Categories and genres
// ============================================================================

#[async_trait]
impl<T: Taxon> TaxonomyRepository<T> for InMemoryStore {
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<T>> {
        let state = self.state.lock();
        let found = state
            .taxa(T::KIND)
            .find(|(_, r)| r.slug == slug)
            .map(|(&id, r)| T::from_parts(id, r.name.clone(), r.slug.clone()));
        Ok(found)
    }

    async fn find_by_slugs(&self, slugs: &[String]) -> RepoResult<Vec<T>> {
        let state = self.state.lock();
        let mut found: Vec<T> = state
            .taxa(T::KIND)
            .filter(|(_, r)| slugs.contains(&r.slug))
            .map(|(&id, r)| T::from_parts(id, r.name.clone(), r.slug.clone()))
            .collect();
        found.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(found)
    }

    async fn list(&self, search: Option<&str>, page: PageRequest) -> RepoResult<Page<T>> {
        let state = self.state.lock();
        let mut found: Vec<T> = state
            .taxa(T::KIND)
            .filter(|(_, r)| search.is_none_or(|s| contains_ignore_case(&r.name, s)))
            .map(|(&id, r)| T::from_parts(id, r.name.clone(), r.slug.clone()))
            .collect();
        found.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(paginate(found, page))
    }

    async fn create(&self, taxon: &NewTaxon) -> RepoResult<T> {
        let mut state = self.state.lock();
        if state
            .taxa(T::KIND)
            .any(|(_, r)| r.name == taxon.name || r.slug == taxon.slug)
        {
            return Err(T::KIND.already_exists());
        }

        let id = state.next_id();
        state.taxa.entry(T::KIND).or_default().insert(
            id,
            TaxonRecord {
                name: taxon.name.clone(),
                slug: taxon.slug.clone(),
            },
        );
        Ok(T::from_parts(id, taxon.name.clone(), taxon.slug.clone()))
    }

    async fn delete_by_slug(&self, slug: &str) -> RepoResult<bool> {
        let mut state = self.state.lock();
        let Some(id) = state
            .taxa(T::KIND)
            .find(|(_, r)| r.slug == slug)
            .map(|(&id, _)| id)
        else {
            return Ok(false);
        };

        if let Some(records) = state.taxa.get_mut(&T::KIND) {
            records.remove(&id);
        }
        for title in state.titles.values_mut() {
            match T::KIND {
                TaxonKind::Category => {
                    if title.category_id == Some(id) {
                        title.category_id = None;
                    }
                }
                TaxonKind::Genre => title.genre_ids.retain(|&gid| gid != id),
            }
        }
        Ok(true)
    }
}

// ============================================================================
// Titles
// ============================================================================

#[async_trait]
impl TitleRepository for InMemoryStore {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Title>> {
        let state = self.state.lock();
        Ok(state.titles.get(&id).map(|r| state.hydrate_title(id, r)))
    }

    async fn list(&self, query: &TitleQuery, page: PageRequest) -> RepoResult<Page<Title>> {
        let state = self.state.lock();
        let mut titles: Vec<Title> = state
            .titles
            .iter()
            .map(|(&id, r)| state.hydrate_title(id, r))
            .filter(|t| {
                query.name.as_deref().is_none_or(|n| t.name.contains(n))
                    && query.year.is_none_or(|y| t.year == Some(y))
                    && query
                        .genre
                        .as_deref()
                        .is_none_or(|g| t.genres.iter().any(|genre| genre.slug.contains(g)))
                    && query.category.as_deref().is_none_or(|c| {
                        t.category.as_ref().is_some_and(|cat| cat.slug.contains(c))
                    })
            })
            .collect();

        // year DESC NULLS LAST, category_id NULLS LAST, id
        titles.sort_by(|a, b| {
            let year = match (a.year, b.year) {
                (Some(x), Some(y)) => y.cmp(&x),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => std::cmp::Ordering::Equal,
            };
            let category = match (
                a.category.as_ref().map(|c| c.id),
                b.category.as_ref().map(|c| c.id),
            ) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => std::cmp::Ordering::Equal,
            };
            year.then(category).then(a.id.cmp(&b.id))
        });

        Ok(paginate(titles, page))
    }

    async fn create(&self, draft: &TitleDraft) -> RepoResult<i64> {
        let mut state = self.state.lock();
        state.resolve_links(draft)?;

        let id = state.next_id();
        state.titles.insert(
            id,
            TitleRecord {
                name: draft.name.clone(),
                year: draft.year,
                description: draft.description.clone(),
                category_id: draft.category_id,
                genre_ids: dedup(&draft.genre_ids),
            },
        );
        Ok(id)
    }

    async fn update(&self, id: i64, draft: &TitleDraft) -> RepoResult<bool> {
        let mut state = self.state.lock();
        if !state.titles.contains_key(&id) {
            return Ok(false);
        }
        state.resolve_links(draft)?;

        state.titles.insert(
            id,
            TitleRecord {
                name: draft.name.clone(),
                year: draft.year,
                description: draft.description.clone(),
                category_id: draft.category_id,
                genre_ids: dedup(&draft.genre_ids),
            },
        );
        Ok(true)
    }

    async fn delete(&self, id: i64) -> RepoResult<bool> {
        let mut state = self.state.lock();
        if state.titles.remove(&id).is_none() {
            return Ok(false);
        }
        state.remove_reviews(|r| r.title_id == id);
        Ok(true)
    }
}

fn dedup(ids: &[i64]) -> Vec<i64> {
    let mut out = Vec::with_capacity(ids.len());
    for &id in ids {
        if !out.contains(&id) {
            out.push(id);
        }
    }
    out
}

// ============================================================================
// Reviews
// ============================================================================

#[async_trait]
impl ReviewRepository for InMemoryStore {
    async fn find(&self, title_id: i64, review_id: i64) -> RepoResult<Option<Review>> {
        let state = self.state.lock();
        Ok(state
            .reviews
            .get(&review_id)
            .filter(|r| r.title_id == title_id)
            .map(|r| state.hydrate_review(review_id, r)))
    }

    async fn exists_for_author(&self, title_id: i64, author_id: i64) -> RepoResult<bool> {
        Ok(self
            .state
            .lock()
            .reviews
            .values()
            .any(|r| r.title_id == title_id && r.author_id == author_id))
    }

    async fn list_by_title(&self, title_id: i64, page: PageRequest) -> RepoResult<Page<Review>> {
        let state = self.state.lock();
        let mut rows: Vec<(i64, &ReviewRecord)> = state
            .reviews
            .iter()
            .filter(|(_, r)| r.title_id == title_id)
            .map(|(&id, r)| (id, r))
            .collect();
        newest_first(&mut rows, |r| r.pub_date);

        let reviews = rows
            .into_iter()
            .map(|(id, r)| state.hydrate_review(id, r))
            .collect();
        Ok(paginate(reviews, page))
    }

    async fn create(&self, review: &NewReview) -> RepoResult<Review> {
        let mut state = self.state.lock();
        if !state.titles.contains_key(&review.title_id) {
            return Err(DomainError::TitleNotFound(review.title_id));
        }
        if state
            .reviews
            .values()
            .any(|r| r.title_id == review.title_id && r.author_id == review.author_id)
        {
            return Err(DomainError::DuplicateReview);
        }

        let id = state.next_id();
        let record = ReviewRecord {
            title_id: review.title_id,
            author_id: review.author_id,
            text: review.text.clone(),
            score: review.score,
            pub_date: Utc::now(),
        };
        let created = state.hydrate_review(id, &record);
        state.reviews.insert(id, record);
        Ok(created)
    }

    async fn update(&self, review: &Review) -> RepoResult<Review> {
        let mut state = self.state.lock();
        let record = state
            .reviews
            .get_mut(&review.id)
            .ok_or(DomainError::ReviewNotFound(review.id))?;
        record.text = review.text.clone();
        record.score = review.score;

        let record = record.clone();
        Ok(state.hydrate_review(review.id, &record))
    }

    async fn delete(&self, id: i64) -> RepoResult<bool> {
        let mut state = self.state.lock();
        if state.reviews.remove(&id).is_none() {
            return Ok(false);
        }
        state.comments.retain(|_, c| c.review_id != id);
        Ok(true)
    }
}

// ============================================================================
// Comments
// ============================================================================

#[async_trait]
impl CommentRepository for InMemoryStore {
    async fn find(&self, review_id: i64, comment_id: i64) -> RepoResult<Option<Comment>> {
        let state = self.state.lock();
        Ok(state
            .comments
            .get(&comment_id)
            .filter(|c| c.review_id == review_id)
            .map(|c| state.hydrate_comment(comment_id, c)))
    }

    async fn list_by_review(&self, review_id: i64, page: PageRequest) -> RepoResult<Page<Comment>> {
        let state = self.state.lock();
        let mut rows: Vec<(i64, &CommentRecord)> = state
            .comments
            .iter()
            .filter(|(_, c)| c.review_id == review_id)
            .map(|(&id, c)| (id, c))
            .collect();
        newest_first(&mut rows, |c| c.pub_date);

        let comments = rows
            .into_iter()
            .map(|(id, c)| state.hydrate_comment(id, c))
            .collect();
        Ok(paginate(comments, page))
    }

    async fn create(&self, comment: &NewComment) -> RepoResult<Comment> {
        let mut state = self.state.lock();
        if !state.reviews.contains_key(&comment.review_id) {
            return Err(DomainError::ReviewNotFound(comment.review_id));
        }

        let id = state.next_id();
        let record = CommentRecord {
            review_id: comment.review_id,
            author_id: comment.author_id,
            text: comment.text.clone(),
            pub_date: Utc::now(),
        };
        let created = state.hydrate_comment(id, &record);
        state.comments.insert(id, record);
        Ok(created)
    }

    async fn update(&self, comment: &Comment) -> RepoResult<Comment> {
        let mut state = self.state.lock();
        let record = state
            .comments
            .get_mut(&comment.id)
            .ok_or(DomainError::CommentNotFound(comment.id))?;
        record.text = comment.text.clone();

        let record = record.clone();
        Ok(state.hydrate_comment(comment.id, &record))
    }

    async fn delete(&self, id: i64) -> RepoResult<bool> {
        Ok(self.state.lock().comments.remove(&id).is_some())
    }
}
