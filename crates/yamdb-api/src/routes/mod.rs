//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, post},
    Router,
};
use yamdb_core::{Category, Genre};

use crate::handlers::{auth, comments, health, reviews, taxonomy, titles, users};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(taxonomy_routes())
        .merge(title_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(auth::signup))
        .route("/auth/token", post(auth::token))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/me", get(users::get_me).patch(users::update_me))
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/:username",
            get(users::get_user)
                .patch(users::update_user)
                .delete(users::delete_user),
        )
}

/// Category and genre routes
fn taxonomy_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/categories",
            get(taxonomy::list::<Category>).post(taxonomy::create::<Category>),
        )
        .route(
            "/categories/:slug",
            delete(taxonomy::delete::<Category>),
        )
        .route(
            "/genres",
            get(taxonomy::list::<Genre>).post(taxonomy::create::<Genre>),
        )
        .route("/genres/:slug", delete(taxonomy::delete::<Genre>))
}

/// Title routes with nested reviews and comments
fn title_routes() -> Router<AppState> {
    Router::new()
        .route("/titles", get(titles::list_titles).post(titles::create_title))
        .route(
            "/titles/:title_id",
            get(titles::get_title)
                .patch(titles::update_title)
                .delete(titles::delete_title),
        )
        .route(
            "/titles/:title_id/reviews",
            get(reviews::list_reviews).post(reviews::create_review),
        )
        .route(
            "/titles/:title_id/reviews/:review_id",
            get(reviews::get_review)
                .patch(reviews::update_review)
                .delete(reviews::delete_review),
        )
        .route(
            "/titles/:title_id/reviews/:review_id/comments",
            get(comments::list_comments).post(comments::create_comment),
        )
        .route(
            "/titles/:title_id/reviews/:review_id/comments/:comment_id",
            get(comments::get_comment)
                .patch(comments::update_comment)
                .delete(comments::delete_comment),
        )
}
