//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CreateCommentRequest, CreateReviewRequest, CreateTaxonRequest, CreateTitleRequest,
    CreateUserRequest, SignupRequest, TokenRequest, UpdateCommentRequest, UpdateProfileRequest,
    UpdateReviewRequest, UpdateTitleRequest, UpdateUserRequest,
};

pub use responses::{
    CommentResponse, HealthChecks, HealthResponse, PaginatedResponse, ReadinessResponse,
    ReviewResponse, SignupResponse, TaxonResponse, TitleResponse, TokenResponse, UserResponse,
};
