//! Review handlers
//!
//! Nested under `/titles/{title_id}`.

use axum::{extract::State, Json};
use yamdb_service::dto::{
    CreateReviewRequest, PaginatedResponse, ReviewResponse, UpdateReviewRequest,
};
use yamdb_service::ReviewService;

use crate::extractors::{ApiPath, CurrentActor, JsonBody, Pagination, ReviewPath, TitlePath};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// GET /titles/{title_id}/reviews
pub async fn list_reviews(
    State(state): State<AppState>,
    ApiPath(path): ApiPath<TitlePath>,
    Pagination(page): Pagination,
) -> ApiResult<Json<PaginatedResponse<ReviewResponse>>> {
    let service = ReviewService::new(state.service_context());
    let response = service.list(path.title_id, page).await?;
    Ok(Json(response))
}

/// POST /titles/{title_id}/reviews
pub async fn create_review(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    ApiPath(path): ApiPath<TitlePath>,
    body: JsonBody<CreateReviewRequest>,
) -> ApiResult<Created<Json<ReviewResponse>>> {
    let request = body.signed_in(&actor)?;
    let service = ReviewService::new(state.service_context());
    let response = service.create(&actor, path.title_id, request).await?;
    Ok(Created(Json(response)))
}

/// GET /titles/{title_id}/reviews/{review_id}
pub async fn get_review(
    State(state): State<AppState>,
    ApiPath(path): ApiPath<ReviewPath>,
) -> ApiResult<Json<ReviewResponse>> {
    let service = ReviewService::new(state.service_context());
    let response = service.get(path.title_id, path.review_id).await?;
    Ok(Json(response))
}

/// PATCH /titles/{title_id}/reviews/{review_id}
pub async fn update_review(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    ApiPath(path): ApiPath<ReviewPath>,
    body: JsonBody<UpdateReviewRequest>,
) -> ApiResult<Json<ReviewResponse>> {
    let request = body.signed_in(&actor)?;
    let service = ReviewService::new(state.service_context());
    let response = service
        .update(&actor, path.title_id, path.review_id, request)
        .await?;
    Ok(Json(response))
}

/// DELETE /titles/{title_id}/reviews/{review_id}
pub async fn delete_review(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    ApiPath(path): ApiPath<ReviewPath>,
) -> ApiResult<NoContent> {
    let service = ReviewService::new(state.service_context());
    service.delete(&actor, path.title_id, path.review_id).await?;
    Ok(NoContent)
}
