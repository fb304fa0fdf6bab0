//! Comment handlers
//!
//! Nested under `/titles/{title_id}/reviews/{review_id}`.

use axum::{extract::State, Json};
use yamdb_service::dto::{
    CommentResponse, CreateCommentRequest, PaginatedResponse, UpdateCommentRequest,
};
use yamdb_service::CommentService;

use crate::extractors::{ApiPath, CommentPath, CurrentActor, JsonBody, Pagination, ReviewPath};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// GET /titles/{title_id}/reviews/{review_id}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    ApiPath(path): ApiPath<ReviewPath>,
    Pagination(page): Pagination,
) -> ApiResult<Json<PaginatedResponse<CommentResponse>>> {
    let service = CommentService::new(state.service_context());
    let response = service.list(path.title_id, path.review_id, page).await?;
    Ok(Json(response))
}

/// POST /titles/{title_id}/reviews/{review_id}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    ApiPath(path): ApiPath<ReviewPath>,
    body: JsonBody<CreateCommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let request = body.signed_in(&actor)?;
    let service = CommentService::new(state.service_context());
    let response = service
        .create(&actor, path.title_id, path.review_id, request)
        .await?;
    Ok(Created(Json(response)))
}

/// GET /titles/{title_id}/reviews/{review_id}/comments/{comment_id}
pub async fn get_comment(
    State(state): State<AppState>,
    ApiPath(path): ApiPath<CommentPath>,
) -> ApiResult<Json<CommentResponse>> {
    let service = CommentService::new(state.service_context());
    let response = service
        .get(path.title_id, path.review_id, path.comment_id)
        .await?;
    Ok(Json(response))
}

/// PATCH /titles/{title_id}/reviews/{review_id}/comments/{comment_id}
pub async fn update_comment(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    ApiPath(path): ApiPath<CommentPath>,
    body: JsonBody<UpdateCommentRequest>,
) -> ApiResult<Json<CommentResponse>> {
    let request = body.signed_in(&actor)?;
    let service = CommentService::new(state.service_context());
    let response = service
        .update(&actor, path.title_id, path.review_id, path.comment_id, request)
        .await?;
    Ok(Json(response))
}

/// DELETE /titles/{title_id}/reviews/{review_id}/comments/{comment_id}
pub async fn delete_comment(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    ApiPath(path): ApiPath<CommentPath>,
) -> ApiResult<NoContent> {
    let service = CommentService::new(state.service_context());
    service
        .delete(&actor, path.title_id, path.review_id, path.comment_id)
        .await?;
    Ok(NoContent)
}
