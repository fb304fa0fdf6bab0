//! Title handlers

use axum::{extract::State, Json};
use yamdb_core::traits::TitleQuery;
use yamdb_core::{Action, Resource};
use yamdb_service::dto::{CreateTitleRequest, PaginatedResponse, TitleResponse, UpdateTitleRequest};
use yamdb_service::TitleService;

use crate::extractors::{
    ApiPath, ApiQuery, CurrentActor, JsonBody, Pagination, TitleFilterParams, TitlePath,
};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List titles filtered by `name`, `year`, `genre` and `category`
///
/// GET /titles
pub async fn list_titles(
    State(state): State<AppState>,
    Pagination(page): Pagination,
    ApiQuery(filters): ApiQuery<TitleFilterParams>,
) -> ApiResult<Json<PaginatedResponse<TitleResponse>>> {
    let service = TitleService::new(state.service_context());
    let response = service.list(&TitleQuery::from(filters), page).await?;
    Ok(Json(response))
}

/// POST /titles
pub async fn create_title(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    body: JsonBody<CreateTitleRequest>,
) -> ApiResult<Created<Json<TitleResponse>>> {
    let request = body.authorized(&actor, Action::Create, Resource::Catalog)?;
    let service = TitleService::new(state.service_context());
    let response = service.create(&actor, request).await?;
    Ok(Created(Json(response)))
}

/// GET /titles/{title_id}
pub async fn get_title(
    State(state): State<AppState>,
    ApiPath(path): ApiPath<TitlePath>,
) -> ApiResult<Json<TitleResponse>> {
    let service = TitleService::new(state.service_context());
    let response = service.get(path.title_id).await?;
    Ok(Json(response))
}

/// PATCH /titles/{title_id}
pub async fn update_title(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    ApiPath(path): ApiPath<TitlePath>,
    body: JsonBody<UpdateTitleRequest>,
) -> ApiResult<Json<TitleResponse>> {
    let request = body.authorized(&actor, Action::Update, Resource::Catalog)?;
    let service = TitleService::new(state.service_context());
    let response = service.update(&actor, path.title_id, request).await?;
    Ok(Json(response))
}

/// DELETE /titles/{title_id}
pub async fn delete_title(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    ApiPath(path): ApiPath<TitlePath>,
) -> ApiResult<NoContent> {
    let service = TitleService::new(state.service_context());
    service.delete(&actor, path.title_id).await?;
    Ok(NoContent)
}
