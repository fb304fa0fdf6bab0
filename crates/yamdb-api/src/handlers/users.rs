//! User handlers
//!
//! Self-profile endpoints plus the administrator's user directory.

use axum::{extract::State, Json};
use yamdb_core::{Action, Resource};
use yamdb_service::dto::{
    CreateUserRequest, PaginatedResponse, UpdateProfileRequest, UpdateUserRequest, UserResponse,
};
use yamdb_service::UserService;

use crate::extractors::{
    ApiPath, ApiQuery, CurrentActor, JsonBody, Pagination, SearchParams, UsernamePath,
};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Get current user
///
/// GET /users/me
pub async fn get_me(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.me(&actor).await?;
    Ok(Json(response))
}

/// Update current user; a `role` in the body is ignored
///
/// PATCH /users/me
pub async fn update_me(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    body: JsonBody<UpdateProfileRequest>,
) -> ApiResult<Json<UserResponse>> {
    let request = body.authorized(&actor, Action::Update, Resource::OwnProfile)?;
    let service = UserService::new(state.service_context());
    let response = service.update_me(&actor, request).await?;
    Ok(Json(response))
}

/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Pagination(page): Pagination,
    ApiQuery(search): ApiQuery<SearchParams>,
) -> ApiResult<Json<PaginatedResponse<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let response = service.list(&actor, search.term(), page).await?;
    Ok(Json(response))
}

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    body: JsonBody<CreateUserRequest>,
) -> ApiResult<Created<Json<UserResponse>>> {
    let request = body.authorized(&actor, Action::Create, Resource::UserDirectory)?;
    let service = UserService::new(state.service_context());
    let response = service.create(&actor, request).await?;
    Ok(Created(Json(response)))
}

/// GET /users/{username}
pub async fn get_user(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    ApiPath(path): ApiPath<UsernamePath>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get(&actor, &path.username).await?;
    Ok(Json(response))
}

/// PATCH /users/{username}
pub async fn update_user(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    ApiPath(path): ApiPath<UsernamePath>,
    body: JsonBody<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let request = body.authorized(&actor, Action::Update, Resource::UserDirectory)?;
    let service = UserService::new(state.service_context());
    let response = service.update(&actor, &path.username, request).await?;
    Ok(Json(response))
}

/// DELETE /users/{username}
pub async fn delete_user(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    ApiPath(path): ApiPath<UsernamePath>,
) -> ApiResult<NoContent> {
    let service = UserService::new(state.service_context());
    service.delete(&actor, &path.username).await?;
    Ok(NoContent)
}
