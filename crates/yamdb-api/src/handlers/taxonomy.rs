//! Category and genre handlers
//!
//! One set of generic handlers, instantiated per taxon type in the router.

use axum::{extract::State, Json};
use yamdb_core::{Action, Resource};
use yamdb_service::dto::{CreateTaxonRequest, PaginatedResponse, TaxonResponse};
use yamdb_service::services::CatalogTaxon;
use yamdb_service::TaxonomyService;

use crate::extractors::{ApiPath, ApiQuery, CurrentActor, JsonBody, Pagination, SearchParams, SlugPath};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// GET /categories, /genres
pub async fn list<T: CatalogTaxon>(
    State(state): State<AppState>,
    Pagination(page): Pagination,
    ApiQuery(search): ApiQuery<SearchParams>,
) -> ApiResult<Json<PaginatedResponse<TaxonResponse>>> {
    let service = TaxonomyService::<T>::new(state.service_context());
    let response = service.list(search.term(), page).await?;
    Ok(Json(response))
}

/// POST /categories, /genres
pub async fn create<T: CatalogTaxon>(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    body: JsonBody<CreateTaxonRequest>,
) -> ApiResult<Created<Json<TaxonResponse>>> {
    let request = body.authorized(&actor, Action::Create, Resource::Catalog)?;
    let service = TaxonomyService::<T>::new(state.service_context());
    let response = service.create(&actor, request).await?;
    Ok(Created(Json(response)))
}

/// DELETE /categories/{slug}, /genres/{slug}
pub async fn delete<T: CatalogTaxon>(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    ApiPath(path): ApiPath<SlugPath>,
) -> ApiResult<NoContent> {
    let service = TaxonomyService::<T>::new(state.service_context());
    service.delete(&actor, &path.slug).await?;
    Ok(NoContent)
}
