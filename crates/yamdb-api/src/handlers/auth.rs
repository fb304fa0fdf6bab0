//! Authentication handlers
//!
//! Two-step handshake: signup mails a confirmation code, token exchanges it
//! for a bearer token.

use axum::{extract::State, Json};
use yamdb_service::dto::{SignupRequest, SignupResponse, TokenRequest, TokenResponse};
use yamdb_service::AuthService;

use crate::extractors::ValidatedJson;
use crate::response::ApiResult;
use crate::state::AppState;

/// Register (or re-request a code for) a username and email pair
///
/// POST /auth/signup
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SignupRequest>,
) -> ApiResult<Json<SignupResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.signup(request).await?;
    Ok(Json(response))
}

/// Exchange a confirmation code for a bearer token
///
/// POST /auth/token
pub async fn token(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<TokenRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.token(request).await?;
    Ok(Json(response))
}
