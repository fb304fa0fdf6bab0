//! Authentication extractor
//!
//! Resolves the `Authorization: Bearer` header into the [`Actor`] every
//! service call takes.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use yamdb_common::AppError;
use yamdb_core::Actor;

use crate::response::ApiError;
use crate::state::AppState;

/// The caller of the current request
///
/// A request without an Authorization header is anonymous. A header that is
/// present but malformed, carries an invalid or expired token, or names a
/// user that no longer exists is rejected with 401.
#[derive(Debug, Clone)]
pub struct CurrentActor(pub Actor);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentActor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let bearer = match TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
            .await
        {
            Ok(TypedHeader(Authorization(bearer))) => bearer,
            Err(rejection) if rejection.is_missing() => return Ok(CurrentActor(Actor::Anonymous)),
            Err(rejection) => {
                tracing::debug!(error = %rejection, "Malformed authorization header");
                return Err(ApiError::InvalidAuthFormat);
            }
        };

        let app_state = AppState::from_ref(state);

        let claims = app_state
            .jwt_service()
            .validate_access_token(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Invalid access token");
                e
            })?;
        let user_id = claims.user_id()?;

        // Roles are read from storage, never from the token
        let user = app_state
            .service_context()
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| {
                tracing::warn!(user_id, "Token subject no longer exists");
                AppError::InvalidToken
            })?;

        Ok(CurrentActor(Actor::from(&user)))
    }
}
