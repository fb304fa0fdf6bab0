//! JSON body for permission-gated writes
//!
//! Deserialization failures are held back until the caller's permissions
//! are known, so an unauthorized caller sees 401/403 rather than a body
//! error. Field validation happens in the services after their policy check.

use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use yamdb_core::{require, Action, Actor, DomainError, Resource};

use super::validated::body_error;
use crate::response::{ApiError, ApiResult};

/// JSON request body whose parse error is reported after authorization
#[derive(Debug)]
pub struct JsonBody<T>(Result<T, ApiError>);

impl<T> JsonBody<T> {
    /// The parsed body, once `actor` may perform `action` on `resource`
    pub fn authorized(self, actor: &Actor, action: Action, resource: Resource) -> ApiResult<T> {
        match self.0 {
            Ok(value) => Ok(value),
            Err(e) => {
                require(actor, action, resource)?;
                Err(e)
            }
        }
    }

    /// The parsed body, once the caller is known to be signed in.
    ///
    /// For writes whose ownership check needs the stored row.
    pub fn signed_in(self, actor: &Actor) -> ApiResult<T> {
        match self.0 {
            Ok(value) => Ok(value),
            Err(_) if !actor.is_authenticated() => Err(DomainError::NotAuthenticated.into()),
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Json::<T>::from_request(req, state)
            .await
            .map(|Json(value)| value)
            .map_err(body_error);
        Ok(Self(body))
    }
}
