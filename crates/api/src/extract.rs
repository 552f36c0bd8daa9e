//! Extractors that reject with [`AppError`] instead of Axum's plain-text
//! rejections, so malformed input gets the same JSON error body as every
//! other 400.

use std::collections::HashMap;
use std::convert::Infallible;

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use catalog_core::types::DbId;

use crate::error::AppError;

/// JSON request body. Any parse or content-type failure is a 400.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// A single `{id}` path segment parsed as a [`DbId`].
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub DbId);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        raw.parse::<DbId>()
            .map(Self)
            .map_err(|_| AppError::BadRequest(format!("Invalid id: {raw}")))
    }
}

/// Query string that never rejects.
///
/// Repeated keys keep their first value; an undecodable query string is
/// treated as empty. Handlers decide what each value means.
#[derive(Debug, Clone, Default)]
pub struct LenientQuery(HashMap<String, String>);

impl LenientQuery {
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut params = HashMap::new();
        for (key, value) in pairs {
            params.entry(key).or_insert(value);
        }
        Self(params)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }
}

impl<S> FromRequestParts<S> for LenientQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let pairs = match Query::<Vec<(String, String)>>::try_from_uri(&parts.uri) {
            Ok(Query(pairs)) => pairs,
            Err(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "Ignoring malformed query string");
                Vec::new()
            }
        };
        Ok(Self::from_pairs(pairs))
    }
}
