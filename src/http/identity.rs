//! Caller identity extraction.
//!
//! Authentication and identity issuance are external collaborators; the
//! cart subsystem only needs a resolved [`CustomerId`] per request. This
//! extractor stands in for `resolve_customer(auth_token)`: it reads the
//! `Authorization: Token <token>` header and keys the customer by the
//! token value. Swapping in a real token service changes only this file.

use crate::http::error::ApiError;
use crate::model::CustomerId;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

const SCHEME: &str = "Token ";

/// The authenticated caller, resolved once per request.
#[derive(Debug, Clone)]
pub struct Caller(pub CustomerId);

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                ApiError::Unauthorized("Authentication credentials were not provided.".to_string())
            })?;

        let token = header
            .strip_prefix(SCHEME)
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ApiError::Unauthorized("Invalid token header.".to_string()))?;

        Ok(Caller(CustomerId::from(token)))
    }
}
