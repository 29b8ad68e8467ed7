//! Custom Axum extractors
//!
//! Path parameters that fail to parse reject with the 400 envelope instead
//! of axum's plain-text rejection.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::ApiError;

/// Extract a numeric record id from the path
pub struct ValidId(pub i32);

impl<S> FromRequestParts<S> for ValidId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state).await?;

        let id = raw.parse::<i32>().map_err(|_| ApiError::BadRequest {
            reason: format!("'{}' is not a valid id", raw),
        })?;

        Ok(Self(id))
    }
}

/// Extract a page number from the path. Zero is accepted here and
/// treated as an empty page by the handler.
pub struct ValidPage(pub usize);

impl<S> FromRequestParts<S> for ValidPage
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state).await?;

        let page = raw.parse::<usize>().map_err(|_| ApiError::BadRequest {
            reason: format!("'{}' is not a valid page number", raw),
        })?;

        Ok(Self(page))
    }
}

/// Extract a search term from the path. A segment that does not decode
/// to UTF-8 rejects with the 400 envelope.
pub struct SearchTerm(pub String);

impl<S> FromRequestParts<S> for SearchTerm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(term): Path<String> = Path::from_request_parts(parts, state).await?;
        Ok(Self(term))
    }
}

/// JSON body whose rejection renders as the 400 envelope
#[derive(axum::extract::FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
