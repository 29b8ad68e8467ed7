//! Substring search over question text

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use trivia_core::Question;

use crate::http::error::ApiError;
use crate::http::extractors::SearchTerm;
use crate::http::server::AppState;

/// Search results
#[derive(Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub results: Vec<Question>,
    #[serde(rename = "number of result found")]
    pub found: usize,
}

/// GET|POST /search/{term} - case-insensitive substring search
///
/// No match is a 404, not an empty success.
async fn search(
    State(state): State<Arc<AppState>>,
    SearchTerm(term): SearchTerm,
) -> Result<Json<SearchResponse>, ApiError> {
    let results = state.questions.search(&term).await?;
    if results.is_empty() {
        return Err(ApiError::not_found("search results", term));
    }

    Ok(Json(SearchResponse {
        success: true,
        found: results.len(),
        results,
    }))
}

/// Search routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/search/{term}", get(search).post(search))
}
