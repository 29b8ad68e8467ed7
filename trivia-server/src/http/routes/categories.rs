//! Category endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use trivia_core::{Category, Question};

use crate::http::error::ApiError;
use crate::http::extractors::ValidId;
use crate::http::server::AppState;

/// Category list response
#[derive(Serialize)]
pub struct CategoryListResponse {
    pub success: bool,
    pub categories: Vec<Category>,
    #[serde(rename = "total categories")]
    pub total_categories: usize,
}

/// Single category response
#[derive(Serialize)]
pub struct CategoryResponse {
    pub success: bool,
    pub category: Category,
}

/// Questions in one category
#[derive(Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub category: Vec<Question>,
}

/// GET /categories - list all categories
async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CategoryListResponse>, ApiError> {
    let categories = state.categories.list().await?;
    if categories.is_empty() {
        return Err(ApiError::not_found("category", "*"));
    }

    Ok(Json(CategoryListResponse {
        success: true,
        total_categories: categories.len(),
        categories,
    }))
}

/// GET /categories/{id} - get a single category
async fn get_category(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<CategoryResponse>, ApiError> {
    let category = state
        .categories
        .get(id)
        .await?
        .ok_or_else(|| ApiError::not_found("category", id))?;

    Ok(Json(CategoryResponse {
        success: true,
        category,
    }))
}

/// GET /categories/{id}/questions/ - questions in a category
async fn category_questions(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let questions = state.questions.list_by_category(id).await?;
    if questions.is_empty() {
        return Err(ApiError::not_found("category questions", id));
    }

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        category: questions,
    }))
}

/// Category routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{id}", get(get_category))
        .route("/categories/{id}/questions", get(category_questions))
        .route("/categories/{id}/questions/", get(category_questions))
}
