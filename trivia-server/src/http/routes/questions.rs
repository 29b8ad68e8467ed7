//! Question endpoints: paginated listing, lookup, create and delete

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use trivia_core::{paginate, NewQuestion, PageRequest, Question, ValidationError};

use super::FlexibleId;
use crate::http::error::ApiError;
use crate::http::extractors::{ApiJson, ValidId, ValidPage};
use crate::http::server::AppState;

/// Create question request. Every field is required; missing ones are
/// reported as unprocessable rather than as a body rejection.
#[derive(Debug, Default, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<FlexibleId>,
    pub difficulty: Option<FlexibleId>,
}

impl TryFrom<CreateQuestionRequest> for NewQuestion {
    type Error = ValidationError;

    fn try_from(req: CreateQuestionRequest) -> Result<Self, Self::Error> {
        let category = numeric_field("category", req.category.as_ref())?;
        let difficulty = numeric_field("difficulty", req.difficulty.as_ref())?;
        NewQuestion::from_fields(
            req.question.as_deref(),
            req.answer.as_deref(),
            category,
            difficulty,
        )
    }
}

fn numeric_field(
    field: &'static str,
    value: Option<&FlexibleId>,
) -> Result<Option<i32>, ValidationError> {
    value
        .map(|v| {
            v.to_i32().ok_or(ValidationError::InvalidFormat {
                field,
                reason: "must be an integer".into(),
            })
        })
        .transpose()
}

/// One page of questions
#[derive(Serialize)]
pub struct PageResponse {
    pub success: bool,
    #[serde(rename = "Questions")]
    pub questions: Vec<Question>,
    #[serde(rename = "Questions per page")]
    pub questions_per_page: usize,
    #[serde(rename = "Total questions")]
    pub total_questions: usize,
    #[serde(rename = "Total pages")]
    pub total_pages: usize,
    #[serde(rename = "current categories")]
    pub current_categories: Vec<String>,
}

/// Single question response
#[derive(Serialize)]
pub struct QuestionResponse {
    pub success: bool,
    #[serde(rename = "Question")]
    pub question: Question,
}

/// Delete response
#[derive(Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    #[serde(rename = "deleted question")]
    pub deleted_question: i32,
    /// Questions remaining after the delete
    pub questions: i64,
}

/// Create response
#[derive(Serialize)]
pub struct CreateResponse {
    pub success: bool,
    #[serde(rename = "The new question")]
    pub new_question: Question,
    #[serde(rename = "total questions")]
    pub total_questions: i64,
}

/// GET /pages/{n}/questions - one page of questions ordered by id
async fn list_page(
    State(state): State<Arc<AppState>>,
    ValidPage(page_num): ValidPage,
) -> Result<Json<PageResponse>, ApiError> {
    let all = state.questions.list().await?;
    let page = paginate(all, PageRequest::new(page_num, state.questions_per_page));

    if page.is_empty() {
        tracing::debug!(
            page = page_num,
            total = page.total,
            total_pages = page.total_pages(),
            "page out of range"
        );
        return Err(ApiError::not_found("page", page_num));
    }

    let categories = state.categories.list().await?;
    let total_pages = page.total_pages();

    Ok(Json(PageResponse {
        success: true,
        questions_per_page: page.items.len(),
        total_questions: page.total,
        total_pages,
        questions: page.items,
        current_categories: categories.into_iter().map(|c| c.kind).collect(),
    }))
}

/// GET /questions/{id} - get a single question
async fn get_question(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<QuestionResponse>, ApiError> {
    let question = state
        .questions
        .get(id)
        .await?
        .ok_or_else(|| ApiError::not_found("question", id))?;

    Ok(Json(QuestionResponse {
        success: true,
        question,
    }))
}

/// DELETE /questions/{id} - delete a question
async fn delete_question(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<DeleteResponse>, ApiError> {
    let existed = state
        .questions
        .delete(id)
        .await
        .map_err(ApiError::WriteFailed)?;

    if !existed {
        return Err(ApiError::not_found("question", id));
    }

    let remaining = state.questions.count().await?;
    tracing::info!(id, remaining, "question deleted");

    Ok(Json(DeleteResponse {
        success: true,
        deleted_question: id,
        questions: remaining,
    }))
}

/// POST /questions - create a question
async fn create_question(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<CreateQuestionRequest>,
) -> Result<Json<CreateResponse>, ApiError> {
    let new_question = NewQuestion::try_from(req)?;
    let created = state
        .questions
        .create(new_question)
        .await
        .map_err(ApiError::WriteFailed)?;

    let total = state.questions.count().await?;
    tracing::info!(id = created.id, total, "question created");

    Ok(Json(CreateResponse {
        success: true,
        new_question: created,
        total_questions: total,
    }))
}

/// Question routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/pages/{page}/questions", get(list_page))
        .route("/questions", post(create_question))
        .route("/questions/{id}", get(get_question).delete(delete_question))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: serde_json::Value) -> CreateQuestionRequest {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn accepts_string_category() {
        let req = request(serde_json::json!({
            "question": "Q",
            "answer": "A",
            "category": "3",
            "difficulty": 2
        }));
        let new = NewQuestion::try_from(req).unwrap();
        assert_eq!(new.category(), 3);
        assert_eq!(new.difficulty(), 2);
    }

    #[test]
    fn missing_field_is_validation_error() {
        let req = request(serde_json::json!({"question": "Q", "answer": "A", "category": 1}));
        let err = NewQuestion::try_from(req).unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "difficulty" });
    }

    #[test]
    fn non_numeric_category_is_invalid_format() {
        let req = request(serde_json::json!({
            "question": "Q",
            "answer": "A",
            "category": "science",
            "difficulty": 1
        }));
        let err = NewQuestion::try_from(req).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidFormat {
                field: "category",
                ..
            }
        ));
    }
}
