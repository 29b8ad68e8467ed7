//! Quiz rounds
//!
//! GET draws from every question. POST narrows to `quiz_category`
//! (a number, a numeric string, or `{"id", "type"}`; id 0 means all
//! categories) and excludes `previous_questions`.

use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use trivia_core::{Question, RoundSpec, ValidationError};

use super::FlexibleId;
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Category selector in a quiz request
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum QuizCategory {
    /// `{"id": .., "type": ..}`; the label is ignored
    Tagged { id: FlexibleId },
    Id(FlexibleId),
}

impl QuizCategory {
    /// Category id to filter by; None selects all categories.
    fn filter(&self) -> Result<Option<i32>, ValidationError> {
        let id = match self {
            Self::Tagged { id, .. } | Self::Id(id) => id,
        };

        match id.to_i32() {
            Some(0) => Ok(None),
            Some(id) => Ok(Some(id)),
            None => Err(ValidationError::InvalidFormat {
                field: "quiz_category",
                reason: "id must be an integer".into(),
            }),
        }
    }
}

/// POST /quizzes body
#[derive(Debug, Default, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
    #[serde(default)]
    pub previous_questions: Vec<i32>,
    /// Cap on the round length
    #[serde(default)]
    pub max_questions: Option<usize>,
}

/// Quiz round response
#[derive(Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub total_questions: usize,
    pub questions: Vec<Question>,
}

fn respond(candidates: &[Question], round: &RoundSpec) -> Json<QuizResponse> {
    let questions = round.draw(candidates, &mut rand::thread_rng());
    Json(QuizResponse {
        success: true,
        total_questions: questions.len(),
        questions,
    })
}

/// GET /quizzes - a round over every question
async fn quiz_all(State(state): State<Arc<AppState>>) -> Result<Json<QuizResponse>, ApiError> {
    let candidates = state.questions.list().await?;
    Ok(respond(&candidates, &RoundSpec::default()))
}

/// POST /quizzes - a round for one category, skipping previous questions
async fn quiz_round(
    State(state): State<Arc<AppState>>,
    body: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Json<QuizResponse>, ApiError> {
    // Malformed quiz input is unprocessable, not a bad request
    let Json(req) = body.map_err(|rejection| {
        ApiError::Validation(ValidationError::InvalidFormat {
            field: "quiz request",
            reason: rejection.body_text(),
        })
    })?;

    let category = req
        .quiz_category
        .as_ref()
        .map(QuizCategory::filter)
        .transpose()?
        .flatten();

    tracing::debug!(
        category = ?category,
        previous = req.previous_questions.len(),
        "quiz round requested"
    );

    let candidates = match category {
        Some(id) => state.questions.list_by_category(id).await?,
        None => state.questions.list().await?,
    };

    let round = RoundSpec::new(req.previous_questions, req.max_questions);
    Ok(respond(&candidates, &round))
}

/// Quiz routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/quizzes", get(quiz_all).post(quiz_round))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> QuizRequest {
        serde_json::from_str(json).unwrap()
    }

    fn filter(req: &QuizRequest) -> Option<i32> {
        req.quiz_category
            .as_ref()
            .and_then(|c| c.filter().unwrap())
    }

    #[test]
    fn category_as_object() {
        let req = parse(r#"{"quiz_category": {"type": "Science", "id": "1"}, "previous_questions": [4]}"#);
        assert_eq!(filter(&req), Some(1));
        assert_eq!(req.previous_questions, vec![4]);
    }

    #[test]
    fn category_as_number() {
        let req = parse(r#"{"quiz_category": 3}"#);
        assert_eq!(filter(&req), Some(3));
        assert!(req.previous_questions.is_empty());
    }

    #[test]
    fn category_zero_means_all() {
        let req = parse(r#"{"quiz_category": {"type": "click", "id": 0}}"#);
        assert_eq!(filter(&req), None);
    }

    #[test]
    fn missing_category_means_all() {
        let req = parse("{}");
        assert_eq!(filter(&req), None);
        assert_eq!(req.max_questions, None);
    }

    #[test]
    fn non_numeric_category_rejected() {
        let req = parse(r#"{"quiz_category": "science"}"#);
        assert!(req.quiz_category.unwrap().filter().is_err());
    }
}
