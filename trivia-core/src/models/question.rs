//! Trivia questions

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Lowest allowed difficulty score
pub const MIN_DIFFICULTY: i32 = 1;

/// Highest allowed difficulty score
pub const MAX_DIFFICULTY: i32 = 5;

/// A stored question. The id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    /// Category id
    pub category: i32,
    pub difficulty: i32,
}

/// Validated input for creating a question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    question: String,
    answer: String,
    category: i32,
    difficulty: i32,
}

impl NewQuestion {
    /// Create a new question from its four fields.
    ///
    /// # Rules
    /// - Question and answer non-empty (after trimming whitespace)
    /// - Category id positive
    /// - Difficulty within 1..=5
    ///
    /// # Example
    /// ```
    /// use trivia_core::NewQuestion;
    ///
    /// assert!(NewQuestion::new("What is H2O?", "Water", 1, 1).is_ok());
    /// assert!(NewQuestion::new("   ", "Water", 1, 1).is_err());
    /// assert!(NewQuestion::new("What is H2O?", "Water", 1, 9).is_err());
    /// ```
    pub fn new(
        question: &str,
        answer: &str,
        category: i32,
        difficulty: i32,
    ) -> Result<Self, ValidationError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(ValidationError::Empty { field: "question" });
        }

        let answer = answer.trim();
        if answer.is_empty() {
            return Err(ValidationError::Empty { field: "answer" });
        }

        if category < 1 {
            return Err(ValidationError::OutOfRange {
                field: "category",
                value: category.into(),
                min: 1,
                max: i32::MAX.into(),
            });
        }

        if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&difficulty) {
            return Err(ValidationError::OutOfRange {
                field: "difficulty",
                value: difficulty.into(),
                min: MIN_DIFFICULTY.into(),
                max: MAX_DIFFICULTY.into(),
            });
        }

        Ok(Self {
            question: question.to_owned(),
            answer: answer.to_owned(),
            category,
            difficulty,
        })
    }

    /// Build from optional request fields, reporting the first missing one.
    pub fn from_fields(
        question: Option<&str>,
        answer: Option<&str>,
        category: Option<i32>,
        difficulty: Option<i32>,
    ) -> Result<Self, ValidationError> {
        let question = question.ok_or(ValidationError::Missing { field: "question" })?;
        let answer = answer.ok_or(ValidationError::Missing { field: "answer" })?;
        let category = category.ok_or(ValidationError::Missing { field: "category" })?;
        let difficulty = difficulty.ok_or(ValidationError::Missing {
            field: "difficulty",
        })?;
        Self::new(question, answer, category, difficulty)
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn category(&self) -> i32 {
        self.category
    }

    pub fn difficulty(&self) -> i32 {
        self.difficulty
    }

    /// Attach a store-assigned id.
    pub fn into_question(self, id: i32) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_text() {
        let q = NewQuestion::new("  Who painted the Mona Lisa? ", " Da Vinci ", 2, 3).unwrap();
        assert_eq!(q.question(), "Who painted the Mona Lisa?");
        assert_eq!(q.answer(), "Da Vinci");
    }

    #[test]
    fn rejects_empty_answer() {
        let err = NewQuestion::new("Question?", "", 1, 1).unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "answer" });
    }

    #[test]
    fn rejects_non_positive_category() {
        let err = NewQuestion::new("Question?", "Answer", 0, 1).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::OutOfRange {
                field: "category",
                ..
            }
        ));
    }

    #[test]
    fn difficulty_bounds() {
        assert!(NewQuestion::new("Q", "A", 1, 1).is_ok());
        assert!(NewQuestion::new("Q", "A", 1, 5).is_ok());
        assert!(NewQuestion::new("Q", "A", 1, 0).is_err());
        assert!(NewQuestion::new("Q", "A", 1, 6).is_err());
    }

    #[test]
    fn from_fields_reports_missing() {
        let err = NewQuestion::from_fields(Some("Q"), None, Some(1), Some(1)).unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "answer" });

        let err = NewQuestion::from_fields(Some("Q"), Some("A"), Some(1), None).unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "difficulty" });
    }

    #[test]
    fn into_question_keeps_fields() {
        let q = NewQuestion::new("Q", "A", 4, 2).unwrap().into_question(17);
        assert_eq!(
            q,
            Question {
                id: 17,
                question: "Q".into(),
                answer: "A".into(),
                category: 4,
                difficulty: 2,
            }
        );
    }

    #[test]
    fn serialized_shape() {
        let q = NewQuestion::new("Q", "A", 4, 2).unwrap().into_question(1);
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "question": "Q",
                "answer": "A",
                "category": 4,
                "difficulty": 2
            })
        );
    }
}
