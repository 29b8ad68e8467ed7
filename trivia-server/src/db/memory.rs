//! In-process store
//!
//! Implements the same accessor traits as `PgStore`. Used by the router
//! tests and by `trivia serve --in-memory`. Ids are assigned from a
//! counter and never reused; creating a question for an unknown category
//! fails like the Postgres foreign key does.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use trivia_core::{Category, NewQuestion, Question};

use super::repos::{CategoryStore, DbError, QuestionStore};
use super::seed::{CATEGORIES, SAMPLE_QUESTIONS};

#[derive(Debug, Default)]
struct Tables {
    categories: BTreeMap<i32, Category>,
    questions: BTreeMap<i32, Question>,
    last_question_id: i32,
}

/// Store backed by ordered maps behind an async lock
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Empty store: no categories, no questions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with the given category labels, ids 1.. in order.
    pub fn with_categories<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tables: RwLock::new(Tables::with_categories(labels)),
        }
    }

    /// Store holding the standard categories and sample questions.
    pub fn seeded() -> Self {
        let mut tables = Tables::with_categories(CATEGORIES.iter().copied());
        for (question, answer, category, difficulty) in SAMPLE_QUESTIONS {
            tables.last_question_id += 1;
            let id = tables.last_question_id;
            tables.questions.insert(
                id,
                Question {
                    id,
                    question: (*question).to_owned(),
                    answer: (*answer).to_owned(),
                    category: *category,
                    difficulty: *difficulty,
                },
            );
        }

        Self {
            tables: RwLock::new(tables),
        }
    }
}

impl Tables {
    fn with_categories<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let categories = labels
            .into_iter()
            .zip(1..)
            .map(|(label, id)| (id, Category::new(id, label)))
            .collect();

        Self {
            categories,
            ..Self::default()
        }
    }
}

#[async_trait]
impl CategoryStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Category>, DbError> {
        let tables = self.tables.read().await;
        Ok(tables.categories.values().cloned().collect())
    }

    async fn get(&self, id: i32) -> Result<Option<Category>, DbError> {
        let tables = self.tables.read().await;
        Ok(tables.categories.get(&id).cloned())
    }
}

#[async_trait]
impl QuestionStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Question>, DbError> {
        let tables = self.tables.read().await;
        Ok(tables.questions.values().cloned().collect())
    }

    async fn count(&self) -> Result<i64, DbError> {
        let tables = self.tables.read().await;
        Ok(tables.questions.len() as i64)
    }

    async fn get(&self, id: i32) -> Result<Option<Question>, DbError> {
        let tables = self.tables.read().await;
        Ok(tables.questions.get(&id).cloned())
    }

    async fn list_by_category(&self, category_id: i32) -> Result<Vec<Question>, DbError> {
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .values()
            .filter(|q| q.category == category_id)
            .cloned()
            .collect())
    }

    async fn search(&self, term: &str) -> Result<Vec<Question>, DbError> {
        let needle = term.to_lowercase();
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .values()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn create(&self, question: NewQuestion) -> Result<Question, DbError> {
        let mut tables = self.tables.write().await;
        if !tables.categories.contains_key(&question.category()) {
            return Err(DbError::Constraint(format!(
                "category {} does not exist",
                question.category()
            )));
        }

        tables.last_question_id += 1;
        let stored = question.into_question(tables.last_question_id);
        tables.questions.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: i32) -> Result<bool, DbError> {
        let mut tables = self.tables.write().await;
        Ok(tables.questions.remove(&id).is_some())
    }
}
