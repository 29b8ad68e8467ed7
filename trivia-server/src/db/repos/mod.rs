//! Store accessors for categories and questions
//!
//! Handlers depend on the `CategoryStore` / `QuestionStore` traits.
//! `PgStore` implements both over a sqlx pool; `MemoryStore` implements
//! both in-process.

pub mod categories;
pub mod questions;

use async_trait::async_trait;
use sqlx::PgPool;
use trivia_core::{Category, NewQuestion, Question};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Write rejected by a store constraint (e.g. unknown category)
    #[error("constraint violated: {0}")]
    Constraint(String),
}

impl DbError {
    /// Split constraint violations out of raw sqlx errors.
    pub(crate) fn classify(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_foreign_key_violation()
                || db_err.is_check_violation()
                || db_err.is_unique_violation()
            {
                return Self::Constraint(db_err.message().to_owned());
            }
        }
        Self::Sqlx(err)
    }
}

/// Read access to categories
#[async_trait]
pub trait CategoryStore: Send + Sync {
    /// All categories, ordered by id.
    async fn list(&self) -> Result<Vec<Category>, DbError>;

    /// One category by id.
    async fn get(&self, id: i32) -> Result<Option<Category>, DbError>;
}

/// Read/write access to questions
#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// All questions, ordered by id.
    async fn list(&self) -> Result<Vec<Question>, DbError>;

    async fn count(&self) -> Result<i64, DbError>;

    /// One question by id.
    async fn get(&self, id: i32) -> Result<Option<Question>, DbError>;

    /// Questions whose category equals `category_id`, ordered by id.
    async fn list_by_category(&self, category_id: i32) -> Result<Vec<Question>, DbError>;

    /// Case-insensitive substring match over question text, ordered by id.
    async fn search(&self, term: &str) -> Result<Vec<Question>, DbError>;

    /// Insert and return the stored record with its new id.
    async fn create(&self, question: NewQuestion) -> Result<Question, DbError>;

    /// Delete by id. Returns whether a record existed.
    async fn delete(&self, id: i32) -> Result<bool, DbError>;
}

/// PostgreSQL-backed store
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
