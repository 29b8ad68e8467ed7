//! Question accessor over PostgreSQL
//!
//! - search: ILIKE with escaped wildcards, so `%` and `_` match literally
//! - create: INSERT ... RETURNING, constraint failures surface as DbError::Constraint
//! - delete: reports whether a row was removed

use async_trait::async_trait;
use sqlx::FromRow;
use trivia_core::{NewQuestion, Question};

use super::{DbError, PgStore, QuestionStore};

/// Question record from database
#[derive(Debug, Clone, FromRow)]
struct QuestionRow {
    id: i32,
    question: String,
    answer: String,
    category: i32,
    difficulty: i32,
}

impl From<QuestionRow> for Question {
    fn from(row: QuestionRow) -> Self {
        Question {
            id: row.id,
            question: row.question,
            answer: row.answer,
            category: row.category,
            difficulty: row.difficulty,
        }
    }
}

/// Escape LIKE wildcards so the term matches literally.
fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

#[async_trait]
impl QuestionStore for PgStore {
    async fn list(&self) -> Result<Vec<Question>, DbError> {
        let rows: Vec<QuestionRow> = sqlx::query_as(
            "SELECT id, question, answer, category, difficulty FROM questions ORDER BY id",
        )
        .fetch_all(self.pool())
        .await?;

        Ok(rows.into_iter().map(Question::from).collect())
    }

    async fn count(&self) -> Result<i64, DbError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
            .fetch_one(self.pool())
            .await?;
        Ok(count)
    }

    async fn get(&self, id: i32) -> Result<Option<Question>, DbError> {
        let row: Option<QuestionRow> = sqlx::query_as(
            "SELECT id, question, answer, category, difficulty FROM questions WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?;

        Ok(row.map(Question::from))
    }

    async fn list_by_category(&self, category_id: i32) -> Result<Vec<Question>, DbError> {
        let rows: Vec<QuestionRow> = sqlx::query_as(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category_id)
        .fetch_all(self.pool())
        .await?;

        Ok(rows.into_iter().map(Question::from).collect())
    }

    async fn search(&self, term: &str) -> Result<Vec<Question>, DbError> {
        let rows: Vec<QuestionRow> = sqlx::query_as(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE question ILIKE $1 ESCAPE '\'
            ORDER BY id
            "#,
        )
        .bind(like_pattern(term))
        .fetch_all(self.pool())
        .await?;

        Ok(rows.into_iter().map(Question::from).collect())
    }

    async fn create(&self, question: NewQuestion) -> Result<Question, DbError> {
        let row: QuestionRow = sqlx::query_as(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, category, difficulty
            "#,
        )
        .bind(question.question())
        .bind(question.answer())
        .bind(question.category())
        .bind(question.difficulty())
        .fetch_one(self.pool())
        .await
        .map_err(DbError::classify)?;

        tracing::debug!(id = row.id, "question created");
        Ok(row.into())
    }

    async fn delete(&self, id: i32) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, schema, CategoryStore};

    #[test]
    fn like_pattern_wraps_term() {
        assert_eq!(like_pattern("title"), "%title%");
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("100%"), "%100\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
        assert_eq!(like_pattern("back\\slash"), "%back\\\\slash%");
    }

    // Integration tests - run with DATABASE_URL set
    // cargo test -p trivia-server -- --ignored

    async fn seeded_store() -> PgStore {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        schema::init(&pool).await.expect("schema init failed");
        crate::db::seed::seed_postgres(&pool).await.expect("seed failed");
        PgStore::new(pool)
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_then_delete() {
        let store = seeded_store().await;
        let category = CategoryStore::list(&store).await.unwrap()[0].id;
        let before = store.count().await.unwrap();

        let new = NewQuestion::new("Which planet has the most moons?", "Saturn", category, 3)
            .unwrap();
        let created = store.create(new).await.unwrap();
        assert_eq!(created.answer, "Saturn");
        assert_eq!(store.count().await.unwrap(), before + 1);

        let found = store.search("MOST MOONS").await.unwrap();
        assert!(found.iter().any(|q| q.id == created.id));

        assert!(store.delete(created.id).await.unwrap());
        assert!(!store.delete(created.id).await.unwrap());
        assert_eq!(store.count().await.unwrap(), before);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_with_unknown_category_is_constraint() {
        let store = seeded_store().await;
        let new = NewQuestion::new("Orphan?", "Yes", 99_999, 1).unwrap();
        let err = store.create(new).await.unwrap_err();
        assert!(matches!(err, DbError::Constraint(_)));
    }
}
