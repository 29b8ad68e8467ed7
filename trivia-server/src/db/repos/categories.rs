//! Category accessor over PostgreSQL

use async_trait::async_trait;
use sqlx::FromRow;
use trivia_core::Category;

use super::{CategoryStore, DbError, PgStore};

/// Category record from database
#[derive(Debug, Clone, FromRow)]
struct CategoryRow {
    id: i32,
    #[sqlx(rename = "type")]
    kind: String,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category::new(row.id, row.kind)
    }
}

#[async_trait]
impl CategoryStore for PgStore {
    async fn list(&self) -> Result<Vec<Category>, DbError> {
        let rows: Vec<CategoryRow> =
            sqlx::query_as(r#"SELECT id, "type" FROM categories ORDER BY id"#)
                .fetch_all(self.pool())
                .await?;

        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn get(&self, id: i32) -> Result<Option<Category>, DbError> {
        let row: Option<CategoryRow> =
            sqlx::query_as(r#"SELECT id, "type" FROM categories WHERE id = $1"#)
                .bind(id)
                .fetch_optional(self.pool())
                .await?;

        Ok(row.map(Category::from))
    }
}
