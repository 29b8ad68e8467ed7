//! Standard categories and sample questions

use sqlx::PgPool;

use super::DbError;

/// Category labels, seeded with ids 1..=6 in this order.
pub const CATEGORIES: &[&str] = &[
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

/// (question, answer, category id, difficulty)
pub const SAMPLE_QUESTIONS: &[(&str, &str, i32, i32)] = &[
    ("What is the heaviest organ in the human body?", "The Liver", 1, 4),
    ("Who discovered penicillin?", "Alexander Fleming", 1, 3),
    ("Hematology is a branch of medicine involving the study of what?", "Blood", 1, 4),
    ("Which Dutch graphic artist, initials M C, was a creator of optical illusions?", "Escher", 2, 1),
    ("La Giaconda is better known as what?", "Mona Lisa", 2, 3),
    ("How many paintings did Van Gogh sell in his lifetime?", "One", 2, 4),
    ("What is the largest lake in Africa?", "Lake Victoria", 3, 2),
    ("In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 3, 3),
    ("The Taj Mahal is located in which Indian city?", "Agra", 3, 2),
    ("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 4, 2),
    ("Which dung beetle was worshipped by the ancient Egyptians?", "Scarab", 4, 4),
    ("Who invented Peanut Butter?", "George Washington Carver", 4, 2),
    ("What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 5, 4),
    ("What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?", "Tom Cruise", 5, 4),
    ("Which is the only team to play in every soccer World Cup tournament?", "Brazil", 6, 3),
    ("Which country won the first ever soccer World Cup in 1930?", "Uruguay", 6, 4),
];

/// Seed categories and sample questions into empty tables.
///
/// Tables that already hold rows are left untouched. Returns the number of
/// (categories, questions) inserted.
pub async fn seed_postgres(pool: &PgPool) -> Result<(usize, usize), DbError> {
    let (category_count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM categories")
        .fetch_one(pool)
        .await?;

    let mut categories_inserted = 0;
    if category_count == 0 {
        for (index, kind) in CATEGORIES.iter().enumerate() {
            sqlx::query(r#"INSERT INTO categories (id, "type") VALUES ($1, $2)"#)
                .bind(index as i32 + 1)
                .bind(*kind)
                .execute(pool)
                .await?;
            categories_inserted += 1;
        }

        // Explicit ids bypass the sequence
        sqlx::query("SELECT setval(pg_get_serial_sequence('categories', 'id'), MAX(id)) FROM categories")
            .execute(pool)
            .await?;
    }

    let (question_count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
        .fetch_one(pool)
        .await?;

    let mut questions_inserted = 0;
    if question_count == 0 {
        for (question, answer, category, difficulty) in SAMPLE_QUESTIONS {
            sqlx::query(
                "INSERT INTO questions (question, answer, category, difficulty) VALUES ($1, $2, $3, $4)",
            )
            .bind(*question)
            .bind(*answer)
            .bind(*category)
            .bind(*difficulty)
            .execute(pool)
            .await
            .map_err(DbError::classify)?;
            questions_inserted += 1;
        }
    }

    tracing::info!(
        categories = categories_inserted,
        questions = questions_inserted,
        "seed complete"
    );
    Ok((categories_inserted, questions_inserted))
}
