use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

pub async fn get_all_questions(pool: &SqlitePool) -> sqlx::Result<Vec<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty FROM questions ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get_questions_for_category(
    pool: &SqlitePool,
    category_id: i64,
) -> sqlx::Result<Vec<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty FROM questions
        WHERE category = ?1
        ORDER BY id
        "#,
    )
    .bind(category_id)
    .fetch_all(pool)
    .await
}

/// Substring match on the question text only, with the store's `LIKE` semantics.
pub async fn search_questions(pool: &SqlitePool, term: &str) -> sqlx::Result<Vec<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty FROM questions
        WHERE question LIKE ?1
        ORDER BY id
        "#,
    )
    .bind(format!("%{term}%"))
    .fetch_all(pool)
    .await
}

pub async fn create_question(pool: &SqlitePool, new_question: &NewQuestion) -> sqlx::Result<i64> {
    let id = sqlx::query(
        r#"
        INSERT INTO questions (question, answer, category, difficulty) VALUES (?1, ?2, ?3, ?4)
        "#,
    )
    .bind(&new_question.question)
    .bind(&new_question.answer)
    .bind(new_question.category)
    .bind(new_question.difficulty)
    .execute(pool)
    .await?
    .last_insert_rowid();

    Ok(id)
}

/// Returns the number of removed rows, 0 when no question had this id.
pub async fn delete_question(pool: &SqlitePool, id: i64) -> sqlx::Result<u64> {
    let result = sqlx::query(
        r#"
        DELETE FROM questions WHERE id = ?1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

/// Upserts by id, used to seed a database from exported data.
pub async fn import_questions(pool: &SqlitePool, questions: Vec<Question>) -> sqlx::Result<()> {
    let mut tx = pool.begin().await?;
    for question in questions {
        sqlx::query(
            r#"
            INSERT INTO questions (id, question, answer, category, difficulty)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ON CONFLICT(id) DO UPDATE SET
                question = excluded.question,
                answer = excluded.answer,
                category = excluded.category,
                difficulty = excluded.difficulty
            "#,
        )
        .bind(question.id)
        .bind(&question.question)
        .bind(&question.answer)
        .bind(question.category)
        .bind(question.difficulty)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{establish_in_memory_connection, run_migrations};

    async fn setup_test_db() -> SqlitePool {
        let pool = establish_in_memory_connection().await.unwrap();
        run_migrations(&pool).await.unwrap();
        pool
    }

    fn new_question(question: &str, category: i64) -> NewQuestion {
        NewQuestion {
            question: question.to_owned(),
            answer: "answer".to_owned(),
            category,
            difficulty: 1,
        }
    }

    #[tokio::test]
    async fn search_matches_question_text_only() {
        let pool = setup_test_db().await;
        create_question(&pool, &new_question("What is the title of this book?", 1))
            .await
            .unwrap();
        let mut with_title_in_answer = new_question("Who wrote it?", 1);
        with_title_in_answer.answer = "the title page says".to_owned();
        create_question(&pool, &with_title_in_answer).await.unwrap();

        let found = search_questions(&pool, "title").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].question, "What is the title of this book?");
        assert!(search_questions(&pool, "nothing like this").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn category_filter_uses_integer_ids() {
        let pool = setup_test_db().await;
        create_question(&pool, &new_question("first", 1)).await.unwrap();
        create_question(&pool, &new_question("second", 2)).await.unwrap();
        create_question(&pool, &new_question("third", 1)).await.unwrap();

        let questions = get_questions_for_category(&pool, 1).await.unwrap();
        let texts: Vec<&str> = questions.iter().map(|q| q.question.as_str()).collect();
        assert_eq!(texts, ["first", "third"]);
    }

    #[tokio::test]
    async fn deleted_ids_are_not_reused() {
        let pool = setup_test_db().await;
        let first = create_question(&pool, &new_question("first", 1)).await.unwrap();
        let second = create_question(&pool, &new_question("second", 1)).await.unwrap();

        assert_eq!(delete_question(&pool, second).await.unwrap(), 1);
        assert_eq!(delete_question(&pool, second).await.unwrap(), 0);
        let remaining: Vec<i64> = get_all_questions(&pool)
            .await
            .unwrap()
            .iter()
            .map(|q| q.id)
            .collect();
        assert_eq!(remaining, [first]);

        let third = create_question(&pool, &new_question("third", 1)).await.unwrap();
        assert!(third > second && second > first);
    }

    #[tokio::test]
    async fn import_upserts_by_id() {
        let pool = setup_test_db().await;
        let id = create_question(&pool, &new_question("old text", 1)).await.unwrap();

        import_questions(
            &pool,
            vec![Question {
                id,
                question: "new text".to_owned(),
                answer: "a".to_owned(),
                category: 3,
                difficulty: 5,
            }],
        )
        .await
        .unwrap();

        let questions = get_all_questions(&pool).await.unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].id, id);
        assert_eq!(questions[0].question, "new text");
        assert_eq!(questions[0].category, 3);
    }
}
