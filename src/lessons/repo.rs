use sqlx::PgPool;

use crate::lessons::repo_types::{Lesson, LessonPayload};

pub async fn list_by_user(db: &PgPool, user_id: &str) -> sqlx::Result<Vec<Lesson>> {
    sqlx::query_as::<_, Lesson>(
        r#"
        SELECT userid, CAST(id AS BIGINT) AS id, name, description, point
        FROM lesson
        WHERE userid = $1
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await
}

pub async fn find_by_id(db: &PgPool, id: i64) -> sqlx::Result<Option<Lesson>> {
    sqlx::query_as::<_, Lesson>(
        r#"
        SELECT userid, CAST(id AS BIGINT) AS id, name, description, point
        FROM lesson
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await
}

pub async fn insert(db: &PgPool, lesson: &LessonPayload) -> sqlx::Result<Lesson> {
    sqlx::query_as::<_, Lesson>(
        r#"
        INSERT INTO lesson (userid, name, description, point)
        VALUES ($1, $2, $3, $4)
        RETURNING userid, CAST(id AS BIGINT) AS id, name, description, point
        "#,
    )
    .bind(&lesson.user_id)
    .bind(&lesson.name)
    .bind(&lesson.description)
    .bind(lesson.point)
    .fetch_one(db)
    .await
}

/// Overwrite every writable field. Returns the number of rows touched.
pub async fn update(db: &PgPool, id: i64, lesson: &LessonPayload) -> sqlx::Result<u64> {
    let result = sqlx::query(
        r#"
        UPDATE lesson
        SET userid = $1, name = $2, description = $3, point = $4
        WHERE id = $5
        "#,
    )
    .bind(&lesson.user_id)
    .bind(&lesson.name)
    .bind(&lesson.description)
    .bind(lesson.point)
    .bind(id)
    .execute(db)
    .await?;
    Ok(result.rows_affected())
}

/// Returns the number of rows removed.
pub async fn delete(db: &PgPool, id: i64) -> sqlx::Result<u64> {
    let result = sqlx::query("DELETE FROM lesson WHERE id = $1")
        .bind(id)
        .execute(db)
        .await?;
    Ok(result.rows_affected())
}
